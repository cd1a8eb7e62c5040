use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <section class="flex min-h-[60vh] flex-col items-center justify-center p-8 sm:p-24 text-center">
        <h1 class="text-4xl sm:text-5xl font-bold mb-4 text-gray-900">"Welcome to Inkaya"</h1>
        <p class="mb-8 text-lg text-gray-600 max-w-2xl">
          "Personalized stickers, prints and print-ready designs, delivered the moment you check out."
        </p>

        <div class="flex gap-3">
          <a href="/product-demo" class="px-6 py-3 rounded-lg bg-cyan-600 hover:bg-cyan-700 text-white font-semibold">"Browse products"</a>
          <a href="/about" class="px-6 py-3 rounded-lg border border-cyan-600 text-cyan-600 hover:bg-cyan-100">"Learn more"</a>
        </div>
      </section>
    }
}
