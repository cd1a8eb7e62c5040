//! Placeholder pages that only carry a heading for now.

use leptos::prelude::*;

#[component]
fn PageHeading(title: &'static str) -> impl IntoView {
    view! {
      <section class="flex min-h-[60vh] flex-col items-center justify-center p-8 sm:p-24">
        <h1 class="text-4xl font-bold text-gray-900">{title}</h1>
      </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! { <PageHeading title="Contact Page"/> }
}

#[component]
pub fn Login() -> impl IntoView {
    view! { <PageHeading title="Login Page"/> }
}

#[component]
pub fn SignUp() -> impl IntoView {
    view! { <PageHeading title="Sign Up Page"/> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <p class="p-8 text-center">"404 – not found"</p> }
}
