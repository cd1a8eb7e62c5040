use leptos::prelude::*;
use leptos_router::components::Router;

use leptos_meta::provide_meta_context;
use leptos_meta::Title;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="Inkaya"/>
      <Router>
        <div class="flex min-h-screen flex-col">
          <Header/>
          <main class="flex-1">
            <RoutesMenu/>
          </main>
          <Footer/>
        </div>
      </Router>
    }
}
