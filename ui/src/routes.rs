use leptos::prelude::*;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{
    about::About, home::Home, product_demo::ProductDemo,
    simple::Contact, simple::Login, simple::NotFound, simple::SignUp,
};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("")              view=Home        />
        <Route path=path!("/about")        view=About       />
        <Route path=path!("/contact")      view=Contact     />
        <Route path=path!("/login")        view=Login       />
        <Route path=path!("/signup")       view=SignUp      />
        <Route path=path!("/product-demo") view=ProductDemo />
      </Routes>
    }
}
