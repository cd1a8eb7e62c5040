pub mod app;
pub mod class;
pub mod components;
pub mod hooks;
pub mod pages;
pub mod routes;

pub use crate::app::App;

#[cfg(feature = "web")]
mod entry {
    use leptos::mount::mount_to_body;
    use leptos::prelude::*;
    use wasm_bindgen::prelude::*;

    use crate::App;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        mount_to_body(|| view! { <App/> });
    }
}
