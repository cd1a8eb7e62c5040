use leptos::prelude::*;

use crate::components::navbar::{Direction, NavLink, Navbar};
use crate::components::side_menu::SideMenu;
use crate::hooks::use_media_query;

/// Tailwind's `sm` breakpoint.
pub const SM_BREAKPOINT: u32 = 640;

pub fn primary_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Home"),
        NavLink::new("/about", "About"),
        NavLink::new("/contact", "Contact"),
    ]
}

pub fn auxiliary_links() -> Vec<NavLink> {
    vec![NavLink::new("/login", "Login"), NavLink::new("/signup", "Sign Up")]
}

/// Links shown inline. On narrow viewports the primary set lives only in
/// the side menu.
pub fn visible_links(narrow: bool) -> Vec<NavLink> {
    if narrow {
        auxiliary_links()
    } else {
        primary_links().into_iter().chain(auxiliary_links()).collect()
    }
}

/// Inline links following the breakpoint signal.
pub fn inline_links(narrow: Signal<bool>) -> Signal<Vec<NavLink>> {
    Signal::derive(move || visible_links(narrow.get()))
}

#[component]
pub fn Header() -> impl IntoView {
    let narrow = use_media_query(SM_BREAKPOINT);
    view! { <HeaderBar narrow/> }
}

/// Header markup for a given breakpoint signal.
#[component]
pub fn HeaderBar(#[prop(into)] narrow: Signal<bool>) -> impl IntoView {
    let links = inline_links(narrow);

    view! {
        <header class="bg-white shadow-sm z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex-1">
                        <a
                            href="/"
                            class="hover:opacity-80 transition-opacity focus:outline-none focus:ring-1 focus:ring-blue-300 focus:ring-offset-1 rounded"
                            aria-label="Go to homepage"
                        >
                            <img src="/images/logo.svg" alt="Inkaya Logo" width="100" height="32"/>
                        </a>
                    </div>
                    <Navbar direction=Direction::Row links/>
                    <div class="sm:block md:hidden">
                        <SideMenu links=primary_links()/>
                    </div>
                </div>
            </div>
        </header>
    }
}
