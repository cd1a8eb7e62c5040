use leptos::prelude::*;

use crate::class::merge_classes;

const ICON_CLASS: &str = "w-6 h-6";

pub const MENU_PATH: &str = "M4 6h16M4 12h16M4 18h16";
pub const CLOSE_PATH: &str = "M6 18L18 6M6 6l12 12";

fn stroked_icon(path: &'static str, extra_class: Option<String>) -> impl IntoView + use<> {
    view! {
        <svg
            class=merge_classes(ICON_CLASS, extra_class.as_deref())
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path></path>
        </svg>
    }
}

/// Three-bar "hamburger" icon.
#[component]
pub fn MenuIcon(#[prop(optional, into)] extra_class: Option<String>) -> impl IntoView {
    stroked_icon(MENU_PATH, extra_class)
}

#[component]
pub fn CloseIcon(#[prop(optional, into)] extra_class: Option<String>) -> impl IntoView {
    stroked_icon(CLOSE_PATH, extra_class)
}
