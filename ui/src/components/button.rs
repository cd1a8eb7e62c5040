use leptos::callback::{Callable, Callback};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::class::join_classes;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
    Icon,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// The `type` attribute of the rendered `<button>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonType {
    Button,
    Submit,
    Reset,
}

const ICON_BASE: &str = "font-semibold rounded-lg transition duration-150 ease-in-out \
                         disabled:opacity-50 disabled:cursor-not-allowed cursor-pointer";
const FOCUS_RING: &str = "focus:outline-none focus:ring-2 focus:ring-offset-2";
const ICON_SPACING: &str = "ml-2 py-1";

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-cyan-600 text-white hover:bg-cyan-700 focus:ring-cyan-500",
            ButtonVariant::Secondary => "bg-gray-200 text-gray-800 hover:bg-gray-300 focus:ring-gray-400",
            ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
            ButtonVariant::Ghost => {
                "bg-transparent text-cyan-600 hover:bg-cyan-100 focus:ring-cyan-500 border border-cyan-600"
            }
            ButtonVariant::Icon => "bg-transparent text-gray-900",
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(s: &str) -> Self {
        match s {
            "secondary" => ButtonVariant::Secondary,
            "danger" => ButtonVariant::Danger,
            "ghost" => ButtonVariant::Ghost,
            "icon" => ButtonVariant::Icon,
            _ => ButtonVariant::Primary,
        }
    }
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-sm",
            ButtonSize::Medium => "px-4 py-2 text-base",
            ButtonSize::Large => "px-6 py-3 text-lg",
        }
    }
}

impl From<&str> for ButtonSize {
    fn from(s: &str) -> Self {
        match s {
            "sm" | "small" => ButtonSize::Small,
            "lg" | "large" => ButtonSize::Large,
            _ => ButtonSize::Medium,
        }
    }
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Full class string for a button. The icon variant ignores `size` and
/// carries no focus ring.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> String {
    match variant {
        ButtonVariant::Icon => join_classes(&[ICON_BASE, ICON_SPACING, variant.classes()]),
        _ => join_classes(&[ICON_BASE, FOCUS_RING, size.classes(), variant.classes()]),
    }
}

/// Runs `handler` unless the button is disabled.
pub(crate) fn dispatch_click<E>(disabled: bool, ev: E, handler: impl FnOnce(E)) {
    if !disabled {
        handler(ev);
    }
}

/// Reusable button.
///
/// A `class` replaces the computed classes entirely; it is not merged.
/// Other attributes (`data-*`, `title`, ...) can be passed with `attr:`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] kind: Option<ButtonType>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| button_classes(variant, size));

    let on_click = move |ev: MouseEvent| {
        if let Some(cb) = on_click.as_ref() {
            dispatch_click(disabled, ev, |ev| cb.run(ev));
        }
    };

    view! {
        <button
            type=kind.map(ButtonType::as_str)
            id=id
            class=class
            aria-label=aria_label
            disabled=disabled
            on:click=on_click
        >
            {children()}
        </button>
    }
}
