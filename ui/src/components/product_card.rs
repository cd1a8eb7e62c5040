use leptos::callback::{Callable, Callback};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::class::join_classes;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    Compact,
    #[default]
    Default,
    Expanded,
}

impl CardVariant {
    pub fn padding(self) -> &'static str {
        match self {
            CardVariant::Compact => "p-3",
            CardVariant::Default => "p-4",
            CardVariant::Expanded => "p-6",
        }
    }
}

impl From<&str> for CardVariant {
    fn from(s: &str) -> Self {
        match s {
            "compact" => CardVariant::Compact,
            "expanded" => CardVariant::Expanded,
            _ => CardVariant::Default,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl BadgeVariant {
    pub fn classes(self) -> &'static str {
        match self {
            BadgeVariant::Primary => "bg-cyan-600 text-white",
            BadgeVariant::Secondary => "bg-gray-200 text-gray-800",
            BadgeVariant::Danger => "bg-red-600 text-white",
        }
    }
}

impl From<&str> for BadgeVariant {
    fn from(s: &str) -> Self {
        match s {
            "secondary" => BadgeVariant::Secondary,
            "danger" => BadgeVariant::Danger,
            _ => BadgeVariant::Primary,
        }
    }
}

const CARD_BASE: &str = "border border-gray-200 rounded-lg shadow-sm hover:shadow-md \
                         transition-shadow duration-200 bg-white overflow-hidden";
const BADGE_BASE: &str = "absolute top-2 right-2 px-2 py-1 rounded-md text-xs font-semibold";

/// Two decimals, with a leading `$` when `show_currency`.
pub fn format_price(price: f64, show_currency: bool) -> String {
    if show_currency {
        format!("${price:.2}")
    } else {
        format!("{price:.2}")
    }
}

pub fn card_classes(variant: CardVariant, clickable: bool, extra_class: Option<&str>) -> String {
    join_classes(&[
        CARD_BASE,
        variant.padding(),
        if clickable { "cursor-pointer" } else { "" },
        extra_class.unwrap_or_default(),
    ])
}

pub fn badge_classes(variant: BadgeVariant) -> String {
    join_classes(&[BADGE_BASE, variant.classes()])
}

#[component]
pub fn ProductCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    price: f64,
    #[prop(into)] image: String,
    #[prop(into)] image_alt: String,
    #[prop(default = true)] show_currency: bool,
    #[prop(optional, into)] badge: MaybeProp<String>,
    #[prop(optional)] badge_variant: BadgeVariant,
    #[prop(optional)] variant: CardVariant,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] extra_class: Option<String>,
) -> impl IntoView {
    let class = card_classes(variant, on_click.is_some(), extra_class.as_deref());

    let badge = move || {
        badge
            .get()
            .map(|text| view! { <span class=badge_classes(badge_variant)>{text}</span> })
    };

    let on_click = move |ev: MouseEvent| {
        if let Some(cb) = on_click.as_ref() {
            cb.run(ev);
        }
    };

    view! {
        <article class=class on:click=on_click>
            <div class="relative mb-3">
                <img
                    src=image
                    alt=image_alt
                    width="400"
                    height="300"
                    class="w-full h-48 object-cover rounded-md"
                />
                {badge}
            </div>
            <div>
                <h3 class="text-lg font-semibold text-gray-900 mb-2">{title}</h3>
                <p class="text-sm text-gray-600 mb-3">{description}</p>
                <p class="text-xl font-bold text-cyan-600">{format_price(price, show_currency)}</p>
            </div>
        </article>
    }
}
