use leptos::callback::Callback;
use leptos::ev::MouseEvent;
use leptos::leptos_dom::logging::console_log;
use leptos::prelude::*;

use crate::components::product_card::{BadgeVariant, CardVariant, ProductCard};

struct DemoProduct {
    title: &'static str,
    description: &'static str,
    price: f64,
    image: &'static str,
    image_alt: &'static str,
    badge: Option<(&'static str, BadgeVariant)>,
    show_currency: bool,
}

const fn product(
    title: &'static str,
    description: &'static str,
    price: f64,
    image: &'static str,
    image_alt: &'static str,
) -> DemoProduct {
    DemoProduct { title, description, price, image, image_alt, badge: None, show_currency: true }
}

impl DemoProduct {
    const fn badge(mut self, text: &'static str, variant: BadgeVariant) -> Self {
        self.badge = Some((text, variant));
        self
    }

    const fn without_currency(mut self) -> Self {
        self.show_currency = false;
        self
    }
}

const DEFAULT_ROW: &[DemoProduct] = &[
    product(
        "Premium Wireless Headphones",
        "Crystal-clear audio with active noise cancellation.",
        149.99,
        "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=300&fit=crop",
        "Premium wireless headphones",
    ),
    product(
        "Smart Watch",
        "Track your fitness goals with this sleek smartwatch.",
        299.99,
        "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400&h=300&fit=crop",
        "Smart watch",
    )
    .badge("New", BadgeVariant::Primary),
    product(
        "Professional Camera",
        "Capture stunning photos with this professional-grade camera.",
        1299.99,
        "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=400&h=300&fit=crop",
        "Professional camera",
    )
    .badge("Sale", BadgeVariant::Danger),
];

const COMPACT_ROW: &[DemoProduct] = &[
    product(
        "Wireless Earbuds",
        "Compact and lightweight wireless earbuds.",
        89.99,
        "https://images.unsplash.com/photo-1590658268037-6bf12165a8df?w=400&h=300&fit=crop",
        "Wireless earbuds",
    ),
    product(
        "USB-C Cable",
        "High-speed USB-C charging cable.",
        19.99,
        "https://images.unsplash.com/photo-1625948515291-69613efd103f?w=400&h=300&fit=crop",
        "USB-C cable",
    )
    .without_currency(),
    product(
        "Gaming Keyboard",
        "Mechanical gaming keyboard with RGB backlighting.",
        79.99,
        "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400&h=300&fit=crop",
        "Gaming keyboard",
    )
    .badge("Limited", BadgeVariant::Secondary),
];

const EXPANDED_ROW: &[DemoProduct] = &[
    product(
        "Premium Laptop",
        "32GB RAM and a 1TB SSD for developers, designers, and content creators.",
        2499.99,
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&h=300&fit=crop",
        "Premium laptop",
    )
    .badge("Pro", BadgeVariant::Primary),
    product(
        "Portable Speaker",
        "Waterproof speaker with 360-degree sound and 20-hour battery life.",
        59.99,
        "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=400&h=300&fit=crop",
        "Portable speaker",
    )
    .badge("Best Seller", BadgeVariant::Secondary),
];

fn cards(products: &'static [DemoProduct], variant: CardVariant) -> impl IntoView + use<> {
    products
        .iter()
        .map(|p| {
            let badge = p.badge.map(|(text, _)| text.to_owned());
            let badge_variant = p.badge.map(|(_, v)| v).unwrap_or_default();
            view! {
                <ProductCard
                    title=p.title
                    description=p.description
                    price=p.price
                    image=p.image
                    image_alt=p.image_alt
                    show_currency=p.show_currency
                    badge
                    badge_variant
                    variant
                />
            }
        })
        .collect_view()
}

#[component]
fn DemoSection(title: &'static str, grid: &'static str, children: Children) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-2xl font-semibold text-gray-900 mb-6">{title}</h2>
            <div class=grid>{children()}</div>
        </section>
    }
}

#[component]
pub fn ProductDemo() -> impl IntoView {
    let on_stand_click = Callback::new(|_: MouseEvent| console_log("product clicked: Tablet Stand"));

    view! {
      <div class="min-h-screen bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
        <div class="max-w-7xl mx-auto">
          <h1 class="text-4xl font-bold text-gray-900 mb-2 text-center">"Product Card Component Demo"</h1>
          <p class="text-gray-600 mb-12 text-center">"Showcasing different variants and configurations"</p>

          <div class="space-y-12">
            <DemoSection title="Default Variant" grid="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
              {cards(DEFAULT_ROW, CardVariant::Default)}
            </DemoSection>
            <DemoSection title="Compact Variant" grid="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
              {cards(COMPACT_ROW, CardVariant::Compact)}
            </DemoSection>
            <DemoSection title="Expanded Variant" grid="grid grid-cols-1 md:grid-cols-2 gap-8">
              {cards(EXPANDED_ROW, CardVariant::Expanded)}
            </DemoSection>
            <DemoSection title="Interactive (Clickable)" grid="grid grid-cols-1 md:grid-cols-3 gap-6">
              <ProductCard
                title="Tablet Stand"
                description="Adjustable aluminum tablet stand for optimal viewing angles."
                price=34.99
                image="https://images.unsplash.com/photo-1585338107529-13afc5f02586?w=400&h=300&fit=crop"
                image_alt="Tablet stand"
                on_click=on_stand_click
              />
            </DemoSection>
          </div>
        </div>
      </div>
    }
}
