use chrono::Datelike;
use leptos::prelude::*;

use ui::components::button::{Button, ButtonSize, ButtonType, ButtonVariant};
use ui::components::footer::Footer;
use ui::components::header::HeaderBar;
use ui::components::icons::{CloseIcon, MenuIcon};
use ui::components::navbar::{Direction, NavLink, Navbar};
use ui::components::product_card::{BadgeVariant, CardVariant, ProductCard};
use ui::components::side_menu::SideMenu;
use ui::pages::{about::About, home::Home, simple::Contact, simple::Login, simple::SignUp};

fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| f().to_html())
}

fn links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Home"),
        NavLink::new("/about", "About"),
        NavLink::new("/contact", "Contact"),
    ]
}

#[test]
fn button_defaults_to_primary_medium() {
    let html = render(|| view! { <Button>"Save"</Button> });
    assert!(html.contains("bg-cyan-600"));
    assert!(html.contains("px-4 py-2 text-base"));
    assert!(html.contains("focus:ring-2"));
    assert!(html.contains("Save"));
    assert!(!html.contains("type="));
}

#[test]
fn button_renders_type_and_disabled() {
    let html = render(|| {
        view! {
            <Button kind=ButtonType::Submit size=ButtonSize::Large disabled=true>"Send"</Button>
        }
    });
    assert!(html.contains(r#"type="submit""#));
    assert!(html.contains("disabled"));
    assert!(html.contains("px-6 py-3 text-lg"));
}

#[test]
fn button_class_override_replaces_defaults() {
    let html = render(|| view! { <Button variant=ButtonVariant::Danger class="custom-btn">"x"</Button> });
    assert!(html.contains(r#"class="custom-btn""#));
    assert!(!html.contains("bg-red-600"));
    assert!(!html.contains("rounded-lg"));
}

#[test]
fn button_passes_through_attributes() {
    let html = render(|| {
        view! { <Button id="save" aria_label="Save draft" attr:data-testid="save-btn">"Save"</Button> }
    });
    assert!(html.contains(r#"id="save""#));
    assert!(html.contains(r#"aria-label="Save draft""#));
    assert!(html.contains(r#"data-testid="save-btn""#));
}

#[test]
fn icon_button_has_no_focus_ring() {
    let html = render(|| view! { <Button variant=ButtonVariant::Icon>"✕"</Button> });
    assert!(html.contains("bg-transparent text-gray-900"));
    assert!(!html.contains("focus:ring-2"));
}

#[test]
fn navbar_renders_links_in_order() {
    let html = render(|| view! { <Navbar direction=Direction::Row links=links()/> });
    assert!(html.contains(r#"aria-label="Main navigation""#));
    assert!(html.contains("flex flex-row"));

    let home = html.find(r#"href="/""#).unwrap();
    let about = html.find(r#"href="/about""#).unwrap();
    let contact = html.find(r#"href="/contact""#).unwrap();
    assert!(home < about && about < contact);
    assert_eq!(html.matches(r#"tabindex="0""#).count(), 3);
}

#[test]
fn navbar_order_follows_input_permutation() {
    let mut reversed = links();
    reversed.reverse();
    let html = render(move || view! { <Navbar direction=Direction::Row links=reversed/> });

    let home = html.find(r#"href="/""#).unwrap();
    let contact = html.find(r#"href="/contact""#).unwrap();
    assert!(contact < home);
}

#[test]
fn navbar_empty_keeps_list_container() {
    let html = render(|| view! { <Navbar direction=Direction::Row links={Vec::<NavLink>::new()}/> });
    assert!(html.contains("<nav"));
    assert!(html.contains(r#"<ul class="flex flex-row""#));
    assert!(!html.contains("<li"));
}

#[test]
fn navbar_keeps_duplicate_labels() {
    let dupes = vec![NavLink::new("/home1", "Home"), NavLink::new("/home2", "Home")];
    let html = render(move || view! { <Navbar direction=Direction::Row links=dupes/> });
    assert!(html.contains(r#"href="/home1""#));
    assert!(html.contains(r#"href="/home2""#));
    assert_eq!(html.matches(r#"aria-label="Home""#).count(), 2);
}

#[test]
fn navbar_column_styles() {
    let html = render(|| view! { <Navbar direction=Direction::Column links=links()/> });
    assert!(html.contains("flex flex-col"));
    assert!(html.contains("pr-4 pl-20"));
    assert!(html.contains("text-right"));
}

#[test]
fn side_menu_starts_closed() {
    let html = render(|| view! { <SideMenu links=links()/> });
    assert!(html.contains(r#"aria-label="Toggle menu""#));
    assert!(html.contains(r#"aria-label="Close menu""#));
    assert!(html.contains(r#"aria-label="Side menu""#));
    assert!(html.contains("translate-x-full"));
    assert!(!html.contains("translate-x-0"));
    assert!(html.contains("flex flex-col"));
}

#[test]
fn side_menu_without_links_renders_empty_list() {
    let html = render(|| view! { <SideMenu/> });
    assert!(html.contains(r#"aria-label="Side navigation""#));
    assert!(!html.contains("<li"));
}

fn split_at_side_menu(html: &str) -> (&str, &str) {
    let at = html.find(r#"aria-label="Side menu""#).unwrap();
    html.split_at(at)
}

#[test]
fn header_narrow_shows_auxiliary_inline() {
    let html = render(|| view! { <HeaderBar narrow=true/> });
    let (inline, menu) = split_at_side_menu(&html);

    assert!(inline.contains(r#"href="/login""#));
    assert!(inline.contains(r#"href="/signup""#));
    assert!(!inline.contains(r#"aria-label="Home""#));
    assert!(!inline.contains(r#"href="/about""#));
    assert!(menu.contains(r#"href="/about""#));
}

#[test]
fn header_wide_shows_primary_then_auxiliary() {
    let html = render(|| view! { <HeaderBar narrow=false/> });
    let (inline, menu) = split_at_side_menu(&html);

    let about = inline.find(r#"href="/about""#).unwrap();
    let contact = inline.find(r#"href="/contact""#).unwrap();
    let login = inline.find(r#"href="/login""#).unwrap();
    let signup = inline.find(r#"href="/signup""#).unwrap();
    assert!(about < contact && contact < login && login < signup);
    assert!(menu.contains(r#"href="/contact""#));
}

#[test]
fn header_has_logo_link() {
    let html = render(|| view! { <HeaderBar narrow=false/> });
    assert!(html.contains(r#"aria-label="Go to homepage""#));
    assert!(html.contains(r#"src="/images/logo.svg""#));
    assert!(html.contains(r#"alt="Inkaya Logo""#));
}

#[test]
fn footer_content() {
    let html = render(|| view! { <Footer/> });
    let year = chrono::Local::now().year();

    assert!(html.contains("<footer"));
    assert!(html.contains("bg-pink-700"));
    assert!(html.contains(r#"id="footer-heading""#));
    assert!(html.contains("vinyl stickers"));
    assert!(html.contains(r#"href="/privacy""#));
    assert!(html.contains(r#"href="/terms""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(html.contains("All rights reserved"));
    assert!(html.contains(&year.to_string()));
}

#[test]
fn icons_render_paths_and_merge_classes() {
    let menu = render(|| view! { <MenuIcon/> });
    assert!(menu.contains("M4 6h16M4 12h16M4 18h16"));
    assert!(menu.contains("w-6 h-6"));

    let close = render(|| view! { <CloseIcon extra_class="w-12 h-12"/> });
    assert!(close.contains("M6 18L18 6M6 6l12 12"));
    assert!(close.contains("w-12 h-12"));
    assert!(!close.contains("w-6"));
}

#[test]
fn product_card_renders_price_and_badge() {
    let html = render(|| {
        view! {
            <ProductCard
                title="Test Product"
                description="This is a test product description"
                price=29.99
                image="/img/test.jpg"
                image_alt="Test product image"
                badge="Sale"
                badge_variant=BadgeVariant::Danger
                variant=CardVariant::Compact
            />
        }
    });
    assert!(html.contains("<article"));
    assert!(html.contains("$29.99"));
    assert!(html.contains("Sale"));
    assert!(html.contains("bg-red-600"));
    assert!(html.contains("p-3"));
    assert!(!html.contains("cursor-pointer"));
    assert!(html.contains(r#"alt="Test product image""#));
}

#[test]
fn product_card_without_currency_or_badge() {
    let html = render(|| {
        view! {
            <ProductCard
                title="Plain"
                description="No frills"
                price=50.0
                image="/img/plain.jpg"
                image_alt="Plain"
                show_currency=false
                extra_class="custom-class"
            />
        }
    });
    assert!(html.contains("50.00"));
    assert!(!html.contains("$50.00"));
    assert!(!html.contains("rounded-md text-xs"));
    assert!(html.contains("custom-class"));
}

#[test]
fn pages_carry_their_headings() {
    assert!(render(|| view! { <Home/> }).contains("Welcome to Inkaya"));
    assert!(render(|| view! { <Contact/> }).contains("Contact Page"));
    assert!(render(|| view! { <Login/> }).contains("Login Page"));
    assert!(render(|| view! { <SignUp/> }).contains("Sign Up Page"));

    let about = render(|| view! { <About/> });
    for heading in ["About Inkaya", "What We Offer", "Our Mission", "Why Choose Inkaya?"] {
        assert!(about.contains(heading), "missing {heading}");
    }
    assert!(about.contains("Instant digital delivery"));
    assert!(about.contains("personalized print-on-demand products"));
}
