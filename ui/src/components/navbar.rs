use leptos::prelude::*;

/// A navigable `(href, label)` pair. Order in a list is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self { href: href.into(), label: label.into() }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

impl Direction {
    pub fn list_class(self) -> &'static str {
        match self {
            Direction::Row => "flex flex-row",
            Direction::Column => "flex flex-col",
        }
    }

    pub fn item_class(self) -> &'static str {
        match self {
            Direction::Row => "ml-4 xs:ml-2 first:ml-0 last:mr-2",
            Direction::Column => "pr-4 pl-20",
        }
    }

    pub fn link_class(self) -> &'static str {
        match self {
            Direction::Row => "font-bold text-gray-900 hover:text-cyan-600 transition-colors",
            Direction::Column => "block pt-2 mb-2 text-right font-bold text-gray-900 hover:text-cyan-600",
        }
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        match s {
            "col" | "column" => Direction::Column,
            _ => Direction::Row,
        }
    }
}

pub const DEFAULT_NAV_LABEL: &str = "Main navigation";

/// Ordered list of links inside a `<nav>` landmark. The `<ul>` is always
/// rendered, even with no links.
#[component]
pub fn Navbar(
    direction: Direction,
    #[prop(into)] links: Signal<Vec<NavLink>>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| DEFAULT_NAV_LABEL.to_owned());

    let items = move || {
        links
            .get()
            .into_iter()
            .map(|link| {
                let aria_label = link.label.clone();
                view! {
                    <li class=direction.item_class()>
                        <a
                            href=link.href
                            aria-label=aria_label
                            tabindex="0"
                            class=direction.link_class()
                        >
                            {link.label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav aria-label=label>
            <ul class=direction.list_class()>{items}</ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_with_row_fallback() {
        assert_eq!(Direction::from("row"), Direction::Row);
        assert_eq!(Direction::from("col"), Direction::Column);
        assert_eq!(Direction::from("column"), Direction::Column);
        assert_eq!(Direction::from("diagonal"), Direction::Row);
    }

    #[test]
    fn column_links_are_block_and_right_aligned() {
        let classes: Vec<_> = Direction::Column.link_class().split_whitespace().collect();
        for c in ["block", "pt-2", "mb-2", "text-right", "font-bold", "text-gray-900"] {
            assert!(classes.contains(&c));
        }
    }

    #[test]
    fn row_links_are_inline() {
        let classes: Vec<_> = Direction::Row.link_class().split_whitespace().collect();
        assert!(!classes.contains(&"block"));
        assert!(!classes.contains(&"text-right"));
        assert!(classes.contains(&"transition-colors"));
    }

    #[test]
    fn label_is_both_text_and_aria_label() {
        let html = Owner::new().with(|| {
            view! { <Navbar direction=Direction::Row links={vec![NavLink::new("/about", "About")]}/> }
                .to_html()
        });
        assert!(html.contains(r#"aria-label="About""#));
        assert_eq!(html.matches("About").count(), 2);
    }
}
