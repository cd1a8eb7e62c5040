use chrono::Datelike;
use leptos::prelude::*;

use crate::components::navbar::NavLink;

const LINK_CLASS: &str = "hover:text-yellow-300 transition-colors";

pub fn quick_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/about", "About"),
        NavLink::new("/contact", "Contact"),
        NavLink::new("/privacy", "Privacy"),
        NavLink::new("/terms", "Terms"),
    ]
}

/// External profiles: (href, aria-label, visible text).
pub const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("https://github.com", "Visit our GitHub", "GitHub"),
    ("https://twitter.com", "Follow us on Twitter", "Twitter"),
    ("https://linkedin.com", "Connect on LinkedIn", "LinkedIn"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {year} Inkaya. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    let quick = quick_links()
        .into_iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.href class=LINK_CLASS>{link.label}</a>
                </li>
            }
        })
        .collect_view();

    let social = SOCIAL_LINKS
        .iter()
        .map(|&(href, aria, text)| {
            view! {
                <li>
                    <a
                        href=href
                        aria-label=aria
                        target="_blank"
                        rel="noopener noreferrer"
                        class=LINK_CLASS
                    >
                        {text}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="bg-pink-700 text-white" aria-labelledby="footer-heading">
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="space-y-4 md:col-span-2">
                        <h2 id="footer-heading" class="text-2xl font-bold">"Inkaya"</h2>
                        <p class="text-sm text-pink-100">
                            "Custom vinyl stickers and print-ready designs, made to order."
                        </p>
                    </div>
                    <div>
                        <h3 class="text-sm font-semibold uppercase tracking-wider mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">{quick}</ul>
                    </div>
                    <div>
                        <h3 class="text-sm font-semibold uppercase tracking-wider mb-4">"Follow Us"</h3>
                        <ul class="space-y-2">{social}</ul>
                    </div>
                </div>
                <div class="mt-8 pt-8 border-t border-pink-600 text-center text-sm">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_mentions_year() {
        assert_eq!(copyright_line(2026), "© 2026 Inkaya. All rights reserved.");
    }

    #[test]
    fn quick_links_cover_legal_pages() {
        let hrefs: Vec<_> = quick_links().into_iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/about", "/contact", "/privacy", "/terms"]);
    }
}
