use leptos::callback::Callback;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::class::join_classes;
use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::navbar::{Direction, NavLink, Navbar};

/// Open/closed state of the side menu. Only the menu's own buttons
/// move it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        }
    }

    pub fn opened(self) -> Self {
        PanelState::Open
    }

    pub fn closed(self) -> Self {
        PanelState::Closed
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    /// Exactly one offset per state, so the slide is a CSS transition
    /// rather than a mount/unmount.
    pub fn transform_class(self) -> &'static str {
        match self {
            PanelState::Closed => "translate-x-full",
            PanelState::Open => "translate-x-0",
        }
    }
}

const PANEL_CLASS: &str = "fixed top-0 right-0 h-full w-48 bg-white p-4 font-bold shadow-lg \
                           transform transition-transform duration-300 ease-in-out";

pub fn panel_classes(state: PanelState) -> String {
    join_classes(&[PANEL_CLASS, state.transform_class()])
}

/// Shared open/closed state of one side menu and its derived panel classes.
#[derive(Copy, Clone)]
pub struct PanelControl {
    state: RwSignal<PanelState>,
}

impl PanelControl {
    pub fn new() -> Self {
        Self { state: RwSignal::new(PanelState::default()) }
    }

    pub fn state(&self) -> PanelState {
        self.state.get_untracked()
    }

    pub fn toggle(&self) {
        self.state.update(|s| *s = s.toggled());
    }

    pub fn close(&self) {
        self.state.update(|s| *s = s.closed());
    }

    pub fn classes(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || panel_classes(state.get()))
    }
}

impl Default for PanelControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Slide-in navigation from the right edge. The panel stays mounted;
/// open/closed only swaps its transform class.
#[component]
pub fn SideMenu(#[prop(optional)] links: Vec<NavLink>) -> impl IntoView {
    let panel = PanelControl::new();

    let toggle = Callback::new(move |_: MouseEvent| panel.toggle());
    let close = Callback::new(move |_: MouseEvent| panel.close());

    view! {
        <Button variant=ButtonVariant::Icon aria_label="Toggle menu" on_click=toggle>
            <MenuIcon/>
        </Button>
        <aside
            role="navigation"
            aria-label="Side menu"
            class=panel.classes()
        >
            <div class="flex justify-end pt-2 pb-4">
                <Button variant=ButtonVariant::Icon aria_label="Close menu" on_click=close>
                    <CloseIcon/>
                </Button>
            </div>
            <Navbar direction=Direction::Column links=links label="Side navigation"/>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(PanelState::default(), PanelState::Closed);
        assert!(!PanelState::default().is_open());
    }

    #[test]
    fn toggle_flips() {
        let open = PanelState::Closed.toggled();
        assert!(open.is_open());
        assert_eq!(open.toggled(), PanelState::Closed);
    }

    #[test]
    fn even_toggles_return_to_closed() {
        let mut s = PanelState::default();
        for _ in 0..4 {
            s = s.toggled();
        }
        assert_eq!(s, PanelState::Closed);
    }

    #[test]
    fn close_from_open_and_closed() {
        assert_eq!(PanelState::Open.closed(), PanelState::Closed);
        assert_eq!(PanelState::Closed.closed(), PanelState::Closed);
        assert_eq!(PanelState::Closed.opened(), PanelState::Open);
    }

    #[test]
    fn panel_classes_follow_toggle_and_close() {
        let owner = Owner::new();
        owner.with(|| {
            let panel = PanelControl::new();
            let classes = panel.classes();
            assert!(classes.get_untracked().ends_with("translate-x-full"));

            panel.toggle();
            assert_eq!(panel.state(), PanelState::Open);
            assert!(classes.get_untracked().ends_with("translate-x-0"));

            panel.toggle();
            assert!(classes.get_untracked().ends_with("translate-x-full"));

            panel.toggle();
            panel.close();
            assert_eq!(panel.state(), PanelState::Closed);
            assert!(classes.get_untracked().ends_with("translate-x-full"));

            panel.close();
            assert_eq!(panel.state(), PanelState::Closed);
        });
    }

    #[test]
    fn transform_classes_are_exclusive() {
        let closed = panel_classes(PanelState::Closed);
        let open = panel_classes(PanelState::Open);
        assert!(closed.ends_with("translate-x-full"));
        assert!(!closed.contains("translate-x-0"));
        assert!(open.ends_with("translate-x-0"));
        assert!(!open.contains("translate-x-full"));
    }
}
