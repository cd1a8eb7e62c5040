//! Breakpoint matching against the viewport width.
//!
//! [`ViewportMatcher`] owns at most one change subscription on a
//! [`MediaSource`] and keeps a boolean "width <= threshold" in sync with it.
//! [`use_media_query`] wraps it for components.
//!
//! Until the environment answers, and wherever it can't (server rendering,
//! no `matchMedia`), the match value is [`DEFAULT_MATCH`], i.e. `false`.
//! First-render output is therefore always the wide layout.

use std::cell::Cell;
use std::rc::Rc;

use leptos::leptos_dom::logging::console_warn;
use leptos::prelude::*;

/// Match value before the environment responds, and when it never will.
pub const DEFAULT_MATCH: bool = false;

pub type Listener = Rc<dyn Fn()>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u32);

/// A live media query, in the shape of the browser's `MediaQueryList`.
pub trait MediaQuery {
    fn matches(&self) -> bool;
    fn add_change_listener(&self, listener: Listener) -> ListenerId;
    fn remove_change_listener(&self, id: ListenerId);
}

/// Something that can evaluate media queries. `None` means the
/// capability is missing, which is not an error.
pub trait MediaSource {
    type Query: MediaQuery + 'static;

    fn match_media(&self, query: &str) -> Option<Self::Query>;
}

pub fn max_width_query(max_width: u32) -> String {
    format!("(max-width: {max_width}px)")
}

/// Registered listener; removed from its query on drop.
struct Subscription<Q: MediaQuery> {
    query: Rc<Q>,
    id: ListenerId,
}

impl<Q: MediaQuery> Drop for Subscription<Q> {
    fn drop(&mut self) {
        self.query.remove_change_listener(self.id);
    }
}

pub struct ViewportMatcher<S: MediaSource> {
    source: S,
    max_width: u32,
    state: Rc<Cell<bool>>,
    on_change: Rc<dyn Fn(bool)>,
    subscription: Option<Subscription<S::Query>>,
}

impl<S: MediaSource> ViewportMatcher<S> {
    /// Binds to `max_width` right away and reads the current match value
    /// synchronously, reporting it through `on_change`.
    pub fn new(source: S, max_width: u32, on_change: impl Fn(bool) + 'static) -> Self {
        let mut matcher = Self {
            source,
            max_width,
            state: Rc::new(Cell::new(DEFAULT_MATCH)),
            on_change: Rc::new(on_change),
            subscription: None,
        };
        matcher.bind();
        matcher
    }

    pub fn matches(&self) -> bool {
        self.state.get()
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Moves the matcher to a new threshold. The old subscription is gone
    /// before the new one is registered.
    pub fn rebind(&mut self, max_width: u32) {
        if max_width == self.max_width && self.is_subscribed() {
            return;
        }
        self.max_width = max_width;
        self.bind();
    }

    pub fn release(&mut self) {
        self.subscription = None;
    }

    fn bind(&mut self) {
        self.release();

        let query_str = max_width_query(self.max_width);
        let Some(query) = self.source.match_media(&query_str) else {
            console_warn(&format!("media queries unavailable, `{query_str}` stays {DEFAULT_MATCH}"));
            return;
        };
        let query = Rc::new(query);

        // weak, so a listener that outlives its subscription is inert
        let listener: Listener = {
            let query = Rc::downgrade(&query);
            let state = self.state.clone();
            let on_change = self.on_change.clone();
            Rc::new(move || {
                let Some(query) = query.upgrade() else { return };
                let matches = query.matches();
                state.set(matches);
                on_change(matches);
            })
        };

        let id = query.add_change_listener(listener.clone());
        self.subscription = Some(Subscription { query, id });

        listener();
    }
}

/// Reactive "viewport width <= `max_width`" for the current component.
///
/// In the browser the subscription follows the `max_width` signal and is
/// released when the owning component is cleaned up. Elsewhere this is a
/// constant [`DEFAULT_MATCH`].
pub fn use_media_query(max_width: impl Into<Signal<u32>>) -> Signal<bool> {
    let max_width: Signal<u32> = max_width.into();
    let matches = RwSignal::new(DEFAULT_MATCH);

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    {
        use crate::hooks::window_media::WindowMedia;

        let matcher = StoredValue::new_local(None::<ViewportMatcher<WindowMedia>>);

        Effect::new(move |_| {
            let width = max_width.get();
            matcher.update_value(|slot| {
                if let Some(m) = slot.as_mut() {
                    m.rebind(width);
                    return;
                }
                *slot = WindowMedia::new().map(|source| {
                    ViewportMatcher::new(source, width, move |m| {
                        let _ = matches.try_set(m);
                    })
                });
            });
        });

        on_cleanup(move || {
            let _ = matcher.try_update_value(|slot| slot.take());
        });
    }

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    let _ = max_width;

    matches.into()
}
