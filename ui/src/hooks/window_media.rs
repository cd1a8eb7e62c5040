use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use leptos::leptos_dom::logging::console_warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{MediaQueryList, Window};

use super::media_query::{Listener, ListenerId, MediaQuery, MediaSource};

/// `window.matchMedia`, when there is a window.
pub struct WindowMedia {
    window: Window,
}

impl WindowMedia {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl MediaSource for WindowMedia {
    type Query = WindowQuery;

    fn match_media(&self, query: &str) -> Option<WindowQuery> {
        let list = self.window.match_media(query).ok().flatten()?;
        Some(WindowQuery {
            list,
            closures: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        })
    }
}

/// A `MediaQueryList` plus the JS closures registered on it. Every closure
/// is detached and freed on removal or drop.
pub struct WindowQuery {
    list: MediaQueryList,
    closures: RefCell<HashMap<u32, Closure<dyn Fn()>>>,
    next_id: Cell<u32>,
}

impl MediaQuery for WindowQuery {
    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn add_change_listener(&self, listener: Listener) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let cb = Closure::<dyn Fn()>::new(move || listener());
        if let Err(err) = self
            .list
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        {
            console_warn(&format!("matchMedia change listener not attached: {err:?}"));
        }

        self.closures.borrow_mut().insert(id, cb);
        ListenerId(id)
    }

    fn remove_change_listener(&self, id: ListenerId) {
        let Some(cb) = self.closures.borrow_mut().remove(&id.0) else {
            return;
        };
        let _ = self
            .list
            .remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
    }
}

impl Drop for WindowQuery {
    fn drop(&mut self) {
        for (_, cb) in self.closures.borrow_mut().drain() {
            let _ = self
                .list
                .remove_event_listener_with_callback("change", cb.as_ref().unchecked_ref());
        }
    }
}
