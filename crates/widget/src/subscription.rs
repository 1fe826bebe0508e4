//! Scoped DOM event subscriptions
//!
//! A subscription owns its closure and removes the listener when dropped,
//! so attach/detach stay balanced on every exit path. Drag sessions hold
//! one move and one up subscription; the widget holds one mousedown
//! subscription per handle. Nothing here calls `Closure::forget`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, MouseEvent};

/// A live event listener, removed on drop
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(MouseEvent)>,
}

impl EventSubscription {
    /// Attach `closure` to `target` for `event`
    pub fn subscribe(
        target: &EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(MouseEvent)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
