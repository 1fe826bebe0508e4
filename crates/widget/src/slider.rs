//! Drag controller and widget lifecycle
//!
//! Pointer-down on a handle opens a drag session holding one document-level
//! mousemove and one mouseup subscription; pointer-up anywhere, a
//! reconfiguration, or teardown closes it and both listeners go with it.
//! Value math lives in the core crate; this module only resolves track
//! geometry and applies the results back to the surface.

use std::cell::RefCell;
use std::rc::Rc;

use slider_web_core::{DragTarget, OptionsError, SliderOptions, SliderState, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element, MouseEvent};

use crate::subscription::EventSubscription;
use crate::surface::{Surface, CLASS_TRACK};

/// Invoked synchronously on every accepted drag update
pub type ChangeCallback = Rc<dyn Fn(&Value)>;

/// One active drag: exactly one move and one up listener, both released
/// when the session drops
struct DragSession {
    _move_sub: EventSubscription,
    _up_sub: EventSubscription,
}

struct Inner {
    state: SliderState,
    surface: Surface,
    on_change: Option<ChangeCallback>,
    session: Option<DragSession>,
    handle_subs: Vec<EventSubscription>,
}

/// The slider widget. Cheap to clone; clones share one instance.
#[derive(Clone)]
pub struct Slider {
    inner: Rc<RefCell<Inner>>,
}

impl Slider {
    /// Build the surface under `parent` and wire the handles.
    pub fn mount(
        parent: &Element,
        options: SliderOptions,
        on_change: Option<ChangeCallback>,
    ) -> Result<Self, JsValue> {
        let document = get_document()?;
        let state = SliderState::new(options).map_err(options_err)?;
        let surface = Surface::build(&document, &options)?;
        surface.apply_value(state.value())?;
        parent.append_child(&surface.root)?;

        let slider = Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                surface,
                on_change,
                session: None,
                handle_subs: Vec::new(),
            })),
        };
        slider.wire_handles()?;
        Ok(slider)
    }

    pub fn value(&self) -> Value {
        self.inner.borrow().state.value()
    }

    pub fn options(&self) -> SliderOptions {
        self.inner.borrow().state.options()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().state.is_dragging()
    }

    /// Reconfigure and rebuild the surface in place. Resets the value when
    /// mode or arity changed and releases any drag in progress.
    pub fn set_options(&self, options: SliderOptions) -> Result<(), JsValue> {
        let document = get_document()?;
        {
            let mut inner = self.inner.borrow_mut();
            inner.state.set_options(options).map_err(options_err)?;
            inner.session = None;
            inner.handle_subs.clear();

            let new_surface = Surface::build(&document, &options)?;
            new_surface.apply_value(inner.state.value())?;
            if let Some(parent) = inner.surface.root.parent_element() {
                parent.append_child(&new_surface.root)?;
            }
            inner.surface.remove();
            inner.surface = new_surface;
        }
        self.wire_handles()
    }

    /// Remove the surface from the document and release every listener.
    pub fn detach(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.session = None;
        inner.handle_subs.clear();
        inner.state.pointer_up();
        inner.surface.remove();
    }

    /// Attach a mousedown subscription to each handle.
    fn wire_handles(&self) -> Result<(), JsValue> {
        let handles = {
            let inner = self.inner.borrow();
            let mut v = vec![(inner.surface.start_handle.clone(), DragTarget::Start)];
            if let Some(end) = inner.surface.end_handle.clone() {
                v.push((end, DragTarget::End));
            }
            v
        };

        let mut subs = Vec::with_capacity(handles.len());
        for (handle, target) in handles {
            let weak = Rc::downgrade(&self.inner);
            let on_down = Closure::wrap(Box::new(move |e: MouseEvent| {
                e.prevent_default();
                if let Some(inner) = weak.upgrade() {
                    begin_drag(&inner, target);
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            subs.push(EventSubscription::subscribe(
                handle.as_ref(),
                "mousedown",
                on_down,
            )?);
        }
        self.inner.borrow_mut().handle_subs = subs;
        Ok(())
    }
}

fn get_document() -> Result<Document, JsValue> {
    window()
        .ok_or("No window found")?
        .document()
        .ok_or_else(|| "No document found".into())
}

fn options_err(err: OptionsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn begin_drag(inner: &Rc<RefCell<Inner>>, target: DragTarget) {
    if !inner.borrow_mut().state.pointer_down(target) {
        return;
    }
    match open_session(inner) {
        Ok(session) => inner.borrow_mut().session = Some(session),
        Err(err) => {
            // Roll the state machine back so the next pointer-down works
            inner.borrow_mut().state.pointer_up();
            web_sys::console::warn_1(
                &format!("Slider: failed to attach drag listeners: {err:?}").into(),
            );
        }
    }
}

fn open_session(inner: &Rc<RefCell<Inner>>) -> Result<DragSession, JsValue> {
    let document = get_document()?;

    let move_weak = Rc::downgrade(inner);
    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
        if let Some(inner) = move_weak.upgrade() {
            handle_move(&inner, &e);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    let move_sub = EventSubscription::subscribe(document.as_ref(), "mousemove", on_move)?;

    let up_weak = Rc::downgrade(inner);
    let on_up = Closure::wrap(Box::new(move |_: MouseEvent| {
        if let Some(inner) = up_weak.upgrade() {
            end_drag(&inner);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    let up_sub = EventSubscription::subscribe(document.as_ref(), "mouseup", on_up)?;

    Ok(DragSession {
        _move_sub: move_sub,
        _up_sub: up_sub,
    })
}

fn handle_move(inner: &Rc<RefCell<Inner>>, event: &MouseEvent) {
    let emitted = {
        let mut guard = inner.borrow_mut();
        if !guard.state.is_dragging() {
            return;
        }

        // The track must exist in the live surface at move time; a missing
        // element or collapsed rect means geometry is unresolvable and the
        // move is ignored.
        let selector = format!(".{CLASS_TRACK}");
        let Ok(Some(track)) = guard.surface.root.query_selector(&selector) else {
            return;
        };
        let rect = track.get_bounding_client_rect();
        let width = rect.width();
        if width <= 0.0 {
            return;
        }

        let raw = (f64::from(event.client_x()) - rect.left()) / width * 100.0;
        let Some(value) = guard.state.pointer_move(raw) else {
            return;
        };
        if let Err(err) = guard.surface.apply_value(value) {
            web_sys::console::warn_1(&format!("Slider: restyle failed: {err:?}").into());
        }
        guard.on_change.clone().map(|cb| (cb, value))
    };

    // Invoke outside the borrow so a callback may call back into the widget
    if let Some((cb, value)) = emitted {
        cb(&value);
    }
}

fn end_drag(inner: &Rc<RefCell<Inner>>) {
    let session = {
        let mut guard = inner.borrow_mut();
        if !guard.state.pointer_up() {
            return;
        }
        guard.session.take()
    };
    drop(session);
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.surface.remove();
    }
}
