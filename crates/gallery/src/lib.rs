//! Demo gallery for slider-web
//!
//! Mounts one slider and binds a control panel covering the whole
//! constructor surface (mode, arity, steps, handle size). Every accepted
//! change emission and every reconfiguration lands in the on-page action
//! log and the browser console.

use std::rc::Rc;

use slider_web_core::{Arity, HandleSize, Mode, OptionsError, SliderOptions, Value};
use slider_web_widget::{ChangeCallback, Slider};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document};

const CONTROL_IDS: [&str; 4] = ["ctl-mode", "ctl-arity", "ctl-steps", "ctl-size"];

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = window()
        .ok_or("No window found")?
        .document()
        .ok_or("No document found")?;
    let stage = document
        .get_element_by_id("slider-stage")
        .ok_or("slider-stage not found")?;

    let options = match read_options(&document) {
        Ok(options) => options,
        Err(err) => {
            log_action(&document, &format!("rejected: {err}; using defaults"));
            SliderOptions::default()
        }
    };

    let doc_for_changes = document.clone();
    let on_change: ChangeCallback = Rc::new(move |value: &Value| {
        log_action(&doc_for_changes, &format!("changed: {}", payload(value)));
    });

    let slider = Slider::mount(&stage, options, Some(on_change))?;
    log_action(&document, &format!("mounted: {}", options_json(&options)));

    for id in CONTROL_IDS {
        bind_control(&document, id, &slider)?;
    }
    Ok(())
}

/// Wire a control so any change re-reads the whole panel and reconfigures
/// the slider. Controls live for the page lifetime; their closures are
/// forgotten rather than tracked.
fn bind_control(document: &Document, id: &str, slider: &Slider) -> Result<(), JsValue> {
    let Some(el) = document.get_element_by_id(id) else {
        web_sys::console::warn_1(&format!("[Gallery] control #{id} missing").into());
        return Ok(());
    };
    let slider = slider.clone();
    let document = document.clone();
    let on_change = Closure::wrap(Box::new(move || {
        apply_controls(&document, &slider);
    }) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

fn apply_controls(document: &Document, slider: &Slider) {
    let options = match read_options(document) {
        Ok(options) => options,
        Err(err) => {
            log_action(document, &format!("rejected: {err}"));
            return;
        }
    };
    match slider.set_options(options) {
        Ok(()) => log_action(document, &format!("configured: {}", options_json(&options))),
        Err(err) => log_action(document, &format!("rejected: {}", js_err_text(&err))),
    }
}

/// Read the full options panel. Missing controls fall back to defaults so
/// a stripped-down host page still works.
fn read_options(document: &Document) -> Result<SliderOptions, OptionsError> {
    let defaults = SliderOptions::default();

    let mode = control_value(document, "ctl-mode")
        .map_or(Ok(defaults.mode), |v| v.parse::<Mode>())?;
    let arity = control_value(document, "ctl-arity")
        .map_or(Ok(defaults.arity), |v| v.parse::<Arity>())?;
    let handle_size = control_value(document, "ctl-size")
        .map_or(Ok(defaults.handle_size), |v| v.parse::<HandleSize>())?;
    let steps = control_value(document, "ctl-steps").map_or(Ok(defaults.steps), |v| {
        v.parse::<u32>().map_err(|_| OptionsError::Unrecognized(v))
    })?;

    let options = SliderOptions {
        mode,
        arity,
        steps,
        handle_size,
    };
    options.validate()?;
    Ok(options)
}

/// Current value of a `<select>` or `<input>` control, if present
fn control_value(document: &Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    el.dyn_ref::<web_sys::HtmlInputElement>()
        .map(web_sys::HtmlInputElement::value)
}

/// Append a timestamped entry to the action log (newest first) and echo
/// it to the console
fn log_action(document: &Document, message: &str) {
    web_sys::console::log_1(&format!("[Gallery] {message}").into());

    let Some(log) = document.get_element_by_id("action-log") else {
        return;
    };
    let Ok(entry) = document.create_element("div") else {
        return;
    };
    entry.set_class_name("log-entry");
    let time = js_sys::Date::new_0().to_locale_time_string("en-US");
    entry.set_text_content(Some(&format!("[{time}] {message}")));
    let first = log.first_child();
    let _ = log.insert_before(&entry, first.as_ref());
}

/// Change payload as the caller sees it: a bare number or a pair
fn payload(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}

fn options_json(options: &SliderOptions) -> String {
    serde_json::to_string(options).unwrap_or_else(|_| format!("{options:?}"))
}

fn js_err_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
