//! Surface construction and style application
//!
//! Builds the widget DOM (slider > track > steps / fill / handles) and
//! maps values onto inline styles via the core geometry. Class names are
//! the styling hooks the host page targets.

use slider_web_core::{geometry, Arity, Mode, SliderOptions, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

pub const CLASS_SLIDER: &str = "slider";
pub const CLASS_TRACK: &str = "slider-track";
pub const CLASS_STEPS: &str = "slider-steps";
pub const CLASS_STEP: &str = "slider-step";
pub const CLASS_FILL: &str = "slider-fill";
pub const CLASS_HANDLE: &str = "slider-handle";

/// The widget's DOM, one value-bearing element per role
pub struct Surface {
    pub root: HtmlElement,
    pub fill: HtmlElement,
    pub start_handle: HtmlElement,
    pub end_handle: Option<HtmlElement>,
}

impl Surface {
    /// Build the surface for `options`. Handles carry their size metrics
    /// as inline styles; positions are applied separately so value updates
    /// touch styles only.
    pub fn build(document: &Document, options: &SliderOptions) -> Result<Self, JsValue> {
        let root = create_div(document, CLASS_SLIDER)?;
        let track = create_div(document, CLASS_TRACK)?;

        if options.mode == Mode::Discrete {
            let steps = create_div(document, CLASS_STEPS)?;
            for offset in geometry::step_marks(options.steps) {
                let mark = create_div(document, CLASS_STEP)?;
                mark.style().set_property("left", &percent(offset))?;
                steps.append_child(&mark)?;
            }
            track.append_child(&steps)?;
        }

        let fill = create_div(document, CLASS_FILL)?;
        track.append_child(&fill)?;

        let start_handle = create_handle(document, options)?;
        track.append_child(&start_handle)?;

        let end_handle = if options.arity == Arity::Range {
            let handle = create_handle(document, options)?;
            track.append_child(&handle)?;
            Some(handle)
        } else {
            None
        };

        root.append_child(&track)?;
        Ok(Self {
            root,
            fill,
            start_handle,
            end_handle,
        })
    }

    /// Restyle fill and handles for `value`
    pub fn apply_value(&self, value: Value) -> Result<(), JsValue> {
        let span = geometry::fill_span(value);
        let fill_style = self.fill.style();
        fill_style.set_property("left", &percent(span.left))?;
        fill_style.set_property("width", &percent(span.width))?;

        let (start, end) = geometry::handle_offsets(value);
        self.start_handle
            .style()
            .set_property("left", &percent(start))?;
        if let (Some(handle), Some(offset)) = (self.end_handle.as_ref(), end) {
            handle.style().set_property("left", &percent(offset))?;
        }
        Ok(())
    }

    /// Remove the surface from the document
    pub fn remove(&self) {
        self.root.remove();
    }
}

fn percent(v: f64) -> String {
    format!("{v}%")
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(class);
    Ok(el.dyn_into::<HtmlElement>()?)
}

fn create_handle(document: &Document, options: &SliderOptions) -> Result<HtmlElement, JsValue> {
    let handle = create_div(document, CLASS_HANDLE)?;
    let metrics = geometry::handle_metrics(options.handle_size);
    let style = handle.style();
    style.set_property("width", &format!("{}px", metrics.size_px))?;
    style.set_property("height", &format!("{}px", metrics.size_px))?;
    style.set_property("top", &format!("{}px", metrics.top_px))?;
    style.set_property("transform", "translateX(-50%)")?;
    Ok(handle)
}
