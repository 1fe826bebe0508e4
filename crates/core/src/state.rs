//! Drag state machine
//!
//! States are Idle, DraggingStart, DraggingEnd. The only transitions are
//! pointer-down over a handle (Idle -> Dragging*) and pointer-up anywhere
//! (Dragging* -> Idle). Pointer moves mutate the value only while a drag
//! is active; the caller supplies positions already normalized against the
//! track geometry.

use crate::options::{Arity, Mode, OptionsError, SliderOptions};
use crate::quantize;
use crate::value::Value;

/// Which endpoint a drag is manipulating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    Start,
    End,
}

/// Widget interaction state: configuration, current value, active drag
#[derive(Debug, Clone)]
pub struct SliderState {
    options: SliderOptions,
    value: Value,
    drag: Option<DragTarget>,
}

impl SliderState {
    pub fn new(options: SliderOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            value: Value::default_for(options.arity),
            drag: None,
        })
    }

    pub const fn options(&self) -> SliderOptions {
        self.options
    }

    pub const fn value(&self) -> Value {
        self.value
    }

    pub const fn drag_target(&self) -> Option<DragTarget> {
        self.drag
    }

    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Explicit reconfiguration transition. The value resets to the arity
    /// default whenever mode or arity changes; a step-count or handle-size
    /// change keeps the current value. Any active drag ends, since the
    /// surface is rebuilt underneath it.
    pub fn set_options(&mut self, options: SliderOptions) -> Result<(), OptionsError> {
        options.validate()?;
        let reset = options.mode != self.options.mode || options.arity != self.options.arity;
        self.options = options;
        if reset {
            self.value = Value::default_for(options.arity);
        }
        self.drag = None;
        Ok(())
    }

    /// Idle -> Dragging. Returns false (and changes nothing) if a drag is
    /// already active.
    pub fn pointer_down(&mut self, target: DragTarget) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(target);
        true
    }

    /// Recompute the value from a raw normalized position. Returns the
    /// updated value for the caller to emit, or None when no drag is
    /// active. Raw positions clamp to [0,100] first, then quantize, then
    /// the dragged endpoint is held on its side of the other one.
    pub fn pointer_move(&mut self, raw: f64) -> Option<Value> {
        let target = self.drag?;
        let clamped = raw.clamp(0.0, 100.0);
        let position = match self.options.mode {
            Mode::Continuous => clamped,
            Mode::Discrete => quantize::snap(clamped, self.options.steps),
        };
        self.value = match (self.value, target) {
            (Value::Single(_), _) => Value::Single(position),
            (Value::Range(_, high), DragTarget::Start) => Value::Range(position.min(high), high),
            (Value::Range(low, _), DragTarget::End) => Value::Range(low, position.max(low)),
        };
        Some(self.value)
    }

    /// Dragging -> Idle. Returns whether a drag actually ended; a
    /// pointer-up with no active drag is a no-op.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            options: SliderOptions::default(),
            value: Value::default_for(Arity::Single),
            drag: None,
        }
    }
}
