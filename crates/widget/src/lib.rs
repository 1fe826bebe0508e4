//! DOM slider widget for slider-web
//!
//! Wraps the pure interaction core in a browser surface: a track with a
//! fill, step marks and one or two draggable handles. All listener
//! registrations are scoped subscriptions released on drag-end and on
//! teardown.

mod slider;
mod subscription;
mod surface;

pub use slider::{ChangeCallback, Slider};
pub use subscription::EventSubscription;
