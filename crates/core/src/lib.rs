//! Shared interaction core for slider-web
//!
//! Everything here is pure: no DOM types, no event loop. The widget crate
//! feeds normalized pointer positions in and applies the resulting
//! geometry back to the document.

pub mod geometry;
pub mod options;
pub mod quantize;
pub mod state;
pub mod value;

pub use geometry::*;
pub use options::*;
pub use state::*;
pub use value::*;
