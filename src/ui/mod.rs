//! ui
//!
//! Output rendering and diagnostics.
//!
//! - [`render`] - sticky-marker rendering of the commit ordering
//! - [`output`] - stderr diagnostics and verbosity control

pub mod output;
pub mod render;
