//! Text surface abstraction for the editing helpers.
//!
//! Hosts implement [`TextSurface`] over their text input; [`TextArea`] is a
//! rope-backed implementation for tests and command-line use.

mod buffer;
mod surface;

pub use buffer::TextArea;
pub use surface::{HighlightOverlay, NoOverlay, Selection, TextSurface, byte_offset};
