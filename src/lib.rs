#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. suggest::SuggestionList)
    clippy::module_name_repetitions
)]

//! # docquill
//!
//! Editing conveniences for text-area based document editors.
//!
//! docquill provides:
//! - Wrapping the selection in `**bold**` or `_italic_` markers
//! - A floating formatting toolbar that follows the pointer
//! - Word completion from a dictionary, gated on `{{ }}` / `{% %}` tags
//! - A formatting help modal
//!
//! ## Architecture
//!
//! Every operation is a single synchronous call over small host-supplied
//! collaborators:
//! - **Surface**: the text input's value and selection ([`editor::TextSurface`])
//! - **Overlay**: live highlighting refreshed after edits
//! - **Panel / list / modal**: toolbar, suggestion list and help dialog
//!
//! [`session::EditorSession`] bundles them for hosts that want one object to
//! wire their buttons and keystrokes to.
//!
//! ## Modules
//!
//! - [`editor`]: Text surface abstraction and rope-backed text area
//! - [`format`]: Bold/italic selection wrapping
//! - [`toolbar`]: Floating formatting toolbar
//! - [`suggest`]: Dictionary and current-word completion
//! - [`template`]: Template tag detection
//! - [`help`]: Formatting help modal
//! - [`session`]: Entry-point facade
//! - [`config`]: Saved command-line defaults

pub mod config;
pub mod editor;
pub mod format;
pub mod help;
pub mod session;
pub mod suggest;
pub mod template;
pub mod toolbar;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::{HighlightOverlay, Selection, TextArea, TextSurface};
    pub use crate::format::Marker;
    pub use crate::session::EditorSession;
    pub use crate::suggest::{Dictionary, SuggestionList};
    pub use crate::template::{TagDetection, TemplateGuard, TemplateScope};
    pub use crate::toolbar::{FloatingPanel, PointerPosition};
}
