//! Floating formatting toolbar shown next to the pointer while text is selected.

use tracing::trace;

use crate::editor::TextSurface;

/// Pointer coordinates in the host's page space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A floating panel the host can show at a position or hide.
pub trait FloatingPanel {
    fn show_at(&mut self, position: PointerPosition);
    fn hide(&mut self);
}

/// In-memory toolbar state for hosts that draw the panel themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatingToolbar {
    visible: bool,
    position: Option<PointerPosition>,
}

impl FloatingToolbar {
    pub const fn new() -> Self {
        Self {
            visible: false,
            position: None,
        }
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last position the toolbar was shown at. Kept while hidden.
    pub const fn position(&self) -> Option<PointerPosition> {
        self.position
    }
}

impl FloatingPanel for FloatingToolbar {
    fn show_at(&mut self, position: PointerPosition) {
        self.visible = true;
        self.position = Some(position);
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// React to a selection change (mouse-up on the text surface).
///
/// Shows `panel` at `pointer` when text is selected and hides it otherwise.
/// Returns whether the panel is now visible.
pub fn on_selection_change<S, P>(surface: &S, panel: &mut P, pointer: PointerPosition) -> bool
where
    S: TextSurface + ?Sized,
    P: FloatingPanel + ?Sized,
{
    if surface.selected_text().is_empty() {
        panel.hide();
        false
    } else {
        trace!(x = pointer.x, y = pointer.y, "showing formatter");
        panel.show_at(pointer);
        true
    }
}
