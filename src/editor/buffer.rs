use ropey::Rope;

use super::surface::{Selection, TextSurface};

/// An in-memory text area backed by a rope.
///
/// Behaves like a browser `<textarea>`: the selection is a pair of char
/// offsets, and writing the value moves the caret to the end of the new
/// content.
pub struct TextArea {
    rope: Rope,
    selection: Selection,
    dirty: bool,
}

impl TextArea {
    /// Create a text area from a string with the caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::caret(0),
            dirty: false,
        }
    }

    /// Create an empty text area.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Create a text area with an initial selection (clamped to the content).
    pub fn with_selection(text: &str, start: usize, end: usize) -> Self {
        let mut area = Self::from_text(text);
        area.select(start, end);
        area
    }

    /// Create a text area with the caret at `offset`.
    pub fn with_caret(text: &str, offset: usize) -> Self {
        Self::with_selection(text, offset, offset)
    }

    /// Create a text area with the caret after the last char.
    pub fn with_caret_at_end(text: &str) -> Self {
        let mut area = Self::from_text(text);
        area.select(usize::MAX, usize::MAX);
        area
    }

    /// Set the selection, clamping to the content.
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end).clamp(self.len_chars());
    }

    /// Length of the content in chars.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The full text content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Whether the value has been written since creation or last
    /// [`mark_clean`](Self::mark_clean).
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::empty()
    }
}

impl TextSurface for TextArea {
    fn value(&self) -> String {
        self.text()
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_value(&mut self, value: &str) {
        if self.rope != value {
            self.dirty = true;
        }
        self.rope = Rope::from_str(value);
        self.selection = Selection::caret(self.rope.len_chars());
    }

    fn set_selection(&mut self, selection: Selection) {
        self.select(selection.start, selection.end);
    }

    fn selected_text(&self) -> String {
        self.rope
            .slice(self.selection.start..self.selection.end)
            .to_string()
    }
}

impl std::fmt::Debug for TextArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextArea")
            .field(
                "rope",
                &format_args!("Rope({} chars)", self.rope.len_chars()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .finish()
    }
}
