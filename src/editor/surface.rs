use serde::Serialize;

/// Active selection in a text surface, in char offsets.
///
/// `start == end` is a plain caret. Constructors normalize reversed pairs so
/// `start <= end` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, swapping the bounds if they are reversed.
    pub const fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A collapsed selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether nothing is selected.
    pub const fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected chars.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamp both bounds to a value of `len_chars` chars.
    pub fn clamp(self, len_chars: usize) -> Self {
        Self::new(self.start.min(len_chars), self.end.min(len_chars))
    }
}

/// The editable text input the user interacts with.
///
/// This is the whole contract between the editing helpers and the host:
/// browser glue implements it over a `<textarea>`, tests and the CLI use
/// [`TextArea`](super::TextArea).
pub trait TextSurface {
    /// Full current value.
    fn value(&self) -> String;

    /// Current selection. Implementations may return offsets past the end;
    /// callers clamp.
    fn selection(&self) -> Selection;

    /// Replace the full value.
    fn set_value(&mut self, value: &str);

    /// Set the visible selection.
    fn set_selection(&mut self, selection: Selection);

    /// Text covered by the current selection.
    fn selected_text(&self) -> String {
        let value = self.value();
        let sel = self.selection().clamp(value.chars().count());
        value.chars().skip(sel.start).take(sel.len()).collect()
    }
}

/// Live highlighting layer drawn over the text surface.
pub trait HighlightOverlay {
    /// Re-read the surface and repaint.
    fn update(&mut self);
}

/// Overlay for hosts without live highlighting.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlay;

impl HighlightOverlay for NoOverlay {
    fn update(&mut self) {}
}

/// Convert a char offset into a byte offset, clamping to the end of `text`.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}
