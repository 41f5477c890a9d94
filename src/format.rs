//! Wrapping the selection with markdown emphasis markers.

use tracing::debug;

use crate::editor::{HighlightOverlay, Selection, TextSurface, byte_offset};

/// Emphasis marker inserted around a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bold,
    Italic,
}

impl Marker {
    /// The literal marker text.
    pub const fn text(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "_",
        }
    }

    /// Marker length in chars.
    pub fn char_len(self) -> usize {
        self.text().chars().count()
    }
}

/// Insert `marker` on both sides of `selection` in `text`.
///
/// Returns the new text and the selection covering the wrapped span,
/// markers included. `None` when the selection is empty.
pub fn wrap_range(text: &str, selection: Selection, marker: Marker) -> Option<(String, Selection)> {
    let sel = selection.clamp(text.chars().count());
    if sel.is_caret() {
        return None;
    }

    let start = byte_offset(text, sel.start);
    let end = byte_offset(text, sel.end);
    let mut wrapped = String::with_capacity(text.len() + 2 * marker.text().len());
    wrapped.push_str(text);
    // End first so `start` still points at the same char.
    wrapped.insert_str(end, marker.text());
    wrapped.insert_str(start, marker.text());

    Some((wrapped, Selection::new(sel.start, sel.end + 2 * marker.char_len())))
}

/// Wrap the surface's selection with `marker` and reselect the wrapped span.
///
/// Returns `false` and leaves everything untouched when nothing is selected.
pub fn apply_marker<S, O>(surface: &mut S, overlay: &mut O, marker: Marker) -> bool
where
    S: TextSurface + ?Sized,
    O: HighlightOverlay + ?Sized,
{
    let value = surface.value();
    let Some((wrapped, selection)) = wrap_range(&value, surface.selection(), marker) else {
        return false;
    };

    debug!(?marker, start = selection.start, end = selection.end, "wrapped selection");
    surface.set_value(&wrapped);
    surface.set_selection(selection);
    overlay.update();
    true
}

/// Bold the current selection.
pub fn bold_text<S, O>(surface: &mut S, overlay: &mut O) -> bool
where
    S: TextSurface + ?Sized,
    O: HighlightOverlay + ?Sized,
{
    apply_marker(surface, overlay, Marker::Bold)
}

/// Italicize the current selection.
pub fn italic_text<S, O>(surface: &mut S, overlay: &mut O) -> bool
where
    S: TextSurface + ?Sized,
    O: HighlightOverlay + ?Sized,
{
    apply_marker(surface, overlay, Marker::Italic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{NoOverlay, TextArea};

    #[derive(Default)]
    struct CountingOverlay {
        updates: usize,
    }

    impl HighlightOverlay for CountingOverlay {
        fn update(&mut self) {
            self.updates += 1;
        }
    }

    #[test]
    fn test_bold_wraps_selection() {
        let mut area = TextArea::with_selection("make this loud", 5, 9);
        let mut overlay = CountingOverlay::default();
        assert!(bold_text(&mut area, &mut overlay));
        assert_eq!(area.value(), "make **this** loud");
        assert_eq!(area.selection(), Selection::new(5, 13));
        assert_eq!(area.selected_text(), "**this**");
        assert_eq!(overlay.updates, 1);
    }

    #[test]
    fn test_italic_wraps_selection() {
        let mut area = TextArea::with_selection("make this soft", 5, 9);
        assert!(italic_text(&mut area, &mut NoOverlay));
        assert_eq!(area.value(), "make _this_ soft");
        assert_eq!(area.selection(), Selection::new(5, 11));
        assert_eq!(area.selected_text(), "_this_");
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let mut area = TextArea::with_caret("nothing here", 4);
        let mut overlay = CountingOverlay::default();
        assert!(!bold_text(&mut area, &mut overlay));
        assert_eq!(area.value(), "nothing here");
        assert_eq!(area.selection(), Selection::caret(4));
        assert!(!area.is_dirty());
        assert_eq!(overlay.updates, 0);
    }

    #[test]
    fn test_marker_lengths_count_chars() {
        assert_eq!(Marker::Bold.char_len(), 2);
        assert_eq!(Marker::Italic.char_len(), 1);
    }

    #[test]
    fn test_wrap_whole_text() {
        let (text, sel) = wrap_range("abc", Selection::new(0, 3), Marker::Bold).unwrap();
        assert_eq!(text, "**abc**");
        assert_eq!(sel, Selection::new(0, 7));
    }

    #[test]
    fn test_wrap_multibyte_selection() {
        let (text, sel) = wrap_range("un café noir", Selection::new(3, 7), Marker::Italic).unwrap();
        assert_eq!(text, "un _café_ noir");
        assert_eq!(sel, Selection::new(3, 9));
    }

    #[test]
    fn test_wrap_clamps_selection_past_end() {
        let (text, sel) = wrap_range("abc", Selection::new(1, 50), Marker::Bold).unwrap();
        assert_eq!(text, "a**bc**");
        assert_eq!(sel, Selection::new(1, 7));
    }

    #[test]
    fn test_wrap_selection_fully_past_end_is_none() {
        assert!(wrap_range("abc", Selection::new(10, 20), Marker::Bold).is_none());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn marker() -> impl Strategy<Value = Marker> {
            prop_oneof![Just(Marker::Bold), Just(Marker::Italic)]
        }

        proptest! {
            #[test]
            fn wrap_matches_concatenation(
                text in "[a-zé {}%\n]{1,40}",
                a in 0..40usize,
                b in 0..40usize,
                marker in marker(),
            ) {
                let chars: Vec<char> = text.chars().collect();
                let sel = Selection::new(a, b).clamp(chars.len());
                prop_assume!(!sel.is_caret());

                let (wrapped, new_sel) = wrap_range(&text, sel, marker).unwrap();
                let before: String = chars[..sel.start].iter().collect();
                let inner: String = chars[sel.start..sel.end].iter().collect();
                let after: String = chars[sel.end..].iter().collect();
                let m = marker.text();
                prop_assert_eq!(wrapped, format!("{before}{m}{inner}{m}{after}"));
                prop_assert_eq!(new_sel, Selection::new(sel.start, sel.end + 2 * marker.char_len()));
            }

            #[test]
            fn reselection_covers_markers(
                text in "[a-z ]{1,30}",
                a in 0..30usize,
                b in 0..30usize,
                marker in marker(),
            ) {
                let mut area = TextArea::with_selection(&text, a, b);
                prop_assume!(!area.selection().is_caret());
                let inner = area.selected_text();

                prop_assert!(apply_marker(&mut area, &mut NoOverlay, marker));
                let m = marker.text();
                prop_assert_eq!(area.selected_text(), format!("{m}{inner}{m}"));
            }
        }
    }
}
