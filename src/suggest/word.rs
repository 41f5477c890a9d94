use tracing::debug;

use crate::editor::{HighlightOverlay, Selection, TextSurface, byte_offset};
use crate::template::TemplateGuard;

use super::list::SuggestionList;

/// Caret position and word boundary derived from a surface value.
struct WordSpan {
    /// Byte offset of the first char of the word.
    start_byte: usize,
    /// Byte offset of the caret.
    caret_byte: usize,
}

impl WordSpan {
    /// The word runs from just after the last space before the caret up to
    /// the caret. Only `' '` separates words; newlines do not.
    fn at_caret(value: &str, caret: usize) -> Self {
        let caret_byte = byte_offset(value, caret);
        let start_byte = value[..caret_byte].rfind(' ').map_or(0, |idx| idx + 1);
        Self {
            start_byte,
            caret_byte,
        }
    }
}

/// The partial word ending at the caret, or an empty string when the
/// template guard suppresses suggestions at this position.
pub fn current_word<S>(surface: &S, guard: TemplateGuard) -> String
where
    S: TextSurface + ?Sized,
{
    let value = surface.value();
    let span = WordSpan::at_caret(&value, surface.selection().start);
    if !guard.allows(&value[..span.caret_byte]) {
        return String::new();
    }
    value[span.start_byte..span.caret_byte].to_owned()
}

/// Replace the partial word ending at the caret with `new_word` and put the
/// caret right after it. Returns the new caret offset.
///
/// The template guard is not consulted: replacing is always allowed.
pub fn replace_current_word<S, O>(surface: &mut S, overlay: &mut O, new_word: &str) -> usize
where
    S: TextSurface + ?Sized,
    O: HighlightOverlay + ?Sized,
{
    let value = surface.value();
    let span = WordSpan::at_caret(&value, surface.selection().start);

    let mut replaced = String::with_capacity(value.len() + new_word.len());
    replaced.push_str(&value[..span.start_byte]);
    replaced.push_str(new_word);
    replaced.push_str(&value[span.caret_byte..]);

    let caret = value[..span.start_byte].chars().count() + new_word.chars().count();
    debug!(
        old = &value[span.start_byte..span.caret_byte],
        new = new_word,
        caret,
        "replaced current word"
    );
    surface.set_value(&replaced);
    surface.set_selection(Selection::caret(caret));
    overlay.update();
    caret
}

/// Accept a suggestion: replace the current word and clear the list.
pub fn click_suggestion<S, O, L>(surface: &mut S, overlay: &mut O, list: &mut L, word: &str) -> usize
where
    S: TextSurface + ?Sized,
    O: HighlightOverlay + ?Sized,
    L: SuggestionList + ?Sized,
{
    let caret = replace_current_word(surface, overlay, word);
    list.clear();
    caret
}
