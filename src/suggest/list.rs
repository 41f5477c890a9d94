use std::fmt::Display;

use serde::Serialize;
use tracing::trace;

use crate::editor::TextSurface;
use crate::template::TemplateGuard;

use super::dictionary::Dictionary;
use super::word::current_word;

/// One entry in the rendered suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub detail: String,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            detail: detail.into(),
        }
    }
}

/// Where the host shows completions for the current word.
pub trait SuggestionList {
    fn render(&mut self, items: &[Suggestion]);
    fn clear(&mut self);
}

/// Suggestion list kept in memory for hosts that draw it themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSuggestions {
    items: Vec<Suggestion>,
}

impl RenderedSuggestions {
    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SuggestionList for RenderedSuggestions {
    fn render(&mut self, items: &[Suggestion]) {
        self.items = items.to_vec();
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

/// Up to `limit` suggestions for `prefix`, with values rendered for display.
pub fn collect_suggestions<V: Display>(dict: &Dictionary<V>, prefix: &str, limit: usize) -> Vec<Suggestion> {
    dict.suggestions(prefix)
        .into_iter()
        .take(limit)
        .map(|(word, value)| Suggestion::new(word, value.to_string()))
        .collect()
}

/// Recompute suggestions for the word at the caret and push them to `list`.
///
/// Clears the list when the word is empty (including when the template
/// guard suppresses it) or nothing matches. Returns how many were rendered.
pub fn refresh_suggestions<S, V, L>(
    surface: &S,
    dict: &Dictionary<V>,
    list: &mut L,
    guard: TemplateGuard,
    limit: usize,
) -> usize
where
    S: TextSurface + ?Sized,
    V: Display,
    L: SuggestionList + ?Sized,
{
    let word = current_word(surface, guard);
    let items = collect_suggestions(dict, &word, limit);
    trace!(word = %word, count = items.len(), "refreshed suggestions");
    if items.is_empty() {
        list.clear();
    } else {
        list.render(&items);
    }
    items.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextArea;

    fn fields() -> Dictionary<&'static str> {
        [
            ("applicant_name", "Name of the applicant"),
            ("applicant_address", "Registered address"),
            ("application_date", "Date received"),
            ("case_officer", "Assigned officer"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_collect_respects_limit_and_order() {
        let items = collect_suggestions(&fields(), "appl", 2);
        assert_eq!(
            items,
            vec![
                Suggestion::new("applicant_address", "Registered address"),
                Suggestion::new("applicant_name", "Name of the applicant"),
            ]
        );
    }

    #[test]
    fn test_refresh_renders_matches_inside_tag() {
        let area = TextArea::with_caret_at_end("Dear {{ applic");
        let mut list = RenderedSuggestions::default();
        let count = refresh_suggestions(&area, &fields(), &mut list, TemplateGuard::default(), 10);
        assert_eq!(count, 3);
        assert_eq!(list.items()[2].word, "application_date");
    }

    #[test]
    fn test_refresh_clears_when_suppressed() {
        let mut list = RenderedSuggestions::default();
        list.render(&[Suggestion::new("stale", "")]);

        let area = TextArea::with_caret_at_end("Dear applic");
        let count = refresh_suggestions(&area, &fields(), &mut list, TemplateGuard::default(), 10);
        assert_eq!(count, 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_refresh_clears_when_nothing_matches() {
        let mut list = RenderedSuggestions::default();
        list.render(&[Suggestion::new("stale", "")]);

        let area = TextArea::with_caret_at_end("{{ zzz");
        assert_eq!(
            refresh_suggestions(&area, &fields(), &mut list, TemplateGuard::default(), 10),
            0
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_zero_limit_renders_nothing() {
        let area = TextArea::with_caret_at_end("{{ case");
        let mut list = RenderedSuggestions::default();
        assert_eq!(
            refresh_suggestions(&area, &fields(), &mut list, TemplateGuard::default(), 0),
            0
        );
        assert!(list.is_empty());
    }
}
