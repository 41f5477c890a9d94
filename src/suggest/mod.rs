//! Word completion from a dictionary.
//!
//! The word under the caret is everything since the last space. Whether it
//! is offered for completion depends on the [`TemplateGuard`](crate::template::TemplateGuard);
//! completions come from a [`Dictionary`] in deterministic, case-insensitive
//! lexicographic order.

mod dictionary;
mod list;
mod word;

pub use dictionary::{Dictionary, DictionaryError, Metadata};
pub use list::{RenderedSuggestions, Suggestion, SuggestionList, collect_suggestions, refresh_suggestions};
pub use word::{click_suggestion, current_word, replace_current_word};
