//! Entry points a host wires to its buttons and keystrokes.

use std::fmt::Display;

use crate::editor::{HighlightOverlay, NoOverlay, TextSurface};
use crate::format::{Marker, apply_marker};
use crate::suggest::{
    Dictionary, RenderedSuggestions, SuggestionList, click_suggestion, current_word,
    refresh_suggestions, replace_current_word,
};
use crate::template::TemplateGuard;
use crate::toolbar::{FloatingToolbar, PointerPosition, on_selection_change};

/// Default number of suggestions rendered at once.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// One editor field together with its collaborators.
///
/// The toolbar and suggestion list are kept as plain state; the host reads
/// them back after each call to draw its UI.
#[derive(Debug)]
pub struct EditorSession<S, V, O = NoOverlay> {
    surface: S,
    overlay: O,
    dictionary: Dictionary<V>,
    toolbar: FloatingToolbar,
    suggestions: RenderedSuggestions,
    guard: TemplateGuard,
    limit: usize,
}

impl<S: TextSurface, V> EditorSession<S, V, NoOverlay> {
    /// Create a session without a highlighting overlay.
    pub fn new(surface: S, dictionary: Dictionary<V>) -> Self {
        Self::with_overlay(surface, NoOverlay, dictionary)
    }
}

impl<S: TextSurface, V, O: HighlightOverlay> EditorSession<S, V, O> {
    pub fn with_overlay(surface: S, overlay: O, dictionary: Dictionary<V>) -> Self {
        Self {
            surface,
            overlay,
            dictionary,
            toolbar: FloatingToolbar::new(),
            suggestions: RenderedSuggestions::default(),
            guard: TemplateGuard::default(),
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    #[must_use]
    pub fn with_guard(mut self, guard: TemplateGuard) -> Self {
        self.guard = guard;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub const fn overlay(&self) -> &O {
        &self.overlay
    }

    pub const fn dictionary(&self) -> &Dictionary<V> {
        &self.dictionary
    }

    pub const fn toolbar(&self) -> &FloatingToolbar {
        &self.toolbar
    }

    pub const fn rendered_suggestions(&self) -> &RenderedSuggestions {
        &self.suggestions
    }

    pub const fn guard(&self) -> TemplateGuard {
        self.guard
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Mouse-up on the text surface.
    pub fn selection_changed(&mut self, pointer: PointerPosition) -> bool {
        on_selection_change(&self.surface, &mut self.toolbar, pointer)
    }

    pub fn bold(&mut self) -> bool {
        apply_marker(&mut self.surface, &mut self.overlay, Marker::Bold)
    }

    pub fn italic(&mut self) -> bool {
        apply_marker(&mut self.surface, &mut self.overlay, Marker::Italic)
    }

    pub fn current_word(&self) -> String {
        current_word(&self.surface, self.guard)
    }

    pub fn suggestion(&self, prefix: &str) -> Option<&str> {
        self.dictionary.suggestion(prefix)
    }

    pub fn suggestions(&self, prefix: &str) -> Vec<(&str, &V)> {
        self.dictionary.suggestions(prefix)
    }

    pub fn replace_current_word(&mut self, new_word: &str) -> usize {
        replace_current_word(&mut self.surface, &mut self.overlay, new_word)
    }

    pub fn click_suggestion(&mut self, word: &str) -> usize {
        click_suggestion(&mut self.surface, &mut self.overlay, &mut self.suggestions, word)
    }

    /// Dismiss the suggestion list without accepting anything.
    pub fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
    }
}

impl<S: TextSurface, V: Display, O: HighlightOverlay> EditorSession<S, V, O> {
    /// Keystroke handler: recompute the suggestion list for the caret.
    pub fn refresh_suggestions(&mut self) -> usize {
        refresh_suggestions(
            &self.surface,
            &self.dictionary,
            &mut self.suggestions,
            self.guard,
            self.limit,
        )
    }
}
