//! Formatting help modal.

/// Title of the formatting help modal.
pub const FORMATTING_HELP_TITLE: &str = "Formatting";

/// Help fragment used when the host page does not provide its own.
pub const FORMATTING_HELP_HTML: &str = r#"<table class="govuk-table">
  <tbody class="govuk-table__body">
    <tr class="govuk-table__row">
      <td class="govuk-table__cell"><code>**bold**</code></td>
      <td class="govuk-table__cell"><strong>bold</strong></td>
    </tr>
    <tr class="govuk-table__row">
      <td class="govuk-table__cell"><code>_italic_</code></td>
      <td class="govuk-table__cell"><em>italic</em></td>
    </tr>
    <tr class="govuk-table__row">
      <td class="govuk-table__cell"><code>{{ field }}</code></td>
      <td class="govuk-table__cell">Inserts a field value. Type inside the braces for suggestions.</td>
    </tr>
    <tr class="govuk-table__row">
      <td class="govuk-table__cell"><code>{% if field %}...{% endif %}</code></td>
      <td class="govuk-table__cell">Includes text only when the condition holds.</td>
    </tr>
  </tbody>
</table>
"#;

/// Host modal dialog.
pub trait ModalPresenter {
    fn show_modal(&mut self, title: &str, html: &str, dismissible: bool);
}

/// Show the formatting help. `html` is the host's help fragment, or
/// [`FORMATTING_HELP_HTML`] when `None`.
pub fn show_formatting_help<M>(presenter: &mut M, html: Option<&str>)
where
    M: ModalPresenter + ?Sized,
{
    presenter.show_modal(FORMATTING_HELP_TITLE, html.unwrap_or(FORMATTING_HELP_HTML), false);
}
