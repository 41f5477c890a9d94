//! Deciding whether the caret sits inside template syntax.
//!
//! Documents embed `{{ variable }}` and `{% statement %}` tags. Word
//! suggestions are gated on whether the caret is inside an unclosed tag.
//! Two detectors are available:
//!
//! - [`TagDetection::Heuristic`] compares the last position of each opener
//!   with the last position of its closer. Cheap, and the default, but an
//!   opener of the other kind inside a tag can fool it.
//! - [`TagDetection::Scan`] walks the text once and only lets the matching
//!   closer end a tag.

const VAR_OPEN: &str = "{{";
const VAR_CLOSE: &str = "}}";
const STMT_OPEN: &str = "{%";
const STMT_CLOSE: &str = "%}";

/// Where suggestions are allowed relative to template tags.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplateScope {
    /// Only inside an open `{{` or `{%` tag.
    #[default]
    #[value(name = "inside")]
    InsideTags,
    /// Only outside template tags.
    #[value(name = "outside")]
    OutsideTags,
    /// Never suppress.
    #[value(name = "anywhere")]
    Anywhere,
}

/// How an open tag is detected.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagDetection {
    #[default]
    Heuristic,
    Scan,
}

/// Gate applied to the current word before suggestions are looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateGuard {
    pub scope: TemplateScope,
    pub detection: TagDetection,
}

impl TemplateGuard {
    pub const fn new(scope: TemplateScope, detection: TagDetection) -> Self {
        Self { scope, detection }
    }

    /// Whether a word ending at the end of `before_caret` may be suggested.
    pub fn allows(&self, before_caret: &str) -> bool {
        match self.scope {
            TemplateScope::Anywhere => true,
            TemplateScope::InsideTags => inside_open_tag(before_caret, self.detection),
            TemplateScope::OutsideTags => !inside_open_tag(before_caret, self.detection),
        }
    }
}

/// Whether the end of `text` lies inside an unclosed template tag.
pub fn inside_open_tag(text: &str, detection: TagDetection) -> bool {
    match detection {
        TagDetection::Heuristic => last_marker_heuristic(text),
        TagDetection::Scan => delimiter_scan(text),
    }
}

// `None < Some(_)`, so a missing marker orders before any found one.
fn last_marker_heuristic(text: &str) -> bool {
    let var_closed = text.rfind(VAR_OPEN) <= text.rfind(VAR_CLOSE);
    let stmt_closed = text.rfind(STMT_OPEN) <= text.rfind(STMT_CLOSE);
    !(var_closed && stmt_closed)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Text,
    Variable,
    Statement,
}

fn delimiter_scan(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut state = ScanState::Text;
    let mut i = 0;

    // Delimiters are ASCII, so byte stepping never lands a match mid-char.
    while i < bytes.len() {
        let rest = &bytes[i..];
        let next = match state {
            ScanState::Text if rest.starts_with(VAR_OPEN.as_bytes()) => Some(ScanState::Variable),
            ScanState::Text if rest.starts_with(STMT_OPEN.as_bytes()) => Some(ScanState::Statement),
            ScanState::Variable if rest.starts_with(VAR_CLOSE.as_bytes()) => Some(ScanState::Text),
            ScanState::Statement if rest.starts_with(STMT_CLOSE.as_bytes()) => Some(ScanState::Text),
            _ => None,
        };
        if let Some(next) = next {
            state = next;
            i += 2;
        } else {
            i += 1;
        }
    }

    state != ScanState::Text
}
