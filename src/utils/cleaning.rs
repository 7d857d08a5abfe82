use std::sync::OnceLock;
use regex::Regex;
use crate::static_vars::DANDA_TERMINATOR;

// Trailing verse numbering such as "||1.1||" or "1.1"
fn trailing_numbering_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9.|]+$").expect("trailing numbering regex"))
}

fn collapse_newlines(text: &str) -> String {
    text.replace('\n', " ")
}

/// Text that already carries the closing mark is not marked again, so
/// cleaning an already-cleaned text is a no-op.
pub(crate) fn clean_original_text(raw: &str) -> String {
    let collapsed = collapse_newlines(raw);
    let stripped = trailing_numbering_re().replace(&collapsed, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() || trimmed.ends_with(DANDA_TERMINATOR) {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, DANDA_TERMINATOR)
    }
}

pub(crate) fn clean_translation_text(raw: &str) -> String {
    collapse_newlines(raw).trim().to_string()
}
