//! Name validity and formatting helpers shared by the resolver operations.

/// A candidate name is usable iff it is non-empty after trimming and is not
/// the signup placeholder.
pub(crate) fn is_valid_name(candidate: &str, placeholder: &str) -> bool {
    let trimmed = candidate.trim();
    !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case(placeholder.trim())
}

/// Shorten a raw full name for display: `"Adam Buerer"` becomes `"Adam B"`.
///
/// Single-token names pass through trimmed; with two or more whitespace
/// separated tokens the result is the first token plus the uppercased
/// initial of the last token, no trailing period. Empty input yields `None`.
pub(crate) fn format_display_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut tokens = trimmed.split_whitespace();
    let first = tokens.next()?;
    match tokens.last() {
        Some(last) => {
            let initial = last.chars().next()?;
            Some(format!("{} {}", first, initial.to_uppercase()))
        }
        None => Some(trimmed.to_string()),
    }
}

/// Uppercased first character of a trimmed string, if any.
pub(crate) fn leading_initial(raw: &str) -> Option<char> {
    raw.trim().chars().next().and_then(|c| c.to_uppercase().next())
}
