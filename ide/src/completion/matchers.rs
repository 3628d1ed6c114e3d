//! Candidate text normalization and prefix matching.
//!
//! Matching is an exact, case-sensitive prefix test against the candidate's display
//! text: markup tags removed, whitespace runs collapsed to one space, ends trimmed.
//! Case variants of the same name are distinct candidates.

use pig_analyzer::is_word_char;

/// Display text of a candidate as used for matching.
pub(super) fn normalize_candidate(candidate: &str) -> String {
    let mut out = String::with_capacity(candidate.len());
    let mut in_tag = false;
    let mut pending_space = false;

    for c in candidate.chars() {
        match c {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            c if c.is_whitespace() => pending_space = true,
            c => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(c);
            }
        }
    }

    out
}

pub(super) fn matches_prefix(candidate: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    normalize_candidate(candidate).starts_with(prefix)
}

/// `^[\w$_]*$`: identifier-like text, including the empty string.
pub(super) fn is_word_like(text: &str) -> bool {
    text.chars().all(is_word_char)
}

/// Path segment text (word chars plus `.` and `-`), excluding the separator.
pub(super) fn is_path_segment(text: &str) -> bool {
    text.chars().all(|c| is_word_char(c) || matches!(c, '.' | '-'))
}
