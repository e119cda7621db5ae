//! Internal helpers for input validation and name normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation logic so the engine enforces consistent invariants.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{EngineError, ResultEngine};

/// Trim `value` and check its length (in characters) is within `min..=max`.
pub(crate) fn normalize_text(
    value: &str,
    label: &str,
    min: usize,
    max: usize,
) -> ResultEngine<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len == 0 {
        return Err(EngineError::InvalidInput(format!(
            "{label} must not be empty"
        )));
    }
    if len < min || len > max {
        return Err(EngineError::InvalidInput(format!(
            "{label} must be between {min} and {max} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Check an integer is within `min..=max`.
pub(crate) fn require_range(value: i32, label: &str, min: i32, max: i32) -> ResultEngine<i32> {
    if !(min..=max).contains(&value) {
        return Err(EngineError::InvalidInput(format!(
            "{label} must be between {min} and {max}"
        )));
    }
    Ok(value)
}

/// Comparison key for names: case, accents and punctuation are ignored.
///
/// `"  José  Silva "`, `"jose silva"` and `"JOSE-SILVA"` share the key
/// `"jose silva"`.
pub(crate) fn normalize_key(input: &str) -> String {
    let mut out = String::new();
    let mut prev_space = false;
    for ch in input.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    out.trim_end().to_string()
}
