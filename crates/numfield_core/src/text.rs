//! Numeric-text utilities for the field rules.
//!
//! These are the pure building blocks behind validation and truncation:
//! the signed-integer pattern check, decimal digit counting, and
//! prefix truncation.

/// Returns `true` if `s` is an optional leading minus sign followed by
/// zero or more ASCII digits (the pattern `^-?[0-9]*$`).
///
/// The empty string and a lone `"-"` both match: they are legitimate
/// transient states while the user is typing.
///
/// # Examples
///
/// ```
/// use numfield_core::is_numeric_text;
///
/// assert!(is_numeric_text(""));
/// assert!(is_numeric_text("-"));
/// assert!(is_numeric_text("0"));
/// assert!(is_numeric_text("-42"));
/// assert!(!is_numeric_text("12a"));
/// assert!(!is_numeric_text("4-2"));
/// assert!(!is_numeric_text("+7"));
/// assert!(!is_numeric_text("1.5"));
/// ```
pub fn is_numeric_text(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    digits.bytes().all(|b| b.is_ascii_digit())
}

/// Character length of the base-10 decimal representation of `n`,
/// including the leading minus sign when negative.
///
/// # Examples
///
/// ```
/// use numfield_core::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(100), 3);
/// assert_eq!(digit_count(-50), 3);
/// assert_eq!(digit_count(9999), 4);
/// ```
pub fn digit_count(n: i64) -> usize {
    let mut len = if n < 0 { 1 } else { 0 };
    let mut m = n.unsigned_abs();
    loop {
        len += 1;
        m /= 10;
        if m == 0 {
            return len;
        }
    }
}

/// The digit bound for a range: the longer of the two decimal
/// representations of `min` and `max`.
///
/// Held text is never allowed to grow past this many characters.
///
/// # Examples
///
/// ```
/// use numfield_core::digit_bound;
///
/// assert_eq!(digit_bound(0, 100), 3);
/// assert_eq!(digit_bound(-50, 50), 3);  // "-50" is 3 chars
/// assert_eq!(digit_bound(0, 9999), 4);
/// ```
#[inline]
pub fn digit_bound(min: i64, max: i64) -> usize {
    digit_count(min).max(digit_count(max))
}

/// The prefix of `s` containing at most `max_chars` characters.
///
/// Truncation is textual (left-to-right prefix), not a numeric clamp.
/// Validated field text is ASCII, but the cut is still taken on a
/// character boundary so arbitrary input cannot split a code point.
///
/// # Examples
///
/// ```
/// use numfield_core::truncate_to;
///
/// assert_eq!(truncate_to("12345", 4), "1234");
/// assert_eq!(truncate_to("12", 4), "12");
/// assert_eq!(truncate_to("12", 0), "");
/// ```
pub fn truncate_to(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
