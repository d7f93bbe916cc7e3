//! Run matchers: control-character runs, spaces, symbols, repeats
//!
//! All matchers take the unconsumed remainder of the input and return the byte
//! length of the token they would emit, or `None` when they do not apply.

use crate::tables::{self, CharSet};

/// Measure the prefix of `s` whose characters satisfy `accept`, stopping after
/// `max` characters. Returns `(chars, bytes)`.
pub(crate) fn take_while_max(s: &str, max: usize, accept: impl Fn(char) -> bool) -> (usize, usize) {
    let mut chars = 0;
    let mut bytes = 0;
    for ch in s.chars() {
        if chars == max || !accept(ch) {
            break;
        }
        chars += 1;
        bytes += ch.len_utf8();
    }
    (chars, bytes)
}

/// Byte length of the non-empty prefix accepted by `accept`, bounded by `max`
pub(crate) fn run_of(s: &str, max: usize, accept: impl Fn(char) -> bool) -> Option<usize> {
    let (chars, bytes) = take_while_max(s, max, accept);
    (chars > 0).then_some(bytes)
}

/// Try `body` after a single leading space, then without it.
///
/// This is how an optional `[ ]?` prefix resolves: the space is kept only when
/// the rest of the rule still matches behind it.
pub(crate) fn with_leading_space(s: &str, body: impl Fn(&str) -> Option<usize>) -> Option<usize> {
    if let Some(tail) = s.strip_prefix(' ') {
        if let Some(len) = body(tail) {
            return Some(len + 1);
        }
    }
    body(s)
}

/// One ASCII digit
pub(crate) fn digit(s: &str) -> Option<usize> {
    s.as_bytes()
        .first()
        .filter(|b| b.is_ascii_digit())
        .map(|_| 1)
}

/// Maximal run of a single control character
pub(crate) fn repeated_control(s: &str, ch: char) -> Option<usize> {
    run_of(s, usize::MAX, |c| c == ch)
}

/// Maximal run of ASCII spaces
pub(crate) fn spaces(s: &str) -> Option<usize> {
    run_of(s, usize::MAX, |c| c == ' ')
}

/// A fixed two-character literal such as `()`
pub(crate) fn literal(s: &str, lit: &str) -> Option<usize> {
    s.starts_with(lit).then_some(lit.len())
}

/// A repeatable special followed by at least one copy of itself, `max` total
pub(crate) fn repeated_special(s: &str, max: usize) -> Option<usize> {
    let first = s.chars().next().filter(|&c| tables::REPEATABLE.contains(c))?;
    let head = first.len_utf8();
    let rest = run_of(&s[head..], max.saturating_sub(1), |c| c == first)?;
    Some(head + rest)
}

/// Up to `max` symbols, optionally preceded by a space
pub(crate) fn symbols(s: &str, max: usize) -> Option<usize> {
    with_leading_space(s, |body| run_of(body, max, |c| tables::SYMBOLS.contains(c)))
}

/// Up to `max` non-Latin characters, optionally preceded by a space
pub(crate) fn non_latin(s: &str, max: usize) -> Option<usize> {
    with_leading_space(s, |body| run_of(body, max, tables::is_non_latin))
}

/// Up to `max` consonants from `set`
pub(crate) fn consonant_cluster(s: &str, set: CharSet, max: usize) -> Option<usize> {
    run_of(s, max, |c| set.contains(c))
}

/// Exactly one character
pub(crate) fn any_char(s: &str) -> Option<usize> {
    s.chars().next().map(char::len_utf8)
}
