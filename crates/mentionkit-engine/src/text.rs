//! Character-offset helpers over `str`.
//!
//! Positions in this crate count `char`s; these helpers translate them to
//! byte slices without panicking on out-of-range input.

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the `n`th character, clamped to `s.len()`.
pub fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Up to `count` characters starting at character `start`.
pub fn substr(s: &str, start: usize, count: usize) -> &str {
    let from = byte_offset(s, start);
    let rest = &s[from..];
    &rest[..byte_offset(rest, count)]
}

/// Characters in `[start, end)`; bounds are clamped and swapped if inverted.
pub fn substring(s: &str, start: usize, end: usize) -> &str {
    let (lo, hi) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };
    substr(s, lo, hi - lo)
}

/// Character at offset `n`.
pub fn char_at(s: &str, n: usize) -> Option<char> {
    s.chars().nth(n)
}

/// Offset of the last `needle` at or before character offset `at`.
pub fn last_index_at_or_before(s: &str, needle: char, at: usize) -> Option<usize> {
    s.chars()
        .take(at.saturating_add(1))
        .enumerate()
        .filter(|&(_, c)| c == needle)
        .map(|(i, _)| i)
        .last()
}
