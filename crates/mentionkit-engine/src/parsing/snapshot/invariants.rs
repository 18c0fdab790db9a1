use crate::{parsing::ParsedValue, text::char_len};

/// Validates parser output invariants.
///
/// Asserts that:
/// - The first part starts at offset 0 and consecutive parts touch
/// - Every position spans exactly its part's text
/// - Part texts concatenate to the plain text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(parsed: &ParsedValue<'_>) {
    let mut expected_start = 0;
    let mut joined = String::new();

    for (i, part) in parsed.parts.iter().enumerate() {
        assert_eq!(
            part.position.start, expected_start,
            "part {i} does not start where the previous one ended: {:?}",
            part.position
        );
        assert_eq!(
            part.position.len(),
            char_len(&part.text),
            "part {i} position {:?} does not match text {:?}",
            part.position,
            part.text
        );
        expected_start = part.position.end;
        joined.push_str(&part.text);
    }

    assert_eq!(
        joined, parsed.plain_text,
        "part texts do not concatenate to the plain text"
    );
}
