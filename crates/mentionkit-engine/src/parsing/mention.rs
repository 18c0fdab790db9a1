use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parts::MentionData;

/// `trigger[name](id)`: one trigger character, a name without `[`, an id
/// without parentheses.
pub static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.)\[([^\[]*)\]\(([^(^)]*)\)").expect("mention grammar is a valid regex")
});

/// Extracts the mention fields from a [`MENTION_REGEX`] match.
pub fn mention_data_from_captures(caps: &Captures<'_>) -> Option<MentionData> {
    let original = caps.get(0)?.as_str();
    let trigger = caps.get(1)?.as_str().chars().next()?;
    Some(MentionData {
        original: original.to_string(),
        trigger,
        name: caps.get(2)?.as_str().to_string(),
        id: caps.get(3)?.as_str().to_string(),
    })
}
