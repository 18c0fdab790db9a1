use crate::{
    parts::{MentionData, Part, PartType, Position, Suggestion, value_from_parts},
    text::{char_at, char_len, last_index_at_or_before, substr},
};

/// Raw markup after committing a suggestion, plus where the caret goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedSuggestion {
    pub value: String,
    /// Just past the new mention (and the inserted space, if any).
    pub caret: usize,
}

/// Replaces the open trigger word ending at the caret with a mention built
/// from `suggestion`.
///
/// A trigger sitting right at the caret replaces nothing: the mention is
/// inserted in front of it. Returns `None` when `part_type` is not a mention
/// type, when the caret is outside every part, or when no trigger character
/// sits at or before the caret within its part. Callers should leave the value untouched in that case.
pub fn add_suggestion<'a>(
    parts: &[Part<'a>],
    part_type: &'a PartType,
    plain_text: &str,
    selection: Position,
    suggestion: &Suggestion,
) -> Option<AddedSuggestion> {
    let PartType::Mention(mention_type) = part_type else {
        return None;
    };

    let current_index = parts.iter().position(|part| {
        selection.end >= part.position.start && selection.end <= part.position.end
    })?;
    let current = &parts[current_index];

    let caret_in_part = selection.end - current.position.start;
    let trigger_in_part =
        last_index_at_or_before(&current.text, mention_type.trigger, caret_in_part)?;

    // Cursor is at the very end of the text or of a line.
    let insert_space = mention_type.is_insert_space_after_mention
        && (char_len(plain_text) == selection.end
            || char_at(&current.text, caret_in_part) == Some('\n'));

    let data = MentionData::from_suggestion(mention_type.trigger, suggestion);
    let mention = Part::mention(part_type, mention_type, data, 0);
    let caret = current.position.start
        + trigger_in_part
        + char_len(&mention.text)
        + usize::from(insert_space);

    let before = Part::plain(substr(&current.text, 0, trigger_in_part), 0);
    let after = Part::plain(
        format!(
            "{}{}",
            if insert_space { " " } else { "" },
            substr(&current.text, caret_in_part, usize::MAX)
        ),
        0,
    );

    let mut new_parts = Vec::with_capacity(parts.len() + 2);
    new_parts.extend_from_slice(&parts[..current_index]);
    new_parts.push(before);
    new_parts.push(mention);
    new_parts.push(after);
    new_parts.extend_from_slice(&parts[current_index + 1..]);

    let value = value_from_parts(&new_parts);
    log::debug!(
        "committed {}[{}]({}) at {}",
        mention_type.trigger,
        suggestion.name,
        suggestion.id,
        current.position.start + trigger_in_part
    );

    Some(AddedSuggestion { value, caret })
}

/// [`add_suggestion`] returning only the new raw markup.
pub fn generate_value_with_added_suggestion<'a>(
    parts: &[Part<'a>],
    part_type: &'a PartType,
    plain_text: &str,
    selection: Position,
    suggestion: &Suggestion,
) -> Option<String> {
    add_suggestion(parts, part_type, plain_text, selection, suggestion).map(|added| added.value)
}
