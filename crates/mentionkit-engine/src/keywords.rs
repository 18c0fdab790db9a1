//! # Suggestion Keywords
//!
//! Works out, for each mention trigger, whether the caret is inside a trigger
//! word still being typed and what has been typed after the trigger so far.
//! That query drives the suggestion list.

use std::collections::BTreeMap;

use crate::{
    parts::{MentionPartType, Part, PartType, Position},
    text::{char_at, last_index_at_or_before, substring},
};

/// Active query per trigger character; `None` means no suggestion session.
pub type KeywordByTrigger = BTreeMap<char, Option<String>>;

/// Resolves the active query for every mention type in `part_types`.
///
/// Only a collapsed selection can have a query. Pattern types are skipped.
pub fn get_mention_part_suggestion_keywords(
    parts: &[Part<'_>],
    plain_text: &str,
    selection: Position,
    part_types: &[PartType],
) -> KeywordByTrigger {
    part_types
        .iter()
        .filter_map(PartType::as_mention)
        .map(|mention_type| {
            (
                mention_type.trigger,
                keyword_for(parts, plain_text, selection, mention_type),
            )
        })
        .collect()
}

fn keyword_for(
    parts: &[Part<'_>],
    plain_text: &str,
    selection: Position,
    mention_type: &MentionPartType,
) -> Option<String> {
    if !selection.is_collapsed() {
        return None;
    }
    let caret = selection.end;

    let part = parts
        .iter()
        .find(|part| caret > part.position.start && caret <= part.position.end)?;
    if part.is_mention() {
        return None;
    }

    let trigger_index = last_index_at_or_before(plain_text, mention_type.trigger, caret)?;

    // The trigger must belong to this part and start a word.
    if trigger_index < part.position.start {
        return None;
    }
    if trigger_index > 0
        && !char_at(plain_text, trigger_index - 1).is_some_and(char::is_whitespace)
    {
        return None;
    }

    let mut spaces_count = 0;
    for c in plain_text
        .chars()
        .skip(trigger_index)
        .take(caret - trigger_index)
    {
        match c {
            // Mentions cannot span lines.
            '\n' => return None,
            ' ' => {
                spaces_count += 1;
                if spaces_count > mention_type.allowed_spaces_count {
                    return None;
                }
            }
            _ => {}
        }
    }

    // A trigger right at the caret yields the trigger itself (bounds swap).
    Some(substring(plain_text, trigger_index + 1, caret).to_string())
}
