use crate::{
    parts::{Part, value_from_parts},
    text::substr,
};

use super::diff::{Change, diff_chars};

/// Index of the part holding `cursor`.
///
/// With `include_end` the search accepts a cursor sitting exactly on a part's
/// end, which is where the end of an interval lands on part boundaries.
fn part_index_by_cursor(parts: &[Part<'_>], cursor: usize, include_end: bool) -> Option<usize> {
    parts.iter().position(|part| {
        if include_end && cursor >= part.position.start {
            cursor <= part.position.end
        } else {
            cursor < part.position.end
        }
    })
}

/// The parts covering `[cursor, cursor + count)` of the old plain text.
///
/// Parts entirely inside the interval are copied whole, mentions included.
/// Parts cut by either boundary contribute only the covered slice of their
/// text, as plain parts. If either boundary falls outside every part the
/// result is empty.
pub fn parts_interval<'a>(parts: &[Part<'a>], cursor: usize, count: usize) -> Vec<Part<'a>> {
    let new_cursor = cursor + count;

    let (Some(current_index), Some(new_index)) = (
        part_index_by_cursor(parts, cursor, false),
        part_index_by_cursor(parts, new_cursor, true),
    ) else {
        return Vec::new();
    };
    let current = &parts[current_index];
    let last = &parts[new_index];

    let mut interval = Vec::new();

    if current.position.start == cursor && current.position.end <= new_cursor {
        interval.push(current.clone());
    } else {
        interval.push(Part::plain(
            substr(&current.text, cursor - current.position.start, count),
            0,
        ));
    }

    if new_index > current_index {
        interval.extend_from_slice(&parts[current_index + 1..new_index]);

        if last.position.end == new_cursor && last.position.start >= cursor {
            interval.push(last.clone());
        } else {
            interval.push(Part::plain(
                substr(&last.text, 0, new_cursor - last.position.start),
                0,
            ));
        }
    }

    interval
}

/// Rebuilds raw markup after the user edited the plain text.
///
/// `parts` and `original_text` describe the value before the edit and
/// `changed_text` is the plain text the text field reports afterwards. Runs of
/// text the edit did not touch are copied from the old parts, so mentions
/// outside the edited region keep their markup; inserted text becomes plain.
pub fn generate_value_from_parts_and_changed_text(
    parts: &[Part<'_>],
    original_text: &str,
    changed_text: &str,
) -> String {
    let mut new_parts = Vec::new();
    let mut cursor = 0;

    for change in diff_chars(original_text, changed_text) {
        match change {
            Change::Removed { count } => {
                log::trace!("removed {count} chars at {cursor}");
                cursor += count;
            }
            Change::Added { value } => {
                log::trace!("added {value:?} at {cursor}");
                new_parts.push(Part::plain(value, 0));
            }
            Change::Unchanged { count } => {
                if count != 0 {
                    new_parts.extend(parts_interval(parts, cursor, count));
                    cursor += count;
                }
            }
        }
    }

    value_from_parts(&new_parts)
}
