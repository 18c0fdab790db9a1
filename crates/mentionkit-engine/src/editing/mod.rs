/*!
 * # Editing
 *
 * Producing new raw markup from user actions. The raw markup string is the
 * single source of truth; nothing here mutates parts. Every function takes the
 * parts of the current value, computes a brand-new markup string, and leaves
 * re-parsing to the caller.
 *
 * ## Module Structure
 *
 * - **`diff`**: character-level edit script between two plain texts (`similar`, Myers)
 * - **`patch`**: rebuilds markup after a plain-text edit, keeping untouched mentions
 * - **`suggestion`**: replaces the open trigger word at the caret with a mention
 *
 * ## Usage Pattern
 *
 * ```rust
 * use mentionkit_engine::{parsing::parse_value, editing::*, parts::*};
 *
 * let types = vec![PartType::Mention(
 *     MentionPartType::new('@').insert_space_after_mention(true),
 * )];
 *
 * // The user typed "@Jo" into an empty field.
 * let parsed = parse_value("", &types);
 * let value = generate_value_from_parts_and_changed_text(&parsed.parts, &parsed.plain_text, "@Jo");
 *
 * // ... then picked "John Doe" from the suggestion list.
 * let parsed = parse_value(&value, &types);
 * let value = generate_value_with_added_suggestion(
 *     &parsed.parts,
 *     &types[0],
 *     &parsed.plain_text,
 *     Position::caret(3),
 *     &Suggestion::new("2", "John Doe"),
 * );
 * assert_eq!(value.as_deref(), Some("@[John Doe](2) "));
 * ```
 */

pub mod diff;
pub mod patch;
pub mod suggestion;

pub use diff::{Change, diff_chars};
pub use patch::{generate_value_from_parts_and_changed_text, parts_interval};
pub use suggestion::{AddedSuggestion, add_suggestion, generate_value_with_added_suggestion};
