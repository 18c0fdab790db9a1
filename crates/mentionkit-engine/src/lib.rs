pub mod editing;
pub mod error;
pub mod filter;
pub mod keywords;
pub mod parsing;
pub mod parts;
pub mod session;
pub mod text;

// Re-export key types for easier usage
pub use editing::{
    AddedSuggestion, add_suggestion, generate_value_from_parts_and_changed_text,
    generate_value_with_added_suggestion,
};
pub use error::MentionError;
pub use filter::filter_suggestions;
pub use keywords::{KeywordByTrigger, get_mention_part_suggestion_keywords};
pub use parsing::{ParsedValue, parse_optional_value, parse_value};
pub use parts::*;
pub use session::{DEFAULT_DEBOUNCE, Debouncer, MentionSession};
