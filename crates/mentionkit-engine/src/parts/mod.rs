//! # Parts
//!
//! The span model shared by every stage of the pipeline.
//!
//! A parsed value is an ordered list of [`Part`]s that tile the plain-text
//! projection: consecutive parts touch (`parts[i].position.end ==
//! parts[i + 1].position.start`) and their texts concatenate to the plain text.
//!
//! - **`position`**: `Position`, a character range
//! - **`part_type`**: `PartType` (mention trigger or custom pattern) and its style
//! - **`part`**: `Part`, `MentionData`, `Suggestion` and flattening to markup

pub mod part;
pub mod part_type;
pub mod position;

pub use part::{MentionData, Part, Suggestion, mention_markup, value_from_parts};
pub use part_type::{MentionPartType, PartType, PatternPartType, PlainStringFn, TextStyle};
pub use position::Position;
