use thiserror::Error;

/// Errors raised while building part types from user-supplied definitions.
///
/// The pipeline itself never fails; see [`crate::parsing::parse_value`].
#[derive(Debug, Error)]
pub enum MentionError {
    #[error("Invalid part pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Pattern `{0}` matches the empty string")]
    EmptyMatchPattern(String),
}
