use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MentionError;

use super::MentionData;

/// Presentation hints carried through to whoever renders the parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

/// How a mention is shown in the plain-text projection.
pub type PlainStringFn = fn(&MentionData) -> String;

/// A mention kind keyed by a single trigger character, e.g. `@`.
#[derive(Clone)]
pub struct MentionPartType {
    pub trigger: char,
    pub style: TextStyle,
    /// Add a space after a committed suggestion when the caret sits at the end
    /// of the text or of a line.
    pub is_insert_space_after_mention: bool,
    /// How many spaces a query after the trigger may contain.
    pub allowed_spaces_count: usize,
    pub get_plain_string: Option<PlainStringFn>,
}

impl MentionPartType {
    pub const DEFAULT_ALLOWED_SPACES_COUNT: usize = 1;

    pub fn new(trigger: char) -> Self {
        Self {
            trigger,
            style: TextStyle::default(),
            is_insert_space_after_mention: false,
            allowed_spaces_count: Self::DEFAULT_ALLOWED_SPACES_COUNT,
            get_plain_string: None,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn insert_space_after_mention(mut self, insert: bool) -> Self {
        self.is_insert_space_after_mention = insert;
        self
    }

    pub fn allowed_spaces(mut self, count: usize) -> Self {
        self.allowed_spaces_count = count;
        self
    }

    pub fn plain_string(mut self, f: PlainStringFn) -> Self {
        self.get_plain_string = Some(f);
        self
    }

    /// Display text for `mention`; `trigger + name` unless overridden.
    pub fn plain_string_for(&self, mention: &MentionData) -> String {
        match self.get_plain_string {
            Some(f) => f(mention),
            None => format!("{}{}", self.trigger, mention.name),
        }
    }
}

impl fmt::Debug for MentionPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MentionPartType")
            .field("trigger", &self.trigger)
            .field("style", &self.style)
            .field(
                "is_insert_space_after_mention",
                &self.is_insert_space_after_mention,
            )
            .field("allowed_spaces_count", &self.allowed_spaces_count)
            .field("get_plain_string", &self.get_plain_string.is_some())
            .finish()
    }
}

/// A free-form highlighted run matched by a regular expression (URLs, hashtags).
#[derive(Debug, Clone)]
pub struct PatternPartType {
    pub pattern: Regex,
    pub style: TextStyle,
}

impl PatternPartType {
    pub fn new(pattern: &str) -> Result<Self, MentionError> {
        let regex = Regex::new(pattern).map_err(|source| MentionError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        // An empty match would never advance the parser past its input.
        if regex.is_match("") {
            return Err(MentionError::EmptyMatchPattern(pattern.to_string()));
        }
        Ok(Self {
            pattern: regex,
            style: TextStyle::default(),
        })
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// One configured kind of rich part. Order in a list is parse priority.
#[derive(Debug, Clone)]
pub enum PartType {
    Mention(MentionPartType),
    Pattern(PatternPartType),
}

impl PartType {
    pub fn mention(trigger: char) -> Self {
        Self::Mention(MentionPartType::new(trigger))
    }

    pub fn pattern(pattern: &str) -> Result<Self, MentionError> {
        PatternPartType::new(pattern).map(Self::Pattern)
    }

    pub fn as_mention(&self) -> Option<&MentionPartType> {
        match self {
            Self::Mention(m) => Some(m),
            Self::Pattern(_) => None,
        }
    }

    pub fn style(&self) -> &TextStyle {
        match self {
            Self::Mention(m) => &m.style,
            Self::Pattern(p) => &p.style,
        }
    }
}

/// Part types compare by identity: two parts are of the same kind when they
/// borrow the same entry of the configured list.
impl PartialEq for PartType {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl From<MentionPartType> for PartType {
    fn from(value: MentionPartType) -> Self {
        Self::Mention(value)
    }
}

impl From<PatternPartType> for PartType {
    fn from(value: PatternPartType) -> Self {
        Self::Pattern(value)
    }
}
