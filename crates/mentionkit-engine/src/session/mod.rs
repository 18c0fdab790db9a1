//! # Session
//!
//! The state a mention input keeps between keystrokes: the raw markup value,
//! the caret/selection and the configured part types. Every operation runs the
//! stateless pipeline against that state and stores the resulting markup.
//!
//! Debouncing of the suggestion query is left to the owner through
//! [`Debouncer`], which holds no timers of its own.

pub mod debounce;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};

use crate::{
    editing::{add_suggestion, generate_value_from_parts_and_changed_text},
    keywords::{KeywordByTrigger, get_mention_part_suggestion_keywords},
    parsing::{ParsedValue, parse_value},
    parts::{PartType, Position, Suggestion},
    text::char_len,
};

#[derive(Debug, Clone, Default)]
pub struct MentionSession {
    value: String,
    selection: Position,
    part_types: Vec<PartType>,
}

impl MentionSession {
    pub fn new(part_types: Vec<PartType>) -> Self {
        Self {
            value: String::new(),
            selection: Position::default(),
            part_types,
        }
    }

    /// Starts from existing raw markup with the caret at the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        let end = char_len(&self.parsed().plain_text);
        self.selection = Position::caret(end);
        self
    }

    /// The raw markup.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn selection(&self) -> Position {
        self.selection
    }

    pub fn part_types(&self) -> &[PartType] {
        &self.part_types
    }

    /// Re-derives plain text and parts from the raw markup.
    pub fn parsed(&self) -> ParsedValue<'_> {
        parse_value(&self.value, &self.part_types)
    }

    pub fn plain_text(&self) -> String {
        self.parsed().plain_text
    }

    /// Replaces the raw markup wholesale.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Applies the plain text reported by the text field after an edit.
    pub fn change_text(&mut self, changed_text: &str) {
        let value = {
            let parsed = self.parsed();
            generate_value_from_parts_and_changed_text(
                &parsed.parts,
                &parsed.plain_text,
                changed_text,
            )
        };
        log::debug!("value changed: {:?} -> {value:?}", self.value);
        self.value = value;
    }

    pub fn set_selection(&mut self, selection: Position) {
        self.selection = selection;
    }

    /// Active query per mention trigger for the current caret.
    pub fn keywords(&self) -> KeywordByTrigger {
        let parsed = self.parsed();
        get_mention_part_suggestion_keywords(
            &parsed.parts,
            &parsed.plain_text,
            self.selection,
            &self.part_types,
        )
    }

    pub fn keyword(&self, trigger: char) -> Option<String> {
        self.keywords().remove(&trigger).flatten()
    }

    /// Commits `suggestion` for the mention type keyed by `trigger`.
    ///
    /// Returns `false` and leaves the session untouched when there is no such
    /// mention type or no open trigger at the caret.
    pub fn add_suggestion(&mut self, trigger: char, suggestion: &Suggestion) -> bool {
        let added = {
            let Some(part_type) = self
                .part_types
                .iter()
                .find(|t| t.as_mention().is_some_and(|m| m.trigger == trigger))
            else {
                log::warn!("no mention type configured for trigger {trigger:?}");
                return false;
            };
            let parsed = self.parsed();
            add_suggestion(
                &parsed.parts,
                part_type,
                &parsed.plain_text,
                self.selection,
                suggestion,
            )
        };

        match added {
            Some(added) => {
                self.value = added.value;
                self.selection = Position::caret(added.caret);
                true
            }
            None => false,
        }
    }

    /// Empties the input (the "send" action), returning the markup it held.
    pub fn clear(&mut self) -> String {
        self.selection = Position::default();
        std::mem::take(&mut self.value)
    }
}
