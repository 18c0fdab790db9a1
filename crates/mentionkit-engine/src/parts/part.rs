use serde::{Deserialize, Serialize};

use crate::text::char_len;

use super::{MentionPartType, PartType, Position};

/// The fields of one `trigger[name](id)` mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionData {
    /// Raw markup form, written back verbatim when flattening.
    pub original: String,
    pub trigger: char,
    pub name: String,
    pub id: String,
}

impl MentionData {
    /// Builds the data for a freshly committed suggestion.
    pub fn from_suggestion(trigger: char, suggestion: &Suggestion) -> Self {
        Self {
            original: mention_markup(trigger, &suggestion.name, &suggestion.id),
            trigger,
            name: suggestion.name.clone(),
            id: suggestion.id.clone(),
        }
    }
}

/// An entry offered by the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// `trigger[name](id)`
pub fn mention_markup(trigger: char, name: &str, id: &str) -> String {
    format!("{trigger}[{name}]({id})")
}

/// A contiguous run of the plain-text projection.
///
/// Plain runs have neither `part_type` nor `data`. Pattern runs carry their
/// part type only; mention runs carry both.
#[derive(Debug, Clone, PartialEq)]
pub struct Part<'a> {
    pub text: String,
    pub position: Position,
    pub part_type: Option<&'a PartType>,
    pub data: Option<MentionData>,
}

impl<'a> Part<'a> {
    /// A plain run starting at `offset`.
    pub fn plain(text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let end = offset + char_len(&text);
        Self {
            text,
            position: Position::new(offset, end),
            part_type: None,
            data: None,
        }
    }

    /// A mention run whose text comes from the part type's plain-string rule.
    pub fn mention(
        part_type: &'a PartType,
        mention_type: &MentionPartType,
        data: MentionData,
        offset: usize,
    ) -> Self {
        let text = mention_type.plain_string_for(&data);
        let end = offset + char_len(&text);
        Self {
            text,
            position: Position::new(offset, end),
            part_type: Some(part_type),
            data: Some(data),
        }
    }

    /// A run matched by a pattern part type.
    pub fn pattern(part_type: &'a PartType, text: impl Into<String>, offset: usize) -> Self {
        let text = text.into();
        let end = offset + char_len(&text);
        Self {
            text,
            position: Position::new(offset, end),
            part_type: Some(part_type),
            data: None,
        }
    }

    pub fn is_mention(&self) -> bool {
        self.data.is_some()
    }

    /// The raw markup this part contributes when flattened.
    pub fn markup(&self) -> &str {
        match &self.data {
            Some(data) => &data.original,
            None => &self.text,
        }
    }
}

/// Flattens parts back into raw markup: mentions contribute their original
/// markup, everything else its text.
pub fn value_from_parts(parts: &[Part<'_>]) -> String {
    parts.iter().map(Part::markup).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mention_markup_format() {
        assert_eq!(mention_markup('@', "John Doe", "2"), "@[John Doe](2)");
    }

    #[test]
    fn plain_part_position_counts_chars() {
        let p = Part::plain("héllo", 3);
        assert_eq!(p.position, Position::new(3, 8));
        assert!(!p.is_mention());
    }

    #[test]
    fn flattening_uses_original_markup() {
        let ty = PartType::mention('@');
        let mention_type = ty.as_mention().unwrap();
        let data = MentionData::from_suggestion('@', &Suggestion::new("7", "Ann"));
        let parts = vec![
            Part::plain("hi ", 0),
            Part::mention(&ty, mention_type, data, 3),
            Part::plain("!", 7),
        ];
        assert_eq!(parts[1].text, "@Ann");
        assert_eq!(value_from_parts(&parts), "hi @[Ann](7)!");
    }

    #[test]
    fn flattening_empty_list() {
        assert_eq!(value_from_parts(&[]), "");
    }
}
