//! # Value Parsing
//!
//! Turns raw markup (free text with embedded `trigger[name](id)` mentions)
//! into the plain-text projection plus the ordered [`Part`] list covering it.
//!
//! ## Priority
//!
//! Part types are tried in list order. The first type claims all of its
//! matches; text before, between and after those matches is parsed again with
//! the remaining types only. Lower-priority types therefore never match inside
//! a run already claimed by a higher-priority one.
//!
//! A mention match whose trigger character belongs to a different mention type
//! is handed down unchanged as raw text, so several triggers can share one
//! grammar and still be routed to their own type.

pub mod mention;
pub mod snapshot;

use crate::{
    parts::{Part, PartType},
    text::char_len,
};

use mention::{MENTION_REGEX, mention_data_from_captures};

/// The result of parsing raw markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedValue<'a> {
    /// What the user sees and edits.
    pub plain_text: String,
    /// Contiguous parts tiling `plain_text`.
    pub parts: Vec<Part<'a>>,
}

/// Parses `value` against `part_types` (highest priority first).
///
/// Never fails: malformed markup simply stays plain text, and an empty value
/// yields a single empty plain part.
pub fn parse_value<'a>(value: &str, part_types: &'a [PartType]) -> ParsedValue<'a> {
    let parsed = parse_at(value, part_types, 0);
    log::trace!(
        "parsed {} bytes of markup into {} parts",
        value.len(),
        parsed.parts.len()
    );
    parsed
}

/// [`parse_value`] for a value that may be absent; `None` parses as `""`.
pub fn parse_optional_value<'a>(value: Option<&str>, part_types: &'a [PartType]) -> ParsedValue<'a> {
    parse_value(value.unwrap_or_default(), part_types)
}

/// Accumulates parts while tracking the running character offset.
struct Collector<'a> {
    base: usize,
    len: usize,
    out: ParsedValue<'a>,
}

impl<'a> Collector<'a> {
    fn new(base: usize) -> Self {
        Self {
            base,
            len: 0,
            out: ParsedValue::default(),
        }
    }

    /// Absolute offset of the next part.
    fn offset(&self) -> usize {
        self.base + self.len
    }

    fn push(&mut self, part: Part<'a>) {
        self.len += char_len(&part.text);
        self.out.plain_text.push_str(&part.text);
        self.out.parts.push(part);
    }

    fn extend(&mut self, parsed: ParsedValue<'a>) {
        self.len += char_len(&parsed.plain_text);
        self.out.plain_text.push_str(&parsed.plain_text);
        self.out.parts.extend(parsed.parts);
    }

    /// Parses `text` with the lower-priority types and appends the result.
    fn descend(&mut self, text: &str, rest: &'a [PartType]) {
        let parsed = parse_at(text, rest, self.offset());
        self.extend(parsed);
    }
}

fn parse_at<'a>(value: &str, part_types: &'a [PartType], offset: usize) -> ParsedValue<'a> {
    let Some((part_type, rest)) = part_types.split_first() else {
        return ParsedValue {
            plain_text: value.to_string(),
            parts: vec![Part::plain(value, offset)],
        };
    };

    let regex = match part_type {
        PartType::Mention(_) => &*MENTION_REGEX,
        PartType::Pattern(p) => &p.pattern,
    };

    let matches: Vec<_> = regex
        .captures_iter(value)
        .filter_map(|caps| caps.get(0).map(|m| (m.range(), caps)))
        .collect();

    let Some((first, _)) = matches.first() else {
        return parse_at(value, rest, offset);
    };

    let mut collector = Collector::new(offset);

    if first.start != 0 {
        collector.descend(&value[..first.start], rest);
    }

    for (i, (range, caps)) in matches.iter().enumerate() {
        match part_type {
            PartType::Mention(mention_type) => match mention_data_from_captures(caps) {
                Some(data) if data.trigger == mention_type.trigger => {
                    let part = Part::mention(part_type, mention_type, data, collector.offset());
                    collector.push(part);
                }
                _ => collector.descend(&value[range.clone()], rest),
            },
            PartType::Pattern(_) => {
                let part = Part::pattern(part_type, &value[range.clone()], collector.offset());
                collector.push(part);
            }
        }

        if range.end != value.len() {
            let gap_end = matches
                .get(i + 1)
                .map_or(value.len(), |(next, _)| next.start);
            collector.descend(&value[range.end..gap_end], rest);
        }
    }

    collector.out
}

#[cfg(test)]
mod tests;
