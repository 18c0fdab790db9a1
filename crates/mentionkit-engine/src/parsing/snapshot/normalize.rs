use crate::{
    parsing::ParsedValue,
    parts::{Part, PartType},
};

/// A flat, stable view of one part for snapshot output.
#[derive(Debug)]
pub struct PartSnap {
    pub kind: String,
    pub span: String,
    pub text: String,
}

pub fn normalize(parsed: &ParsedValue<'_>) -> Vec<PartSnap> {
    parsed.parts.iter().map(snap_part).collect()
}

fn snap_part(part: &Part<'_>) -> PartSnap {
    let kind = match (part.part_type, &part.data) {
        (_, Some(data)) => format!("Mention[{}:{}]", data.trigger, data.id),
        (Some(PartType::Pattern(_)), None) => "Pattern".to_string(),
        (_, None) => "Plain".to_string(),
    };

    PartSnap {
        kind,
        span: format!("{}..{}", part.position.start, part.position.end),
        text: part.text.clone(),
    }
}
