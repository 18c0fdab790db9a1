//! Parser behaviour: priority routing, offsets and the tiling invariant.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{parse_optional_value, parse_value, snapshot};
use crate::parts::{MentionPartType, PartType, Position};

fn at() -> Vec<PartType> {
    vec![PartType::mention('@')]
}

fn spans(value: &str, part_types: &[PartType]) -> Vec<(Position, String)> {
    parse_value(value, part_types)
        .parts
        .into_iter()
        .map(|p| (p.position, p.text))
        .collect()
}

#[test]
fn mention_in_sentence() {
    let types = at();
    let parsed = parse_value("Hello @[John Doe](1), how are you?", &types);
    snapshot::invariants(&parsed);

    assert_eq!(parsed.plain_text, "Hello @John Doe, how are you?");
    insta::assert_debug_snapshot!(snapshot::normalize(&parsed), @r#"
    [
        PartSnap {
            kind: "Plain",
            span: "0..6",
            text: "Hello ",
        },
        PartSnap {
            kind: "Mention[@:1]",
            span: "6..15",
            text: "@John Doe",
        },
        PartSnap {
            kind: "Plain",
            span: "15..29",
            text: ", how are you?",
        },
    ]
    "#);

    let data = parsed.parts[1].data.as_ref().unwrap();
    assert_eq!(data.name, "John Doe");
    assert_eq!(data.id, "1");
    assert_eq!(data.original, "@[John Doe](1)");
    assert_eq!(parsed.parts[1].part_type, Some(&types[0]));
}

#[test]
fn empty_value_is_one_empty_plain_part() {
    let types = at();
    let parsed = parse_value("", &types);
    assert_eq!(parsed.plain_text, "");
    assert_eq!(parsed.parts.len(), 1);
    assert_eq!(parsed.parts[0].text, "");
    assert_eq!(parsed.parts[0].position, Position::new(0, 0));
    assert!(parsed.parts[0].part_type.is_none());
}

#[test]
fn missing_value_parses_as_empty() {
    let types = at();
    assert_eq!(parse_optional_value(None, &types), parse_value("", &types));
}

#[rstest]
#[case::no_types(vec![])]
#[case::mention_type(at())]
fn mention_free_text_is_a_single_plain_part(#[case] types: Vec<PartType>) {
    let text = "just some words, no markup\nsecond line";
    let parsed = parse_value(text, &types);
    assert_eq!(parsed.plain_text, text);
    assert_eq!(parsed.parts.len(), 1);
    assert_eq!(parsed.parts[0].text, text);
    assert!(parsed.parts[0].data.is_none());
}

#[test]
fn triggers_are_routed_to_their_own_type() {
    let types = vec![PartType::mention('@'), PartType::mention('#')];
    let parsed = parse_value("hi @[Ann](1) and #[rust](r)", &types);
    snapshot::invariants(&parsed);

    assert_eq!(parsed.plain_text, "hi @Ann and #rust");
    assert_eq!(
        spans("hi @[Ann](1) and #[rust](r)", &types),
        vec![
            (Position::new(0, 3), "hi ".to_string()),
            (Position::new(3, 7), "@Ann".to_string()),
            (Position::new(7, 12), " and ".to_string()),
            (Position::new(12, 17), "#rust".to_string()),
        ]
    );
    assert_eq!(parsed.parts[1].part_type, Some(&types[0]));
    assert_eq!(parsed.parts[3].part_type, Some(&types[1]));
    assert_eq!(parsed.parts[3].data.as_ref().unwrap().trigger, '#');
}

#[test]
fn unconfigured_trigger_stays_raw_markup() {
    let types = at();
    let parsed = parse_value("tag #[rust](r)", &types);
    assert_eq!(parsed.plain_text, "tag #[rust](r)");
    assert!(parsed.parts.iter().all(|p| p.data.is_none()));
}

#[test]
fn pattern_types_match_outside_mentions() {
    let types = vec![
        PartType::mention('@'),
        PartType::pattern(r"https?://\S+").unwrap(),
    ];
    let parsed = parse_value("see @[Ann](1) https://x.io ok", &types);
    snapshot::invariants(&parsed);

    insta::assert_debug_snapshot!(snapshot::normalize(&parsed), @r#"
    [
        PartSnap {
            kind: "Plain",
            span: "0..4",
            text: "see ",
        },
        PartSnap {
            kind: "Mention[@:1]",
            span: "4..8",
            text: "@Ann",
        },
        PartSnap {
            kind: "Plain",
            span: "8..9",
            text: " ",
        },
        PartSnap {
            kind: "Pattern",
            span: "9..21",
            text: "https://x.io",
        },
        PartSnap {
            kind: "Plain",
            span: "21..24",
            text: " ok",
        },
    ]
    "#);
}

#[test]
fn pattern_never_matches_inside_a_mention_name() {
    let types = vec![PartType::mention('@'), PartType::pattern(r"Doe").unwrap()];
    let parsed = parse_value("@[John Doe](1) Doe", &types);
    assert_eq!(parsed.parts.len(), 3);
    assert!(parsed.parts[0].is_mention());
    assert_eq!(parsed.parts[1].text, " ");
    assert_eq!(parsed.parts[2].text, "Doe");
    assert_eq!(parsed.parts[2].part_type, Some(&types[1]));
}

#[test]
fn adjacent_mentions_keep_an_empty_gap_part() {
    let types = at();
    assert_eq!(
        spans("@[a](1)@[b](2)", &types),
        vec![
            (Position::new(0, 2), "@a".to_string()),
            (Position::new(2, 2), String::new()),
            (Position::new(2, 4), "@b".to_string()),
        ]
    );
}

#[test]
fn custom_plain_string_drives_positions() {
    let types = vec![PartType::Mention(
        MentionPartType::new('@').plain_string(|m| format!("<{}>", m.name)),
    )];
    let parsed = parse_value("x @[Al](1) y", &types);
    assert_eq!(parsed.plain_text, "x <Al> y");
    assert_eq!(parsed.parts[1].position, Position::new(2, 6));
    assert_eq!(parsed.parts[2].position, Position::new(6, 8));
}

#[test]
fn positions_count_characters_not_bytes() {
    let types = at();
    assert_eq!(
        spans("ñ @[Zoë](1)!", &types),
        vec![
            (Position::new(0, 2), "ñ ".to_string()),
            (Position::new(2, 6), "@Zoë".to_string()),
            (Position::new(6, 7), "!".to_string()),
        ]
    );
}

#[rstest]
#[case::plain("hello")]
#[case::leading_mention("@[A](1) rest")]
#[case::trailing_mention("start @[A](1)")]
#[case::only_mention("@[A](1)")]
#[case::many("a @[A](1) b @[B](2)\nc @[C](3) d")]
#[case::malformed("@[A] (1) and @[B](2")]
#[case::foreign_trigger("x #[A](1) @[B](2) y")]
fn parts_tile_the_plain_text(#[case] value: &str) {
    let types = vec![
        PartType::mention('@'),
        PartType::pattern(r"\bd\b").unwrap(),
    ];
    let parsed = parse_value(value, &types);
    snapshot::invariants(&parsed);
}
