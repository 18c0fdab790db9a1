use mentionkit_engine::{Part, PartType, TextStyle, parse_value, text::substr};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position as CursorPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::App;

const INPUT_HEIGHT: u16 = 6;
const POPUP_HEIGHT: u16 = 7;

pub fn text_style(style: &TextStyle) -> Style {
    let mut out = Style::default();
    if let Some(color) = style.color.as_deref() {
        match color.parse::<Color>() {
            Ok(color) => out = out.fg(color),
            Err(_) => log::warn!("unknown color {color:?}"),
        }
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    out
}

/// Splits parts into terminal lines, styling each part by its type.
pub fn styled_lines(parts: &[Part<'_>]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for part in parts {
        let style = part
            .part_type
            .map(PartType::style)
            .map(text_style)
            .unwrap_or_default();
        for (i, segment) in part.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if !segment.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.push_span(Span::styled(segment.to_string(), style));
            }
        }
    }
    lines
}

/// Row and column of `caret` within `plain_text`, in characters.
pub fn caret_row_col(plain_text: &str, caret: usize) -> (usize, usize) {
    let before = substr(plain_text, 0, caret);
    let row = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map_or(0, |line| line.chars().count());
    (row, col)
}

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Min(3),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    render_comments(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("Esc: Quit | "),
        Span::raw("Ctrl-S: Send | "),
        Span::raw("↑/↓: Pick | "),
        Span::raw("Tab: Insert mention"),
    ]);
    f.render_widget(Paragraph::new(vec![help_text]), chunks[2]);

    render_popup(f, app, chunks[1]);
}

fn render_comments(f: &mut Frame, app: &App, area: Rect) {
    let part_types = app.session().part_types();
    let items: Vec<ListItem> = app
        .comments()
        .iter()
        .map(|comment| {
            let parsed = parse_value(comment, part_types);
            ListItem::new(styled_lines(&parsed.parts))
        })
        .collect();

    let comments = List::new(items).block(Block::default().borders(Borders::ALL).title("Comments"));
    f.render_widget(comments, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let parsed = session.parsed();
    let input = Paragraph::new(styled_lines(&parsed.parts))
        .block(Block::default().borders(Borders::ALL).title("New comment"))
        .wrap(Wrap { trim: false });
    f.render_widget(input, area);

    let (row, col) = caret_row_col(&parsed.plain_text, session.selection().end);
    let x = area.x + 1 + u16::try_from(col).unwrap_or(u16::MAX);
    let y = area.y + 1 + u16::try_from(row).unwrap_or(u16::MAX);
    f.set_cursor_position(CursorPosition::new(
        x.min(area.right().saturating_sub(2)),
        y.min(area.bottom().saturating_sub(2)),
    ));
}

fn render_popup(f: &mut Frame, app: &App, input_area: Rect) {
    let Some(query) = app.query() else {
        return;
    };
    let matches = app.matches();
    if matches.is_empty() {
        return;
    }

    let height = POPUP_HEIGHT.min(input_area.y);
    let area = Rect {
        x: input_area.x + 2,
        y: input_area.y.saturating_sub(height),
        width: input_area.width.saturating_sub(4).min(40),
        height,
    };

    let items: Vec<ListItem> = matches
        .iter()
        .map(|s| ListItem::new(Line::from(s.name.clone())))
        .collect();
    let title = format!("{}{}", query.trigger, query.keyword);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentionkit_engine::MentionPartType;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_style_maps_color_and_bold() {
        let style = text_style(&TextStyle {
            color: Some("cyan".to_string()),
            bold: true,
        });
        assert_eq!(style, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        assert_eq!(
            text_style(&TextStyle {
                color: Some("no-such-color".to_string()),
                bold: false,
            }),
            Style::default()
        );
    }

    #[test]
    fn styled_lines_split_on_newlines() {
        let types = vec![PartType::Mention(MentionPartType::new('@').with_style(
            TextStyle {
                color: Some("blue".to_string()),
                bold: false,
            },
        ))];
        let parsed = parse_value("hi @[Ann](1)\nbye", &types);
        let lines = styled_lines(&parsed.parts);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[0].spans[1].content, "@Ann");
        assert_eq!(lines[0].spans[1].style, Style::default().fg(Color::Blue));
        assert_eq!(lines[1].spans[0].content, "bye");
    }

    #[test]
    fn caret_position_counts_chars() {
        assert_eq!(caret_row_col("", 0), (0, 0));
        assert_eq!(caret_row_col("héllo", 3), (0, 3));
        assert_eq!(caret_row_col("ab\ncd", 3), (1, 0));
        assert_eq!(caret_row_col("ab\ncd", 5), (1, 2));
    }
}
