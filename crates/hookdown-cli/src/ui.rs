use hookdown_engine::{
    Inline, MESSAGE_CHAR_LIMIT, RenderOptions, Segment, char_count, exceeds_limit,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[0]);

    let title = if app.dirty { "Draft *" } else { "Draft" };
    let editor = Paragraph::new(editor_lines(&app.content, app.cursor, app.selection()))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(editor, panes[0]);

    let preview = Paragraph::new(preview_lines(&app.segments(), &app.render_options))
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, panes[1]);

    let status = Paragraph::new(vec![status_line(app)]).block(Block::default());
    f.render_widget(status, rows[1]);
}

/// The raw draft with the caret drawn reversed and the selection highlighted.
pub fn editor_lines(content: &str, cursor: usize, selection: (usize, usize)) -> Vec<Line<'static>> {
    let caret = Style::default().add_modifier(Modifier::REVERSED);
    let selected = Style::default().bg(Color::Blue).fg(Color::White);

    let mut lines = Vec::new();
    let mut spans = Vec::new();
    for (i, ch) in content.char_indices() {
        let style = if i == cursor {
            caret
        } else if selection.0 <= i && i < selection.1 {
            selected
        } else {
            Style::default()
        };

        if ch == '\n' {
            // caret sitting on a line break shows at the end of the line
            if i == cursor {
                spans.push(Span::styled(" ", caret));
            }
            lines.push(Line::from(std::mem::take(&mut spans)));
        } else {
            spans.push(Span::styled(ch.to_string(), style));
        }
    }
    if cursor >= content.len() {
        spans.push(Span::styled(" ", caret));
    }
    lines.push(Line::from(spans));
    lines
}

/// Terminal rendition of parsed segments: styles applied, delimiters gone,
/// mentions resolved, list markers replaced by the bullet.
pub fn preview_lines(segments: &[Segment], opts: &RenderOptions) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    push_segments(segments, opts, &mut lines, &mut spans);
    lines.push(Line::from(spans));
    lines
}

fn push_segments(
    segments: &[Segment],
    opts: &RenderOptions,
    lines: &mut Vec<Line<'static>>,
    spans: &mut Vec<Span<'static>>,
) {
    for segment in segments {
        match segment {
            Segment::Text { text, .. } => spans.push(Span::raw(text.clone())),
            Segment::Styled { node, .. } => spans.push(styled_span(node)),
            Segment::LineBreak { .. } => lines.push(Line::from(std::mem::take(spans))),
            Segment::ListItem { depth, content, .. } => {
                spans.push(Span::raw(format!("{}{} ", " ".repeat(*depth), opts.bullet)));
                push_segments(content, opts, lines, spans);
            }
        }
    }
}

fn styled_span(node: &Inline) -> Span<'static> {
    let base = Style::default();
    let (text, style) = match node {
        Inline::Bold { text } => (text.clone(), base.add_modifier(Modifier::BOLD)),
        Inline::Italic { text } => (text.clone(), base.add_modifier(Modifier::ITALIC)),
        Inline::BoldItalic { text } => (
            text.clone(),
            base.add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
        Inline::Underline { text } => (text.clone(), base.add_modifier(Modifier::UNDERLINED)),
        Inline::Strikethrough { text } => {
            (text.clone(), base.add_modifier(Modifier::CROSSED_OUT))
        }
        Inline::Code { text } => (text.clone(), base.fg(Color::Yellow).bg(Color::DarkGray)),
        Inline::Spoiler { text } => (
            "█".repeat(text.chars().count()),
            base.fg(Color::DarkGray),
        ),
        Inline::Link { label, .. } => (
            label.clone(),
            base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        ),
        mention => (
            mention.display_text(),
            base.fg(Color::LightBlue).bg(Color::Indexed(236)),
        ),
    };
    Span::styled(text, style)
}

fn status_line(app: &App) -> Line<'static> {
    let count = char_count(&app.content);
    let count_style = if exceeds_limit(&app.content) {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(format!("{count}/{MESSAGE_CHAR_LIMIT}"), count_style),
        Span::raw(format!(" | {} | ", app.draft_path.display())),
    ];
    if let Some(status) = &app.status {
        spans.push(Span::raw(format!("{status} | ")));
    }
    spans.push(Span::raw(
        "Alt+b/i/u/s/c/k/p: Style | Shift+←→: Select | Ctrl+S: Save | Esc: Quit",
    ));
    Line::from(spans)
}
