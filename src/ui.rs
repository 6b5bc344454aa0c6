//! View - draws the render state with ratatui

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::RenderState;
use crate::models::{Control, FetchStatus};

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_content(f, state, main_chunks[0]);
    draw_status_bar(f, state, main_chunks[1]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_content(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", APP_NAME))
        .title_bottom(Line::from(format!(" {} ", state.source)).right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(1), // Count
            Constraint::Min(3),    // Payload
            Constraint::Length(3), // Controls
        ])
        .split(inner);

    f.render_widget(Paragraph::new(state.label.as_str()).bold(), chunks[0]);

    let count = Line::from(vec![
        Span::raw("Count: "),
        Span::styled(state.count.to_string(), Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(count), chunks[1]);

    draw_payload(f, state, chunks[2]);
    draw_controls(f, state, chunks[3]);
}

fn draw_payload(f: &mut Frame, state: &RenderState, area: Rect) {
    let target = state.target.as_deref().unwrap_or("no target");
    let loading = if state.status.is_loading() { " [...]" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {}{} ", target, loading));

    let payload = Paragraph::new(highlight_json(&state.payload))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(payload, area);
}

fn draw_controls(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut constraints = Vec::new();
    for control in Control::ALL {
        constraints.push(Constraint::Length(control.label().len() as u16 + 4));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, control) in Control::ALL.iter().enumerate() {
        let selected = state.target.as_deref() == Some(control.target());
        let border_style = if *control == state.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = if selected {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default()
        };

        let button = Paragraph::new(Span::styled(control.label(), label_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        f.render_widget(button, cells[i * 2]);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (text, color) = status_text(state);
    let line = Line::from(vec![
        Span::styled(text, Style::default().fg(color)),
        Span::styled(
            "  j/s:jack/sally | Tab:focus | Enter:activate | c:clear | ?:help | q:quit ",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// One-line summary of the fetch status
pub fn status_text(state: &RenderState) -> (String, Color) {
    match &state.status {
        FetchStatus::Idle => (String::from(" idle"), Color::DarkGray),
        FetchStatus::Loading { target } => (format!(" loading {}...", target), Color::Yellow),
        FetchStatus::Loaded => {
            let at = state.updated_at.as_deref().unwrap_or("-");
            (
                format!(" updated {} ({}ms, {} ok)", at, state.time_ms, state.successes),
                Color::Green,
            )
        }
        FetchStatus::Failed(error) => (format!(" {}", error), Color::Red),
    }
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 Keyboard Shortcuts

   j             Fetch /jack.json
   s             Fetch /sally.json
   Tab / ←→      Move focus between buttons
   Enter/Space   Activate focused button
   c             Clear the target
   ?             Toggle this help
   q / Esc       Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

/// Color a compact JSON dump: keys cyan, strings green, numbers yellow,
/// literals magenta
pub fn highlight_json(text: &str) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(chars.len());
                let token: String = chars[start..i].iter().collect();

                let is_key = chars[i..].iter().find(|c| !c.is_whitespace()) == Some(&':');
                let color = if is_key { Color::Cyan } else { Color::Green };
                spans.push(Span::styled(token, Style::default().fg(color)));
            }
            '{' | '}' | '[' | ']' => {
                spans.push(Span::styled(c.to_string(), Style::default().fg(Color::Yellow)));
                i += 1;
            }
            '-' | '0'..='9' => {
                let start = i;
                while i < chars.len() && matches!(chars[i], '-' | '+' | '.' | 'e' | 'E' | '0'..='9') {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                spans.push(Span::styled(token, Style::default().fg(Color::Yellow)));
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                spans.push(Span::styled(token, Style::default().fg(Color::Magenta)));
            }
            _ => {
                spans.push(Span::raw(c.to_string()));
                i += 1;
            }
        }
    }

    Line::from(spans)
}
