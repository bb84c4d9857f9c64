//! Home screen: nickname, grade and subject form, plus the loading state
//! while questions are being generated.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, HomeFocus};
use crate::store::Store;

const LOADING_MESSAGES: [&str; 5] = [
    "Consulting the AI professor...",
    "Crafting challenging questions...",
    "Shuffling the options...",
    "Warming up the thinking circuits...",
    "Almost ready to test your knowledge!",
];

pub fn render<S: Store>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(18),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZQUEST",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Test your knowledge with AI-generated quizzes".fg(Color::DarkGray)),
        Line::from(""),
    ];

    if let Some(banner) = &app.banner {
        content.push(Line::from(Span::styled(
            banner.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }
    content.push(Line::from(""));

    content.push(field_line(
        "Nickname",
        &format!("{}_", app.form.nickname),
        app.form.focus == HomeFocus::Nickname,
    ));
    content.push(Line::from(""));
    content.push(field_line(
        "Grade",
        &format!("< {} >", app.form.grade()),
        app.form.focus == HomeFocus::Grade,
    ));
    content.push(Line::from(""));
    content.push(field_line(
        "Subject",
        &format!("< {} >", app.form.subject()),
        app.form.focus == HomeFocus::Subject,
    ));
    content.push(Line::from(""));
    content.push(field_line(
        "",
        "[ View Leaderboard ]",
        app.form.focus == HomeFocus::LeaderboardButton,
    ));
    content.push(Line::from(""));

    if let Some(err) = &app.form.error {
        content.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }
    content.push(Line::from(""));

    if app.loading {
        let message = LOADING_MESSAGES[app.loading_frame % LOADING_MESSAGES.len()];
        content.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Yellow),
        )));
    } else {
        content.push(Line::from(Span::styled(
            "tab/↑↓ fields  ·  ←/→ change  ·  enter start  ·  esc quit",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let style = if focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if focused { ">" } else { " " };

    if label.is_empty() {
        return Line::from(Span::styled(format!("{} {}", marker, value), style));
    }

    Line::from(vec![
        Span::styled(format!("{} {}: ", marker, label), style),
        Span::styled(value.to_string(), style),
    ])
}
