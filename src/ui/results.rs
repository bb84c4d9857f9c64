//! Results screen: final score and the exits back to the rest of the app.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::store::Store;

pub fn render<S: Store>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);

    let nickname = app
        .settings
        .as_ref()
        .map(|s| s.nickname.as_str())
        .unwrap_or("player");

    let score_color = if app.final_score > 0 {
        Color::Green
    } else {
        Color::Red
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(format!("Well played, {}!", nickname).fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} points", app.final_score),
            Style::default().fg(score_color).bold(),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "enter play again  ·  l leaderboard  ·  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
