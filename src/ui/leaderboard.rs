//! Leaderboard screen: every recorded score, best first.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::store::Store;

pub fn render<S: Store>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new(Span::styled(
        "LEADERBOARD",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    render_entries(frame, chunks[1], app);
    render_controls(frame, chunks[2]);
}

fn render_entries<S: Store>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let lines: Vec<Line> = if app.board.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No scores yet. Play a quiz!",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        app.board
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let rank = index + 1;
                let rank_style = match rank {
                    1 => Style::default().fg(Color::Yellow).bold(),
                    2 => Style::default().fg(Color::White),
                    3 => Style::default().fg(Color::LightRed),
                    _ => Style::default().fg(Color::DarkGray),
                };

                Line::from(vec![
                    Span::styled(format!(" {:>3}. ", rank), rank_style),
                    Span::styled(
                        format!("{:<22}", entry.name),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("{:>6}", entry.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::horizontal(1)),
        )
        .scroll((app.board_scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  enter/esc home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
