//! Quiz screen: countdown gauge, question, options, and the post-answer
//! reveal coloring.

use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::session::{QUESTION_TIME_LIMIT, QuizSession};
use crate::store::Store;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render<S: Store>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let Some(session) = &app.session else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], session);
    render_timer(frame, chunks[1], session);
    render_question_text(frame, chunks[3], &session.current_question().text);
    render_options(frame, chunks[4], session, app.option_cursor);
    render_controls(frame, chunks[5], session);
}

fn render_header(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let chunks =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let progress = format!(
        "Question {}/{}",
        session.question_number(),
        session.total_questions()
    );
    frame.render_widget(Paragraph::new(progress).fg(Color::DarkGray), chunks[0]);

    let score = format!("Score: {}", session.score());
    let widget = Paragraph::new(score)
        .alignment(Alignment::Right)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, chunks[1]);
}

fn render_timer(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let remaining = session.time_remaining();
    let color = match remaining {
        0..=5 => Color::Red,
        6..=10 => Color::Yellow,
        _ => Color::Cyan,
    };

    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio(f64::from(remaining) / f64::from(QUESTION_TIME_LIMIT))
        .label(format!("{}s", remaining));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession, cursor: usize) {
    let question = session.current_question();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let (marker, style) = option_style(session, index, cursor);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Before the answer: a plain cursor. After: green for the correct option,
/// red for a wrong pick, everything else dimmed.
fn option_style(session: &QuizSession, index: usize, cursor: usize) -> (&'static str, Style) {
    if !session.is_answered() {
        return if index == cursor {
            (">", Style::default().fg(Color::Cyan).bold())
        } else {
            (" ", Style::default().fg(Color::Gray))
        };
    }

    let correct = session.current_question().correct_index();
    if index == correct {
        ("+", Style::default().fg(Color::Green).bold())
    } else if session.selected_option() == Some(index) {
        ("-", Style::default().fg(Color::Red).bold())
    } else {
        (" ", Style::default().fg(Color::DarkGray))
    }
}

fn render_controls(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let text = if session.is_answered() {
        if session.selected_option().is_none() {
            "Time's up!"
        } else {
            ""
        }
    } else {
        "j/k navigate  ·  enter answer  ·  esc leave quiz"
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
