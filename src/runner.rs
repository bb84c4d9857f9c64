//! The event loop: wires keyboard input, the per-question countdown, the
//! reveal delay, and the background fetch task into the screen controller.
//!
//! Timing discipline: there is exactly one countdown (`last_tick`) and at most
//! one pending reveal deadline at any time; both are reset on every question
//! transition and whenever the quiz screen is left.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

use crate::QuizError;
use crate::app::{App, GameState, HomeFocus};
use crate::models::{Question, QuizSettings};
use crate::provider::{ProviderError, QuestionProvider};
use crate::session::REVEAL_DELAY_MS;
use crate::store::JsonFileStore;
use crate::{terminal, ui};

const INPUT_POLL_MS: u64 = 50;
const LOADING_MESSAGE_ROTATION_MS: u64 = 2000;

type FetchOutcome = (u64, Result<Vec<Question>, ProviderError>);

/// Runs the application until the player quits.
pub async fn run(mut app: App<JsonFileStore>, provider: QuestionProvider) -> Result<(), QuizError> {
    let mut term = terminal::init()?;
    let result = event_loop(&mut term, &mut app, provider).await;
    terminal::restore()?;
    result
}

async fn event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App<JsonFileStore>,
    provider: QuestionProvider,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let mut last_tick = Instant::now();
    let mut last_rotation = Instant::now();
    let mut reveal_deadline: Option<Instant> = None;

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Fetch results from the background task. The generation check inside
        // the app drops anything stale.
        while let Ok((generation, result)) = rx.try_recv() {
            app.apply_fetch_result(generation, result);
            if app.state == GameState::Quiz {
                last_tick = Instant::now();
                reveal_deadline = None;
            }
        }

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // All input is disabled while the fetch is in flight.
                if key.kind == KeyEventKind::Press && !app.loading {
                    handle_input(app, &provider, &tx, key.code);
                }
            }
        }

        if app.loading && last_rotation.elapsed() >= Duration::from_millis(LOADING_MESSAGE_ROTATION_MS)
        {
            app.loading_frame += 1;
            last_rotation = Instant::now();
        }

        if app.state == GameState::Quiz {
            if !app.session_answered() && last_tick.elapsed() >= Duration::from_secs(1) {
                app.tick_session();
                last_tick += Duration::from_secs(1);
            }

            if app.session_answered() {
                match reveal_deadline {
                    None => {
                        reveal_deadline =
                            Some(Instant::now() + Duration::from_millis(REVEAL_DELAY_MS));
                    }
                    Some(deadline) if Instant::now() >= deadline => {
                        reveal_deadline = None;
                        app.advance_session();
                        last_tick = Instant::now();
                    }
                    Some(_) => {}
                }
            }
        } else {
            // Leaving the quiz screen cancels any pending advancement.
            reveal_deadline = None;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_input(
    app: &mut App<JsonFileStore>,
    provider: &QuestionProvider,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    key: KeyCode,
) {
    match app.state {
        GameState::Home => handle_home_input(app, provider, tx, key),
        GameState::Quiz => handle_quiz_input(app, key),
        GameState::Results => handle_results_input(app, key),
        GameState::Leaderboard => handle_leaderboard_input(app, key),
    }
}

fn handle_home_input(
    app: &mut App<JsonFileStore>,
    provider: &QuestionProvider,
    tx: &mpsc::UnboundedSender<FetchOutcome>,
    key: KeyCode,
) {
    let typing = app.form.focus == HomeFocus::Nickname;

    match key {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_previous(),
        KeyCode::Left => app.form.select_left(),
        KeyCode::Right => app.form.select_right(),
        KeyCode::Enter => {
            if app.form.focus == HomeFocus::LeaderboardButton {
                app.view_leaderboard();
            } else if let Some((settings, generation)) = app.submit_home() {
                spawn_fetch(provider.clone(), settings, generation, tx.clone());
            }
        }
        KeyCode::Backspace if typing => app.form.nickname_pop(),
        KeyCode::Char('q') | KeyCode::Char('Q') if !typing => app.should_quit = true,
        KeyCode::Char('l') | KeyCode::Char('L') if !typing => app.view_leaderboard(),
        KeyCode::Char(c) if typing => app.form.nickname_push(c),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App<JsonFileStore>, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Esc => app.abandon_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_results_input(app: &mut App<JsonFileStore>, key: KeyCode) {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => app.play_again(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.view_leaderboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_leaderboard_input(app: &mut App<JsonFileStore>, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_board_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_board_up(),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }
}

fn spawn_fetch(
    provider: QuestionProvider,
    settings: QuizSettings,
    generation: u64,
    tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        let result = provider.fetch(&settings.grade, &settings.subject).await;
        let _ = tx.send((generation, result));
    });
}
