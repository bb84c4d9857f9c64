//! Top-level application state: which screen is showing and how data moves
//! between screens.
//!
//! Home is both the starting screen and the recovery screen; every failure
//! path lands back there with a banner rather than stranding the player.

use crate::models::{GRADES, LeaderboardEntry, Question, QuizSettings, SUBJECTS, validate_nickname};
use crate::leaderboard;
use crate::provider::ProviderError;
use crate::session::{Advance, QuizSession};
use crate::store::{Store, save_nickname, saved_nickname};

/// Which screen is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Home,
    Quiz,
    Results,
    Leaderboard,
}

/// Focused element on the home screen form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Nickname,
    Grade,
    Subject,
    LeaderboardButton,
}

/// Home screen form state.
pub struct HomeForm {
    pub nickname: String,
    pub grade_index: usize,
    pub subject_index: usize,
    pub focus: HomeFocus,
    /// Local validation error (empty nickname). Blocks submission; never
    /// reaches the engine.
    pub error: Option<String>,
}

impl HomeForm {
    fn new(nickname: String) -> Self {
        Self {
            nickname,
            grade_index: 0,
            subject_index: 0,
            focus: HomeFocus::Nickname,
            error: None,
        }
    }

    pub fn grade(&self) -> &'static str {
        GRADES[self.grade_index]
    }

    pub fn subject(&self) -> &'static str {
        SUBJECTS[self.subject_index]
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            HomeFocus::Nickname => HomeFocus::Grade,
            HomeFocus::Grade => HomeFocus::Subject,
            HomeFocus::Subject => HomeFocus::LeaderboardButton,
            HomeFocus::LeaderboardButton => HomeFocus::Nickname,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            HomeFocus::Nickname => HomeFocus::LeaderboardButton,
            HomeFocus::Grade => HomeFocus::Nickname,
            HomeFocus::Subject => HomeFocus::Grade,
            HomeFocus::LeaderboardButton => HomeFocus::Subject,
        };
    }

    pub fn nickname_push(&mut self, c: char) {
        if self.nickname.chars().count() < crate::models::NICKNAME_MAX_LENGTH {
            self.nickname.push(c);
        }
        self.error = None;
    }

    pub fn nickname_pop(&mut self) {
        self.nickname.pop();
        self.error = None;
    }

    pub fn select_left(&mut self) {
        match self.focus {
            HomeFocus::Grade => {
                self.grade_index = (self.grade_index + GRADES.len() - 1) % GRADES.len();
            }
            HomeFocus::Subject => {
                self.subject_index = (self.subject_index + SUBJECTS.len() - 1) % SUBJECTS.len();
            }
            _ => {}
        }
    }

    pub fn select_right(&mut self) {
        match self.focus {
            HomeFocus::Grade => {
                self.grade_index = (self.grade_index + 1) % GRADES.len();
            }
            HomeFocus::Subject => {
                self.subject_index = (self.subject_index + 1) % SUBJECTS.len();
            }
            _ => {}
        }
    }
}

/// The screen controller. Owns the store, the active session (if any), and
/// everything the renderers read.
pub struct App<S: Store> {
    pub state: GameState,
    pub form: HomeForm,
    /// Generation error banner shown on the home screen.
    pub banner: Option<String>,
    /// True while a fetch is in flight; all input is disabled.
    pub loading: bool,
    /// Drives the rotating loading message.
    pub loading_frame: usize,
    pub session: Option<QuizSession>,
    pub settings: Option<QuizSettings>,
    pub final_score: u32,
    /// UI cursor over the options of the current question.
    pub option_cursor: usize,
    /// Snapshot rendered on the leaderboard screen.
    pub board: Vec<LeaderboardEntry>,
    pub board_scroll: usize,
    pub should_quit: bool,
    store: S,
    fetch_generation: u64,
}

impl<S: Store> App<S> {
    pub fn new(store: S) -> Self {
        let nickname = saved_nickname(&store).unwrap_or_default();
        Self {
            state: GameState::Home,
            form: HomeForm::new(nickname),
            banner: None,
            loading: false,
            loading_frame: 0,
            session: None,
            settings: None,
            final_score: 0,
            option_cursor: 0,
            board: Vec::new(),
            board_scroll: 0,
            should_quit: false,
            store,
            fetch_generation: 0,
        }
    }

    /// Validates the home form and, when it passes, enters the loading state.
    /// Returns the settings plus the fetch generation the caller must echo
    /// back through [`App::apply_fetch_result`].
    pub fn submit_home(&mut self) -> Option<(QuizSettings, u64)> {
        if self.loading {
            return None;
        }

        let nickname = match validate_nickname(&self.form.nickname) {
            Ok(nickname) => nickname,
            Err(msg) => {
                self.form.error = Some(msg.to_string());
                return None;
            }
        };

        save_nickname(&mut self.store, &nickname);

        let settings = QuizSettings {
            nickname,
            grade: self.form.grade().to_string(),
            subject: self.form.subject().to_string(),
        };

        self.form.error = None;
        self.banner = None;
        self.loading = true;
        self.loading_frame = 0;
        self.fetch_generation += 1;
        self.settings = Some(settings.clone());

        Some((settings, self.fetch_generation))
    }

    /// Applies the outcome of a question fetch. A response from a superseded
    /// fetch (the player navigated away or resubmitted) is dropped.
    pub fn apply_fetch_result(
        &mut self,
        generation: u64,
        result: Result<Vec<Question>, ProviderError>,
    ) {
        if generation != self.fetch_generation || !self.loading {
            tracing::debug!(generation, "dropping stale fetch response");
            return;
        }

        self.loading = false;

        let session = match result {
            Ok(questions) => QuizSession::new(questions).map_err(|err| {
                tracing::error!(%err, "provider returned an unusable batch");
            }),
            Err(err) => {
                tracing::error!(%err, "question generation failed");
                Err(())
            }
        };

        match session {
            Ok(session) => {
                self.session = Some(session);
                self.option_cursor = 0;
                self.state = GameState::Quiz;
            }
            Err(()) => {
                self.banner = Some(ProviderError::user_message().to_string());
                self.settings = None;
                self.state = GameState::Home;
            }
        }
    }

    /// One elapsed second of quiz time.
    pub fn tick_session(&mut self) {
        if let Some(session) = &mut self.session {
            session.tick();
        }
    }

    pub fn session_answered(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_answered())
    }

    pub fn submit_answer(&mut self) {
        let cursor = self.option_cursor;
        if let Some(session) = &mut self.session {
            session.submit_answer(cursor);
        }
    }

    pub fn cursor_next(&mut self) {
        self.option_cursor = (self.option_cursor + 1) % 4;
    }

    pub fn cursor_previous(&mut self) {
        self.option_cursor = (self.option_cursor + 3) % 4;
    }

    /// Moves past an answered question: next question or quiz completion.
    pub fn advance_session(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };

        match session.advance() {
            Advance::Next => {
                self.option_cursor = 0;
            }
            Advance::Complete { score } => {
                self.finish_quiz(score);
            }
        }
    }

    fn finish_quiz(&mut self, score: u32) {
        self.final_score = score;
        self.session = None;

        if let Some(settings) = &self.settings {
            leaderboard::record(
                &mut self.store,
                LeaderboardEntry {
                    name: settings.nickname.clone(),
                    score,
                },
            );
        }

        self.state = GameState::Results;
    }

    /// Leaves a running quiz without finishing it. Nothing is recorded.
    pub fn abandon_quiz(&mut self) {
        self.session = None;
        self.settings = None;
        self.state = GameState::Home;
    }

    /// RESULTS -> HOME, dropping all session data.
    pub fn play_again(&mut self) {
        self.session = None;
        self.settings = None;
        self.final_score = 0;
        self.banner = None;
        self.state = GameState::Home;
    }

    pub fn view_leaderboard(&mut self) {
        self.board = leaderboard::list(&self.store);
        self.board_scroll = 0;
        self.state = GameState::Leaderboard;
    }

    pub fn go_home(&mut self) {
        self.state = GameState::Home;
    }

    pub fn scroll_board_down(&mut self) {
        let max_scroll = self.board.len().saturating_sub(1);
        self.board_scroll = (self.board_scroll + 1).min(max_scroll);
    }

    pub fn scroll_board_up(&mut self) {
        self.board_scroll = self.board_scroll.saturating_sub(1);
    }
}
