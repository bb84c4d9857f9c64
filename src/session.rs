//! The quiz session engine: one question at a time, a countdown, an answer
//! lock, and speed-weighted scoring.
//!
//! The engine is a pure state machine. The event loop owns wall-clock time and
//! drives it through [`QuizSession::tick`] (once per elapsed second) and
//! [`QuizSession::advance`] (after the reveal delay).

use thiserror::Error;

use crate::models::Question;

/// Seconds on the clock for each question.
pub const QUESTION_TIME_LIMIT: u32 = 15;

/// Points for a correct answer before the speed bonus.
pub const BASE_POINTS: u32 = 2;

/// How long the correct/incorrect reveal stays on screen before the next
/// question, in milliseconds.
pub const REVEAL_DELAY_MS: u64 = 1500;

/// Error starting a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The caller handed us nothing to ask. A zero-question quiz is a bug
    /// upstream, not an instant win.
    #[error("cannot start a quiz with no questions")]
    NoQuestions,
}

/// Notification seam for answer feedback. The original design played sounds
/// here; those are intentionally removed, but the hook stays so a frontend can
/// reattach effects without touching the engine.
pub trait FeedbackHook {
    fn correct(&mut self) {}
    fn incorrect(&mut self) {}
}

/// Default hook: does nothing.
pub struct SilentFeedback;

impl FeedbackHook for SilentFeedback {}

/// Per-question phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Counting down, exactly one answer accepted.
    Active,
    /// Locked by an answer or by the timer hitting zero. `None` = timeout.
    Answered { selected: Option<usize> },
}

/// What [`QuizSession::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next question; timer reset.
    Next,
    /// Past the last question: the session is over with this final score.
    Complete { score: u32 },
}

/// State for a single run through a fixed question list.
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    time_remaining: u32,
    phase: Phase,
    feedback: Box<dyn FeedbackHook>,
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.questions)
            .field("current_index", &self.current_index)
            .field("score", &self.score)
            .field("time_remaining", &self.time_remaining)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl QuizSession {
    /// Starts a session at question 0, score 0, full clock.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        Self::with_feedback(questions, Box::new(SilentFeedback))
    }

    /// Starts a session with a custom feedback hook.
    pub fn with_feedback(
        questions: Vec<Question>,
        feedback: Box<dyn FeedbackHook>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            time_remaining: QUESTION_TIME_LIMIT,
            phase: Phase::Active,
            feedback,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// 1-based, for display.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.phase, Phase::Answered { .. })
    }

    /// The submitted option for the current question, if any. `None` while
    /// active and after a timeout.
    pub fn selected_option(&self) -> Option<usize> {
        match self.phase {
            Phase::Active => None,
            Phase::Answered { selected } => selected,
        }
    }

    /// Submits an answer for the current question.
    ///
    /// No-op when the question is already answered: a double press or a press
    /// racing the timeout must not score twice. A correct answer awards
    /// `BASE_POINTS + time_remaining`; anything else awards nothing.
    pub fn submit_answer(&mut self, option: usize) {
        if self.is_answered() {
            return;
        }

        self.phase = Phase::Answered {
            selected: Some(option),
        };

        if self.current_question().is_correct(option) {
            self.score += BASE_POINTS + self.time_remaining;
            self.feedback.correct();
        } else {
            self.feedback.incorrect();
        }
    }

    /// Advances the countdown by one second. Call once per elapsed second
    /// while active; no-op once answered. Reaching zero locks the question as
    /// a timeout (scores nothing).
    pub fn tick(&mut self) {
        if self.is_answered() {
            return;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.phase = Phase::Answered { selected: None };
            self.feedback.incorrect();
        }
    }

    /// Moves to the next question, or reports completion after the last one.
    /// Only meaningful once the current question is answered; the caller
    /// waits out the reveal delay first.
    pub fn advance(&mut self) -> Advance {
        debug_assert!(self.is_answered(), "advance called while still active");

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.time_remaining = QUESTION_TIME_LIMIT;
            self.phase = Phase::Active;
            Advance::Next
        } else {
            Advance::Complete { score: self.score }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(n: usize) -> Question {
        Question::new(
            format!("Question {}", n),
            ["a".into(), "b".into(), "c".into(), "d".into()],
            "a".into(),
        )
        .unwrap()
    }

    fn session(count: usize) -> QuizSession {
        QuizSession::new((0..count).map(question).collect()).unwrap()
    }

    #[test]
    fn test_empty_question_list_is_rejected() {
        assert_eq!(
            QuizSession::new(Vec::new()).unwrap_err(),
            SessionError::NoQuestions
        );
    }

    #[test]
    fn test_initial_state() {
        let s = session(3);
        assert_eq!(s.question_number(), 1);
        assert_eq!(s.score(), 0);
        assert_eq!(s.time_remaining(), QUESTION_TIME_LIMIT);
        assert!(!s.is_answered());
    }

    #[test]
    fn test_correct_answer_awards_base_plus_time_left() {
        let mut s = session(1);
        for _ in 0..5 {
            s.tick();
        }
        assert_eq!(s.time_remaining(), 10);
        s.submit_answer(0);
        assert_eq!(s.score(), BASE_POINTS + 10);
    }

    #[test]
    fn test_wrong_answer_awards_nothing() {
        let mut s = session(1);
        s.submit_answer(2);
        assert_eq!(s.score(), 0);
        assert!(s.is_answered());
        assert_eq!(s.selected_option(), Some(2));
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut s = session(1);
        s.submit_answer(0);
        let score = s.score();
        s.submit_answer(0);
        s.submit_answer(1);
        assert_eq!(s.score(), score);
        assert_eq!(s.selected_option(), Some(0));
    }

    #[test]
    fn test_timeout_locks_with_no_selection() {
        let mut s = session(1);
        for _ in 0..QUESTION_TIME_LIMIT {
            s.tick();
        }
        assert!(s.is_answered());
        assert_eq!(s.selected_option(), None);
        assert_eq!(s.score(), 0);

        // Submission after timeout loses the race.
        s.submit_answer(0);
        assert_eq!(s.score(), 0);
        assert_eq!(s.selected_option(), None);
    }

    #[test]
    fn test_tick_after_answer_is_a_noop() {
        let mut s = session(1);
        s.submit_answer(0);
        let remaining = s.time_remaining();
        s.tick();
        s.tick();
        assert_eq!(s.time_remaining(), remaining);
    }

    #[test]
    fn test_advance_resets_timer_and_lock() {
        let mut s = session(2);
        for _ in 0..4 {
            s.tick();
        }
        s.submit_answer(0);
        assert_eq!(s.advance(), Advance::Next);
        assert_eq!(s.question_number(), 2);
        assert_eq!(s.time_remaining(), QUESTION_TIME_LIMIT);
        assert!(!s.is_answered());
    }

    #[test]
    fn test_advance_past_last_question_completes_with_score() {
        let mut s = session(2);
        s.submit_answer(0); // 2 + 15
        s.advance();
        s.submit_answer(3); // wrong
        assert_eq!(
            s.advance(),
            Advance::Complete {
                score: BASE_POINTS + QUESTION_TIME_LIMIT
            }
        );
    }

    #[test]
    fn test_all_correct_with_five_seconds_left_scores_thirty_five() {
        let mut s = session(5);
        for i in 0..5 {
            for _ in 0..10 {
                s.tick();
            }
            assert_eq!(s.time_remaining(), 5);
            s.submit_answer(0);
            if i < 4 {
                assert_eq!(s.advance(), Advance::Next);
            }
        }
        assert_eq!(s.advance(), Advance::Complete { score: 35 });
    }

    #[test]
    fn test_feedback_hook_fires_per_outcome() {
        #[derive(Default)]
        struct Counter {
            correct: usize,
            incorrect: usize,
        }

        struct CountingHook(std::rc::Rc<std::cell::RefCell<Counter>>);

        impl FeedbackHook for CountingHook {
            fn correct(&mut self) {
                self.0.borrow_mut().correct += 1;
            }
            fn incorrect(&mut self) {
                self.0.borrow_mut().incorrect += 1;
            }
        }

        let counter = std::rc::Rc::new(std::cell::RefCell::new(Counter::default()));
        let questions: Vec<Question> = (0..3).map(question).collect();
        let mut s =
            QuizSession::with_feedback(questions, Box::new(CountingHook(counter.clone()))).unwrap();

        s.submit_answer(0); // correct
        s.advance();
        s.submit_answer(1); // incorrect
        s.advance();
        for _ in 0..QUESTION_TIME_LIMIT {
            s.tick(); // timeout
        }

        assert_eq!(counter.borrow().correct, 1);
        assert_eq!(counter.borrow().incorrect, 2);
    }
}
