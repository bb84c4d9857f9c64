use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// Constructed through [`Question::new`], which enforces that the answer is one
/// of the four options. The text may carry simple inline markup from the
/// generator; it is rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    answer: String,
}

impl Question {
    /// Builds a question, returning `None` when the answer is not one of the
    /// options or the text is blank.
    pub fn new(text: String, options: [String; 4], answer: String) -> Option<Self> {
        if text.trim().is_empty() || !options.contains(&answer) {
            return None;
        }
        Some(Self {
            text,
            options,
            answer,
        })
    }

    /// Index of the correct option.
    pub fn correct_index(&self) -> usize {
        // The constructor guarantees membership.
        self.options
            .iter()
            .position(|o| *o == self.answer)
            .unwrap_or(0)
    }

    /// Whether the option at `index` is the correct one.
    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| *o == self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> [String; 4] {
        ["2".into(), "3".into(), "4".into(), "5".into()]
    }

    #[test]
    fn test_new_accepts_answer_in_options() {
        let q = Question::new("1 + 1 = ?".into(), options(), "2".into()).unwrap();
        assert_eq!(q.correct_index(), 0);
        assert!(q.is_correct(0));
        assert!(!q.is_correct(1));
    }

    #[test]
    fn test_new_rejects_answer_outside_options() {
        assert!(Question::new("1 + 1 = ?".into(), options(), "6".into()).is_none());
    }

    #[test]
    fn test_new_rejects_blank_text() {
        assert!(Question::new("   ".into(), options(), "2".into()).is_none());
    }

    #[test]
    fn test_is_correct_out_of_range() {
        let q = Question::new("1 + 1 = ?".into(), options(), "2".into()).unwrap();
        assert!(!q.is_correct(4));
    }
}
