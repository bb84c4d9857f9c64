//! Question generation over a Gemini-style `generateContent` REST endpoint.
//!
//! The adapter asks for a JSON array of `{question, options, answer}` records,
//! drops any record that fails validation, and fails only when nothing usable
//! remains. No automatic retry; retrying is a user action on the home screen.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::models::Question;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Error type for question generation. Whatever the cause, the home screen
/// shows one banner; the detail goes to the log.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to the question generator failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("the question generator returned no text")]
    EmptyResponse,

    #[error("the question generator returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("the question generator produced no usable questions")]
    EmptyGeneration,
}

impl ProviderError {
    /// The single message shown to the player for any generation failure.
    pub fn user_message() -> &'static str {
        "Failed to generate a quiz. Please try again."
    }
}

/// A candidate record as generated, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Client for the external question generator.
#[derive(Clone)]
pub struct QuestionProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    count: usize,
}

impl QuestionProvider {
    pub fn new(api_key: String, model: String, count: usize) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
            count,
        }
    }

    /// Points the provider at a different endpoint (tests, proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Generates up to `count` validated questions for the given grade and
    /// subject.
    pub async fn fetch(&self, grade: &str, subject: &str) -> Result<Vec<Question>, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let body = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(grade, subject, self.count) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.8
            }
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .filter(|t| !t.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        let raw: Vec<RawQuestion> = serde_json::from_str(strip_code_fences(&text))?;
        let questions = validate_questions(raw, self.count);

        if questions.is_empty() {
            tracing::error!(grade, subject, "generation produced no valid questions");
            return Err(ProviderError::EmptyGeneration);
        }

        tracing::info!(grade, subject, count = questions.len(), "questions generated");
        Ok(questions)
    }
}

fn build_prompt(grade: &str, subject: &str, count: usize) -> String {
    format!(
        "You are an expert quiz creator for students. Generate {count} multiple-choice \
         questions for a student in '{grade}' on the subject of '{subject}'.\n\
         Each question must have exactly 4 options and a single correct answer taken \
         from the options.\n\
         Ensure the questions are challenging but appropriate for the grade level.\n\
         Respond with a JSON array of objects with keys \"question\", \"options\" and \
         \"answer\". Do not include any text, markdown, or explanation outside the \
         JSON array."
    )
}

/// Keeps the records that form a well-shaped question, up to `count`.
/// Invalid records are dropped silently rather than failing the batch.
fn validate_questions(raw: Vec<RawQuestion>, count: usize) -> Vec<Question> {
    raw.into_iter()
        .filter_map(|r| {
            let text = r.question?;
            let options: [String; 4] = r.options?.try_into().ok()?;
            Question::new(text, options, r.answer?)
        })
        .take(count)
        .collect()
}

/// Models sometimes wrap the payload in a Markdown code fence despite the JSON
/// mime type; unwrap it before parsing.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(question: &str, options: &[&str], answer: &str) -> RawQuestion {
        RawQuestion {
            question: Some(question.to_string()),
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            answer: Some(answer.to_string()),
        }
    }

    #[test]
    fn test_valid_records_pass_the_filter() {
        let questions = validate_questions(
            vec![raw("1 + 1 = ?", &["1", "2", "3", "4"], "2")],
            10,
        );
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_index(), 1);
    }

    #[test]
    fn test_invalid_records_are_dropped_not_fatal() {
        let missing_text = RawQuestion {
            question: None,
            options: Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
            answer: Some("a".into()),
        };
        let three_options = raw("pick one", &["a", "b", "c"], "a");
        let answer_not_in_options = raw("pick one", &["a", "b", "c", "d"], "e");
        let missing_answer = RawQuestion {
            question: Some("pick one".into()),
            options: Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
            answer: None,
        };
        let good = raw("pick one", &["a", "b", "c", "d"], "c");

        let questions = validate_questions(
            vec![
                missing_text,
                three_options,
                answer_not_in_options,
                missing_answer,
                good,
            ],
            10,
        );
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_index(), 2);
    }

    #[test]
    fn test_result_is_truncated_to_requested_count() {
        let records: Vec<RawQuestion> = (0..8)
            .map(|i| raw(&format!("q{}", i), &["a", "b", "c", "d"], "a"))
            .collect();
        assert_eq!(validate_questions(records, 5).len(), 5);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("[1]"), "[1]");
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("  [1]  "), "[1]");
    }

    #[test]
    fn test_raw_question_tolerates_missing_fields() {
        let raw: Vec<RawQuestion> =
            serde_json::from_str(r#"[{"question": "q"}, {"options": ["a","b","c","d"]}]"#).unwrap();
        assert!(validate_questions(raw, 10).is_empty());
    }

    #[test]
    fn test_build_prompt_mentions_grade_subject_and_count() {
        let prompt = build_prompt("Grade 5", "Science", 10);
        assert!(prompt.contains("Grade 5"));
        assert!(prompt.contains("Science"));
        assert!(prompt.contains("10 multiple-choice"));
    }
}
