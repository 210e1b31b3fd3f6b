//! Quiz Agent
//!
//! Asks the model for five multiple-choice questions as a JSON array and
//! validates the reply. A reply that does not parse, or that breaks the
//! question shape, is replaced by a single fixed fallback question; the parse
//! failure never reaches the client.

use tracing::{info, warn};

use super::JSON_ONLY_SYSTEM_PROMPT;
use crate::config::LLMConfig;
use crate::llm::LLM;
use crate::models::QuizQuestion;
use crate::types::AppResult;

const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, thiserror::Error)]
pub enum QuizParseError {
    #[error("invalid quiz JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("quiz contains no questions")]
    Empty,

    #[error("question {index} has answer index {answer}, expected 0, 1 or 2")]
    AnswerOutOfRange { index: usize, answer: u8 },
}

pub struct QuizAgent;

impl QuizAgent {
    pub async fn generate(llm: &LLM, config: &LLMConfig, context_text: &str) -> AppResult<Vec<QuizQuestion>> {
        info!(context_len = context_text.len(), model = %config.chat_model, "Generating quiz");

        let prompt = Self::create_quiz_prompt(context_text);
        let raw = llm
            .complete(
                &config.chat_model,
                JSON_ONLY_SYSTEM_PROMPT,
                &prompt,
                MAX_TOKENS,
                Some(TEMPERATURE),
            )
            .await?;

        let quiz = match Self::parse_quiz(&raw) {
            Ok(questions) => {
                info!(question_count = questions.len(), "Quiz generated");
                questions
            }
            Err(e) => {
                warn!(error = %e, "Quiz JSON parse failed, returning fallback");
                Self::fallback_quiz()
            }
        };

        Ok(quiz)
    }

    pub fn create_quiz_prompt(context_text: &str) -> String {
        format!(
            r#"
Create 5 multiple-choice questions strictly based on the following notes.
Each question should have exactly 3 options, with the correct answer index as 0, 1, or 2.
Return ONLY a valid JSON array like this:
[
  {{ "q": "Question?", "options": ["opt1", "opt2", "opt3"], "answer": 1 }}
]

Notes:
{}
"#,
            context_text
        )
    }

    /// Parse the model's reply into questions.
    ///
    /// Surrounding whitespace and a Markdown code fence are tolerated. Each
    /// entry must have exactly three options and an answer in `0..=2`; the
    /// number of questions is not enforced beyond being non-empty.
    pub fn parse_quiz(raw: &str) -> Result<Vec<QuizQuestion>, QuizParseError> {
        let body = strip_code_fence(raw.trim());
        let questions: Vec<QuizQuestion> = serde_json::from_str(body)?;

        if questions.is_empty() {
            return Err(QuizParseError::Empty);
        }

        if let Some((index, q)) = questions.iter().enumerate().find(|(_, q)| q.answer > 2) {
            return Err(QuizParseError::AnswerOutOfRange { index, answer: q.answer });
        }

        Ok(questions)
    }

    pub fn fallback_quiz() -> Vec<QuizQuestion> {
        vec![QuizQuestion {
            q: "Could not generate questions from notes.".to_string(),
            options: [
                "Try again".to_string(),
                "Upload shorter notes".to_string(),
                "Contact support".to_string(),
            ],
            answer: 0,
        }]
    }
}

/// "```json\n[...]\n```" -> "[...]"
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
