//! Q&A Agent
//!
//! Answers a free-form question against the notes of a stored context.
//! An empty context is allowed: the question is then answered without notes.

use tracing::info;

use super::ASSISTANT_SYSTEM_PROMPT;
use crate::config::LLMConfig;
use crate::llm::LLM;
use crate::types::AppResult;

const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;

pub struct QaAgent;

impl QaAgent {
    pub async fn answer(
        llm: &LLM,
        config: &LLMConfig,
        context_text: &str,
        question: &str,
    ) -> AppResult<String> {
        info!(
            question_len = question.len(),
            context_len = context_text.len(),
            model = %config.chat_model,
            "Answering question"
        );

        let prompt = Self::create_question_prompt(context_text, question);
        let answer = llm
            .complete(
                &config.chat_model,
                ASSISTANT_SYSTEM_PROMPT,
                &prompt,
                MAX_TOKENS,
                Some(TEMPERATURE),
            )
            .await?;

        Ok(answer.trim().to_string())
    }

    pub fn create_question_prompt(context_text: &str, question: &str) -> String {
        format!("Here are some notes:\n\n{}\n\nQuestion: {}", context_text, question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::ScriptedAdapter;
    use crate::config::Config;
    use crate::types::AppError;

    #[test]
    fn test_prompt_with_empty_context() {
        assert_eq!(
            QaAgent::create_question_prompt("", "What is DNA?"),
            "Here are some notes:\n\n\n\nQuestion: What is DNA?"
        );
    }

    #[tokio::test]
    async fn test_answer_uses_chat_model() {
        let adapter = ScriptedAdapter::replying(vec![Ok(" On the mat. ".to_string())]);
        let config = Config::default();

        let answer = QaAgent::answer(
            &adapter.llm(),
            &config.llm,
            "The cat sat on the mat.",
            "Where did the cat sit?",
        )
        .await
        .unwrap();
        assert_eq!(answer, "On the mat.");

        let request = adapter.last_request();
        assert_eq!(request.model, config.llm.chat_model);
        assert_eq!(request.max_tokens, Some(200));
        assert_eq!(request.temperature, Some(0.7));
        assert!(request.messages[1].content.contains("The cat sat on the mat."));
        assert!(request.messages[1].content.ends_with("Question: Where did the cat sit?"));
    }

    #[tokio::test]
    async fn test_gateway_error_propagates() {
        let adapter = ScriptedAdapter::replying(vec![Err(AppError::LLMApi("quota".to_string()))]);
        let config = Config::default();

        let err = QaAgent::answer(&adapter.llm(), &config.llm, "", "Why?").await.unwrap_err();
        assert!(matches!(err, AppError::LLMApi(m) if m == "quota"));
    }
}
