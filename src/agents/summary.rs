//! Summary Agent
//!
//! Produces the short summary returned from an upload.

use tracing::info;

use super::ASSISTANT_SYSTEM_PROMPT;
use crate::config::LLMConfig;
use crate::llm::LLM;
use crate::types::AppResult;

const MAX_TOKENS: u32 = 150;

pub struct SummaryAgent;

impl SummaryAgent {
    pub async fn summarize(llm: &LLM, config: &LLMConfig, text: &str) -> AppResult<String> {
        info!(text_len = text.len(), model = %config.summary_model, "Summarizing document");

        let prompt = Self::create_summary_prompt(text);
        let summary = llm
            .complete(&config.summary_model, ASSISTANT_SYSTEM_PROMPT, &prompt, MAX_TOKENS, None)
            .await?;

        Ok(summary.trim().to_string())
    }

    pub fn create_summary_prompt(text: &str) -> String {
        format!(
            "Please provide a concise summary of the following text:\n\n{}\n\nSummary:",
            text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::ScriptedAdapter;
    use crate::config::Config;

    #[test]
    fn test_prompt_embeds_full_text() {
        let prompt = SummaryAgent::create_summary_prompt("The cat sat on the mat.");
        assert_eq!(
            prompt,
            "Please provide a concise summary of the following text:\n\nThe cat sat on the mat.\n\nSummary:"
        );
    }

    #[tokio::test]
    async fn test_summarize_uses_summary_model_and_trims() {
        let adapter = ScriptedAdapter::replying(vec![Ok("\n  A cat sits.  \n".to_string())]);
        let config = Config::default();

        let summary = SummaryAgent::summarize(&adapter.llm(), &config.llm, "The cat sat on the mat.")
            .await
            .unwrap();
        assert_eq!(summary, "A cat sits.");

        let request = adapter.last_request();
        assert_eq!(request.model, config.llm.summary_model);
        assert_eq!(request.max_tokens, Some(150));
        assert_eq!(request.temperature, None);
        assert_eq!(request.messages[0].content, ASSISTANT_SYSTEM_PROMPT);
    }
}
