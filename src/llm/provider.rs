use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::LLMConfig;
use crate::types::{AppResult, LLMMessage, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Gateway to the chat-completion provider.
///
/// There is no local timeout, retry or backoff: the call suspends the
/// request until the provider answers, and a single failure fails the
/// enclosing request.
#[derive(Clone)]
pub struct LLM {
    adapter: Arc<dyn LLMAdapter>,
}

impl LLM {
    pub fn new(config: &LLMConfig) -> Self {
        let adapter = crate::llm::groq::GroqAdapter::new_with_api_base(
            &config.groq_api_key,
            &config.api_base,
        );
        Self::with_adapter(Arc::new(adapter))
    }

    pub fn with_adapter(adapter: Arc<dyn LLMAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        self.adapter.create_chat_completion(request).await
    }

    /// Send a system + user prompt pair and return the raw response text
    pub async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: Option<f32>,
    ) -> AppResult<String> {
        let request = LLMRequest {
            model: model.to_string(),
            messages: vec![LLMMessage::system(system_prompt), LLMMessage::user(user_prompt)],
            max_tokens: Some(max_tokens),
            temperature,
        };

        debug!(model, max_tokens, prompt_len = user_prompt.len(), "Sending chat completion");
        let response = self.create_chat_completion(&request).await?;

        let usage = response.usage.as_ref();
        debug!(
            model,
            finish_reason = response.finish_reason.as_deref().unwrap_or("unknown"),
            prompt_tokens = usage.map(|u| u.prompt_tokens),
            completion_tokens = usage.map(|u| u.completion_tokens),
            total_tokens = usage.map(|u| u.total_tokens),
            "Chat completion received"
        );
        if response.finish_reason.as_deref() == Some("length") {
            warn!(model, max_tokens, "Completion was cut off at max_tokens");
        }

        Ok(response.content)
    }
}
