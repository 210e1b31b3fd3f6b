use crate::config::Config;
use crate::context_store::ContextStore;
use crate::llm::LLM;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: LLM,
    pub contexts: ContextStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let llm = LLM::new(&config.llm);
        Self::with_llm(config, llm)
    }

    /// State with an injected gateway (used by tests to script LLM replies)
    pub fn with_llm(config: Config, llm: LLM) -> Self {
        Self {
            config,
            llm,
            contexts: ContextStore::new(),
        }
    }
}

/// One multiple-choice question: exactly three options and the index of the correct one
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuizQuestion {
    pub q: String,
    pub options: [String; 3],
    pub answer: u8,
}

// API Request/Response types

/// Fields of the wrong JSON type are read as absent instead of failing the
/// whole body, so `{"question": "..", "contextId": 123}` still has a question.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub context_id: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub context_id: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match <Option<serde_json::Value> as serde::Deserialize>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

#[derive(Debug, serde::Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub text: String,
    pub summary: String,
    pub context_id: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub contexts: usize,
}
