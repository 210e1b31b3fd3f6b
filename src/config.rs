use anyhow::Result;
use serde::Deserialize;
use std::env;

use crate::llm::groq::GROQ_API_BASE;

pub const DEFAULT_SUMMARY_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_CHAT_MODEL: &str = "llama3-70b-8192";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
    pub frontend_dir: String,
    pub max_upload_bytes: usize,
}

#[derive(Clone, Deserialize)]
pub struct LLMConfig {
    pub groq_api_key: String,
    pub api_base: String,
    pub summary_model: String,
    pub chat_model: String,
}

// Hand-written so the API key never reaches the logs.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("groq_api_key", &if self.groq_api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("api_base", &self.api_base)
            .field("summary_model", &self.summary_model)
            .field("chat_model", &self.chat_model)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                frontend_dir: env::var("FRONTEND_DIR").unwrap_or_else(|_| "../Frontend".to_string()),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| "20971520".to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
                api_base: env::var("GROQ_API_BASE")
                    .unwrap_or_else(|_| GROQ_API_BASE.to_string()),
                summary_model: env::var("SUMMARY_MODEL")
                    .unwrap_or_else(|_| DEFAULT_SUMMARY_MODEL.to_string()),
                chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 5000,
                host: "0.0.0.0".to_string(),
                cors_allowed_origins: vec!["*".to_string()],
                frontend_dir: "../Frontend".to_string(),
                max_upload_bytes: 20 * 1024 * 1024,
            },
            llm: LLMConfig {
                groq_api_key: String::new(),
                api_base: GROQ_API_BASE.to_string(),
                summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
                chat_model: DEFAULT_CHAT_MODEL.to_string(),
            },
        }
    }
}
