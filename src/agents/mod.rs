//! Study Agents
//!
//! Each agent owns one prompt template and one gateway configuration:
//!
//! | Agent        | Model          | Max tokens | Temperature |
//! |--------------|----------------|------------|-------------|
//! | Summary      | summary model  | 150        | default     |
//! | Q&A          | chat model     | 200        | 0.7         |
//! | Quiz         | chat model     | 800        | 0.7         |

pub mod qa;
pub mod quiz;
pub mod summary;

pub use qa::QaAgent;
pub use quiz::{QuizAgent, QuizParseError};
pub use summary::SummaryAgent;

pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const JSON_ONLY_SYSTEM_PROMPT: &str = "You are a helpful assistant. Respond ONLY with valid JSON.";
