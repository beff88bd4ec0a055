//! External API integrations

pub mod llm;

pub use llm::{ChatCompletionsClient, ChatMessage, LanguageModel};
