//! Farm assistant service
//!
//! Wraps the language model with the system prompt and per-session memory.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::{ChatMessage, LanguageModel};
use crate::services::conversation::ConversationStore;
use crate::services::prompts::SYSTEM_PROMPT;

/// Conversational assistant bound to an optional language model
#[derive(Clone)]
pub struct AssistantService {
    model: Option<Arc<dyn LanguageModel>>,
    conversations: ConversationStore,
}

impl AssistantService {
    /// Create an assistant without a language model
    pub fn new(conversations: ConversationStore) -> Self {
        Self {
            model: None,
            conversations,
        }
    }

    /// Create an assistant backed by a language model
    pub fn with_model(model: Arc<dyn LanguageModel>, conversations: ConversationStore) -> Self {
        Self {
            model: Some(model),
            conversations,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.model.is_some()
    }

    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    /// Answer one user turn within a session's conversation
    ///
    /// The exchange is remembered only when the model answers.
    pub async fn respond(&self, session_id: &str, input: String) -> AppResult<String> {
        let model = self.model.as_ref().ok_or(AppError::LanguageModelUnavailable)?;

        let history = self.conversations.history(session_id);
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(SYSTEM_PROMPT));
        messages.extend(history);
        messages.push(ChatMessage::user(input.clone()));

        tracing::debug!(session_id, messages = messages.len(), "Calling language model");
        let reply = model.generate(&messages).await?;

        self.conversations
            .record_exchange(session_id, ChatMessage::user(input), ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }
}
