//! Business logic services for the Prometheus farm advisory backend

pub mod assistant;
pub mod conversation;
pub mod farm_state;
pub mod prompts;
pub mod tools;

pub use assistant::AssistantService;
pub use conversation::ConversationStore;
pub use farm_state::FarmStateStore;
pub use tools::ToolRegistry;
