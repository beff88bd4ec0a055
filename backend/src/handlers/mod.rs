//! HTTP handlers for the Prometheus farm advisory backend

pub mod chat;
pub mod crops;
pub mod decision;
pub mod farm;
pub mod health;
pub mod tools;

pub use chat::{chat, image_diagnosis};
pub use crops::crop_suggestions;
pub use decision::decision_support;
pub use farm::{get_farm_state, update_farm_state};
pub use health::health_check;
pub use tools::{invoke_tool, list_tools};
