//! Shared types and models for the Prometheus farm advisory platform
//!
//! This crate holds the pure domain: the farm digital twin, the plan
//! optimizer and the crop-suggestion table. It is used by the backend and
//! by the WASM module for client-side plan previews.

pub mod models;
pub mod optimizer;
pub mod types;
pub mod validation;

pub use models::*;
pub use optimizer::*;
pub use types::*;
pub use validation::*;
