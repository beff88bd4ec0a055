//! Domain models for the Prometheus farm advisory platform

mod crop;
mod farm;
mod plan;

pub use crop::*;
pub use farm::*;
pub use plan::*;
