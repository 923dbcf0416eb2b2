//! Core types and service wiring for the binwatch smart bin tracker.

/// Threshold rules driving the alert latch.
pub mod alert;
/// Domain models and identifiers.
pub mod model;
/// Traits describing the store and clock backends.
pub mod ports;
/// In-memory bin registry.
pub mod registry;
/// High-level service facade used by the HTTP layer.
pub mod service;

pub use alert::*;
pub use model::*;
pub use ports::*;
pub use registry::*;
pub use service::*;
