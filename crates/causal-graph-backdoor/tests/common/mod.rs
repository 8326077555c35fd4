//! Common test utilities for integration tests.
//!
//! - `fixtures`: Named textbook DAGs and deterministic random DAGs

pub mod fixtures;

// Re-exports for convenience
pub use fixtures::*;
