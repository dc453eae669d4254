//! Tool registry, schema sanitizer and built-in tools.
//!
//! This crate provides the [`ToolRegistry`] that backs the agent's tool set
//! and the [`SchemaSanitizer`] that prepares its descriptors for a
//! completion provider.
//!
//! # Architecture
//!
//! Tools implement the [`Tool`] trait. The registry owns them and hands out
//! [`ToolDescriptor`](brain_core::ToolDescriptor) snapshots through
//! brain-core's `ToolProvider` trait; each snapshot shares a callable that
//! dispatches back into the registered tool. The sanitizer rewrites
//! snapshots, never the registry.
//!
//! # Built-in Tools
//!
//! - [`Weather`] - Weather information via wttr.in (`get_weather`).
//! - [`Calculator`] - Safe mathematical expression evaluation using `meval`.
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_tools::{default_registry, SchemaSanitizer};
//! use brain_core::ToolProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = default_registry();
//!     let descriptors = registry.list_tools().await.unwrap();
//!     let sanitized = SchemaSanitizer::new().sanitize(&descriptors);
//!     assert_eq!(sanitized.len(), descriptors.len());
//! }
//! ```

mod error;
mod registry;
mod sanitizer;
mod tool;
pub mod tools;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use sanitizer::{sanitize, SchemaSanitizer};
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{Calculator, Weather};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a new registry with all built-in tools registered.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Weather::new());
    registry.register(Calculator::new());
    registry
}
