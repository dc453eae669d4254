//! Core traits and types for the one-shot agent bridge.
//!
//! This crate provides the shared interface between the tool registry,
//! the completion provider and the orchestrator. It defines:
//!
//! - [`ToolDescriptor`] / [`Parameter`] / [`TypeTag`] - Tool metadata handed to the model
//! - [`ToolCallable`] - The invocable side of a tool, owned by the registry
//! - [`ToolProvider`] - Read-only source of tool descriptor snapshots
//! - [`CompletionProvider`] - The model endpoint, with automatic tool execution
//! - [`BrainError`] - Error types for completion operations
//!
//! # Example
//!
//! ```rust
//! use brain_core::{async_trait, BrainError, CompletionProvider, CompletionRequest, CompletionResult};
//!
//! struct FixedBrain;
//!
//! #[async_trait]
//! impl CompletionProvider for FixedBrain {
//!     async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResult, BrainError> {
//!         Ok(CompletionResult::text("It will be sunny."))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "FixedBrain"
//!     }
//! }
//! ```

mod completion;
mod error;
mod tools;

pub use completion::{CompletionProvider, CompletionRequest, CompletionResult};
pub use error::{BrainError, ToolAdaptationError};
pub use tools::{Parameter, ToolCallable, ToolDescriptor, ToolProvider, TypeTag};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
