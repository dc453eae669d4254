//! Mock completion providers and tool sources for testing.
//!
//! This crate provides test doubles for the `brain-core` seams:
//! - `ScriptedBrain` - Answers with a fixed reply and records every request
//! - `ToolCallingBrain` - Invokes one tool the way a provider with automatic
//!   function calling would, then answers with its result
//! - `StaticToolProvider` / `FailingToolProvider` - Tool sources
//! - `FixedCallable` - A tool callable returning a constant
//!
//! For production completions, use the `gemini-brain` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{CompletionProvider, CompletionRequest, ScriptedBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = ScriptedBrain::text("Sunny, 21°C");
//!
//!     let request = CompletionRequest::new("test-model", "Weather?", Vec::new());
//!     let result = brain.complete(request).await?;
//!
//!     assert_eq!(result.text.as_deref(), Some("Sunny, 21°C"));
//!     assert_eq!(brain.calls(), 1);
//!     Ok(())
//! }
//! ```

mod scripted;
mod tool_calling;
mod tools;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, BrainError, CompletionProvider, CompletionRequest, CompletionResult, Parameter,
    ToolCallable, ToolDescriptor, ToolProvider, TypeTag,
};

pub use scripted::{Reply, ScriptedBrain};
pub use tool_calling::ToolCallingBrain;
pub use tools::{FailingToolProvider, FixedCallable, StaticToolProvider};
