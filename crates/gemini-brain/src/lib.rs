//! Google Gemini completion provider.
//!
//! This crate implements [`CompletionProvider`] on top of the Gemini
//! `generateContent` REST endpoint.
//!
//! # Features
//!
//! - Function declarations generated from [`ToolDescriptor`] parameters
//! - Automatic function calling with a bounded number of rounds
//! - Pluggable transport through [`ContentGenerator`]
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_brain::{CompletionProvider, CompletionRequest, GeminiBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = GeminiBrain::from_env()?;
//!     let request = CompletionRequest::new("gemini-2.5-flash", "Hello!", Vec::new());
//!     let result = brain.complete(request).await?;
//!     println!("{:?}", result.text);
//!     Ok(())
//! }
//! ```
//!
//! Tool parameters must carry a type or a concrete default. Run descriptors
//! through a schema sanitizer before handing them to this provider; an
//! untyped parameter with a null default fails schema generation.

pub mod api_types;
mod brain;
mod client;
mod config;
pub mod schema;

pub use brain::GeminiBrain;
pub use client::{ContentGenerator, GeminiClient};
pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_API_URL, DEFAULT_MAX_TOOL_CALLS};

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, BrainError, CompletionProvider, CompletionRequest, CompletionResult,
    ToolDescriptor,
};
