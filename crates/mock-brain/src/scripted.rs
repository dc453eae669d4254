//! Scripted brain - fixed reply, recorded requests.

use std::sync::Mutex;

use brain_core::{async_trait, BrainError, CompletionProvider, CompletionRequest, CompletionResult};

/// What a [`ScriptedBrain`] answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Text, possibly empty.
    Text(String),
    /// No text at all.
    Empty,
    /// A processing failure with this message.
    Fail(String),
}

/// A provider that always gives the same reply and records each request.
#[derive(Debug)]
pub struct ScriptedBrain {
    reply: Reply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBrain {
    /// Create a brain with the given reply.
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer with text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Reply::Text(text.into()))
    }

    /// Answer with no text.
    pub fn empty() -> Self {
        Self::new(Reply::Empty)
    }

    /// Fail every request.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(Reply::Fail(message.into()))
    }

    /// Number of completions requested so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// All recorded requests, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedBrain {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResult, BrainError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        match &self.reply {
            Reply::Text(text) => Ok(CompletionResult::text(text.clone())),
            Reply::Empty => Ok(CompletionResult::empty()),
            Reply::Fail(message) => Err(BrainError::ProcessingFailed(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "ScriptedBrain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_requests() {
        let brain = ScriptedBrain::text("ok");
        brain
            .complete(CompletionRequest::new("model-a", "first", Vec::new()))
            .await
            .unwrap();
        brain
            .complete(CompletionRequest::new("model-a", "second", Vec::new()))
            .await
            .unwrap();

        assert_eq!(brain.calls(), 2);
        assert_eq!(brain.last_request().unwrap().content, "second");
    }

    #[tokio::test]
    async fn test_replies() {
        let request = || CompletionRequest::new("m", "q", Vec::new());

        let empty = ScriptedBrain::empty().complete(request()).await.unwrap();
        assert!(empty.text.is_none());

        let err = ScriptedBrain::failing("quota exceeded")
            .complete(request())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "processing failed: quota exceeded");
    }
}
