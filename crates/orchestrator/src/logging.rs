//! Log output for the agent binary.

use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Install the stdout subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_logging() -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_logging();
        let err = init_logging().unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
