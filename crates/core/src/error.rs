use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum FrameTimesError {
    /// Invalid settings: zero capacity, zero tick period, unreadable config.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Aggregation was requested over zero samples.
    #[error("cannot summarize an empty sample buffer")]
    EmptyBuffer,
}

pub type Result<T, E = FrameTimesError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = FrameTimesError::Configuration("sampling.capacity must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "configuration error: sampling.capacity must be at least 1"
        );
        assert_eq!(
            FrameTimesError::EmptyBuffer.to_string(),
            "cannot summarize an empty sample buffer"
        );
    }
}
