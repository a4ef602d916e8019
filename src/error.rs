use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Alias file error: {0}")]
    AliasFile(String),

    #[error("Smart analysis failed: {0}")]
    AnalysisUnavailable(String),

    #[error("Smart analysis timeout after {timeout} seconds")]
    AnalysisTimeout { timeout: u64 },

    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),

    #[error("LLM client error: {0}")]
    LlmClientError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TallyError {
    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TallyError::InvalidArguments(_) => 2,
            TallyError::Config(_) | TallyError::AliasFile(_) => 4,
            _ => 1,
        }
    }

    /// Whether the error came from the smart (remote) analysis path.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            TallyError::AnalysisUnavailable(_)
                | TallyError::AnalysisTimeout { .. }
                | TallyError::InvalidResponse(_)
                | TallyError::LlmClientError(_)
        )
    }
}
