use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures for one adapter invocation. A failing invocation
/// contributes nothing to the review; partial results are never returned.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// A selected candidate file is absent on disk. Raised during selection,
    /// before the analyzer is ever invoked.
    #[error("file [{}] does not exist", .0.display())]
    MissingFile(PathBuf),

    /// The analyzer failed during configuration or execution.
    #[error("PMD processing error: {0}")]
    Analysis(#[from] AnalysisError),

    /// The analyzer reported a rule priority outside the known 1..=5 scale.
    /// This is version skew between adapter and analyzer, not user input.
    #[error("rule priority {0} is not supported")]
    UnsupportedPriority(u64),
}

/// Failures raised by the external analyzer backend.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to launch analyzer: {0}")]
    Launch(#[source] std::io::Error),
    #[error("analyzer exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },
    #[error("failed to parse analyzer report: {0}")]
    Report(#[from] serde_json::Error),
    #[error("analyzer reported errors: {0}")]
    Reported(String),
    #[error("I/O error while preparing analyzer inputs: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file '{0}': {1}")]
    FileRead(String, #[source] std::io::Error),
    #[error("failed to parse TOML from file '{0}': {1}")]
    TomlParse(String, #[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;
