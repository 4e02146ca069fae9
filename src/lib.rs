pub mod config;
pub mod errors;
pub mod pmd;
pub mod review;

// Re-export commonly used items for convenience
pub use config::PmdOptions;
pub use errors::{AnalysisError, ConfigError, ReviewError};
pub use pmd::{PmdCli, PmdProcessor};
pub use review::{Review, ReviewProcessor, ReviewResult, Severity, Violation};
