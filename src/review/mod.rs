// Review pipeline model: canonical violations and severities, the file
// selector and the processor seam every adapter implements.

pub mod filter;
pub mod types;

pub use filter::{select_files, ExtensionFilter, FileFilter};
pub use types::{Review, ReviewResult, Severity, Violation};

use crate::errors::Result;

/// One adapter's contribution to the review. The aggregator groups each
/// adapter's violations under its fixed `name`.
pub trait ReviewProcessor {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means nothing was selected for this adapter, which is
    /// distinct from an empty result, which means analysis ran and came back
    /// clean.
    fn process(&self, review: &Review) -> Result<Option<ReviewResult>>;
}
