use clap::Parser;
use std::path::PathBuf;

/// Run PMD over the given candidate files and print normalized violations.
#[derive(Parser, Debug)]
#[command(name = "pmd-review")]
#[command(about = "PMD adapter for code review pipelines")]
pub struct Args {
    /// Candidate files, as the review pipeline would hand them over
    pub files: Vec<String>,

    /// Comma-separated PMD rule set identifiers (overrides config and env)
    #[arg(long)]
    pub rulesets: Option<String>,

    /// Append rule rationale and reference URL to each violation message
    #[arg(long)]
    pub details: bool,

    /// Output format (text|json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// PMD executable to invoke
    #[arg(long, default_value = "pmd")]
    pub pmd_bin: PathBuf,
}
