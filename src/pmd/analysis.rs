// External analyzer boundary. The trait is the contract the adapter
// orchestrates against; `PmdCli` is the backend that shells out to the
// `pmd` executable.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use log::debug;
use tempfile::NamedTempFile;

use super::report::Report;
use crate::errors::AnalysisError;

/// Everything one analyzer run works on: the configured rule sets and the
/// input files, already resolved and existence-checked by selection.
#[derive(Debug, Clone)]
pub struct AnalyzerRun {
    pub rulesets: Vec<String>,
    pub inputs: Vec<PathBuf>,
}

/// Boundary to the external engine. One call performs one full analysis to
/// completion; the implementation owns session setup and teardown on every
/// exit path and offers no cancellation point.
pub trait Analyzer {
    fn analyze(&self, run: &AnalyzerRun) -> Result<Report, AnalysisError>;
}

/// Backend invoking the `pmd` executable with a JSON report.
#[derive(Debug, Clone)]
pub struct PmdCli {
    binary: PathBuf,
}

impl PmdCli {
    pub fn new() -> Self {
        Self::with_binary("pmd")
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn is_installed(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl Default for PmdCli {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for PmdCli {
    fn analyze(&self, run: &AnalyzerRun) -> Result<Report, AnalysisError> {
        // The session guard owns the temp file list; dropping it releases
        // the resource whichever way this function exits.
        let session = CliSession::prepare(run)?;
        let args = session.args(run);
        debug!("running {} {:?}", self.binary.display(), args);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(AnalysisError::Launch)?;

        // PMD exits 4 when it found violations; that is still a report.
        let status = output.status.code().unwrap_or(-1);
        if !output.status.success() && status != 4 {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AnalysisError::Failed { status, stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Report::from_json(&stdout)
    }
}

/// Scoped analyzer session: the input list is handed to PMD through a file
/// that lives exactly as long as one run.
struct CliSession {
    file_list: NamedTempFile,
}

impl CliSession {
    fn prepare(run: &AnalyzerRun) -> Result<Self, AnalysisError> {
        let mut file_list = NamedTempFile::new()?;
        for input in &run.inputs {
            writeln!(file_list, "{}", input.display())?;
        }
        file_list.flush()?;
        Ok(Self { file_list })
    }

    fn args(&self, run: &AnalyzerRun) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "check".into(),
            "--format".into(),
            "json".into(),
            "--no-progress".into(),
            "--file-list".into(),
            self.file_list.path().into(),
        ];
        if !run.rulesets.is_empty() {
            args.push("--rulesets".into());
            args.push(run.rulesets.join(",").into());
        }
        args
    }
}
