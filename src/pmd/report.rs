// PMD's native report model: findings with rule priorities, plus the JSON
// report format the CLI backend parses.

use serde::Deserialize;

use crate::errors::{AnalysisError, Result, ReviewError};
use crate::review::Severity;

/// PMD's five-level rule priority. Carried on the wire as 1..=5, 1 highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePriority {
    High,
    MediumHigh,
    Medium,
    MediumLow,
    Low,
}

impl RulePriority {
    /// A wire value outside 1..=5 means the report came from an analyzer
    /// version this adapter does not know. Conversion must halt rather than
    /// guess a default.
    pub fn from_report(value: u64) -> Result<Self> {
        match value {
            1 => Ok(RulePriority::High),
            2 => Ok(RulePriority::MediumHigh),
            3 => Ok(RulePriority::Medium),
            4 => Ok(RulePriority::MediumLow),
            5 => Ok(RulePriority::Low),
            other => Err(ReviewError::UnsupportedPriority(other)),
        }
    }
}

impl From<RulePriority> for Severity {
    // Exhaustive on purpose: a new PMD priority has to show up here as a
    // compile error, never as a silent default.
    fn from(priority: RulePriority) -> Self {
        match priority {
            RulePriority::High => Severity::Error,
            RulePriority::MediumHigh => Severity::Warning,
            RulePriority::Medium | RulePriority::MediumLow => Severity::Info,
            RulePriority::Low => Severity::Ignore,
        }
    }
}

/// One raw PMD result. Owned only while the adapter converts the report;
/// nothing keeps findings after the invocation returns.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Path as PMD reported it, which is the path the adapter passed in.
    pub path: String,
    /// 1-based begin line.
    pub begin_line: u32,
    /// Raw wire priority; mapped to a severity during conversion.
    pub priority: u64,
    pub description: String,
    pub rule: String,
    /// Rule rationale, when the backend carries it.
    pub rule_description: Option<String>,
    /// Reference URL for the rule, when published.
    pub external_info_url: Option<String>,
}

/// Findings in the order PMD emitted them. That order is not stable across
/// PMD versions and nothing downstream may rely on it.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub findings: Vec<Finding>,
}

#[derive(Debug, Deserialize)]
struct JsonReport {
    #[serde(default)]
    files: Vec<JsonFile>,
    #[serde(default, rename = "processingErrors")]
    processing_errors: Vec<JsonProcessingError>,
    #[serde(default, rename = "configurationErrors")]
    configuration_errors: Vec<JsonConfigurationError>,
}

#[derive(Debug, Deserialize)]
struct JsonFile {
    filename: String,
    #[serde(default)]
    violations: Vec<JsonViolation>,
}

#[derive(Debug, Deserialize)]
struct JsonViolation {
    beginline: u32,
    description: String,
    rule: String,
    priority: u64,
    #[serde(default, rename = "externalInfoUrl")]
    external_info_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JsonProcessingError {
    filename: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct JsonConfigurationError {
    rule: String,
    message: String,
}

impl Report {
    /// Parses PMD's JSON report format. PMD keeps going past per-file and
    /// per-rule errors and still emits a report; the adapter is
    /// all-or-nothing, so any reported error fails the run.
    pub fn from_json(raw: &str) -> std::result::Result<Self, AnalysisError> {
        let parsed: JsonReport = serde_json::from_str(raw)?;

        if !parsed.configuration_errors.is_empty() || !parsed.processing_errors.is_empty() {
            let notes: Vec<String> = parsed
                .configuration_errors
                .iter()
                .map(|e| format!("{}: {}", e.rule, e.message))
                .chain(
                    parsed
                        .processing_errors
                        .iter()
                        .map(|e| format!("{}: {}", e.filename, e.message)),
                )
                .collect();
            return Err(AnalysisError::Reported(notes.join("; ")));
        }

        let mut findings = Vec::new();
        for file in parsed.files {
            for violation in file.violations {
                findings.push(Finding {
                    path: file.filename.clone(),
                    begin_line: violation.beginline,
                    priority: violation.priority,
                    description: violation.description,
                    rule: violation.rule,
                    rule_description: None,
                    external_info_url: violation
                        .external_info_url
                        .filter(|url| !url.is_empty()),
                });
            }
        }
        Ok(Report { findings })
    }
}
