//! PMD adapter: selects the files PMD should inspect, runs one analysis
//! and normalizes the native report into pipeline violations.

pub mod analysis;
pub mod report;

pub use analysis::{Analyzer, AnalyzerRun, PmdCli};
pub use report::{Finding, Report, RulePriority};

use log::{error, info};

use crate::config::PmdOptions;
use crate::errors::{Result, ReviewError};
use crate::review::{
    select_files, ExtensionFilter, FileFilter, Review, ReviewProcessor, ReviewResult, Severity,
    Violation,
};

/// Fixed adapter name the aggregator groups this adapter's violations under.
pub const SOURCE_NAME: &str = "PMD";

const LINE_SEPARATOR: char = '\n';

/// The adapter. Rule sets and the details flag are explicit construction
/// parameters; there is no process-global configuration to reach into.
pub struct PmdProcessor<A> {
    analyzer: A,
    filter: Box<dyn FileFilter + Send + Sync>,
    rulesets: Vec<String>,
    show_details: bool,
}

impl<A: Analyzer> PmdProcessor<A> {
    pub fn new(analyzer: A, options: PmdOptions) -> Self {
        Self {
            analyzer,
            filter: Box::new(ExtensionFilter::new(options.extensions)),
            rulesets: options.rulesets,
            show_details: options.show_violation_details,
        }
    }

    /// Replaces the default extension filter with a pipeline-supplied one.
    pub fn with_filter(mut self, filter: impl FileFilter + Send + Sync + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// One violation per finding, in report order. An unknown priority
    /// aborts the whole result; nothing is silently dropped or defaulted.
    fn convert(&self, report: &Report) -> Result<ReviewResult> {
        let mut result = ReviewResult::new();
        for finding in &report.findings {
            let priority = RulePriority::from_report(finding.priority)?;
            result.add(Violation::new(
                finding.path.clone(),
                finding.begin_line,
                render_violation(finding, self.show_details),
                Severity::from(priority),
            ));
        }
        Ok(result)
    }
}

impl<A: Analyzer> ReviewProcessor for PmdProcessor<A> {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    fn process(&self, review: &Review) -> Result<Option<ReviewResult>> {
        let inputs = select_files(review.files(), self.filter.as_ref())?;
        if inputs.is_empty() {
            return Ok(None);
        }

        info!(
            "running PMD with rule sets [{}] over {} file(s)",
            self.rulesets.join(","),
            inputs.len()
        );

        let run = AnalyzerRun {
            rulesets: self.rulesets.clone(),
            inputs,
        };
        // A single pass is authoritative: one invocation, no retries, and
        // on failure this adapter contributes nothing.
        let report = self.analyzer.analyze(&run).map_err(|e| {
            error!("PMD processing error, configuration or workspace mismatch: {e}");
            ReviewError::Analysis(e)
        })?;

        self.convert(&report).map(Some)
    }
}

/// Message for one finding. With details enabled, the rule rationale and the
/// external reference URL follow the description in that fixed order, each
/// only when non-empty.
pub fn render_violation(finding: &Finding, show_details: bool) -> String {
    let mut message = finding.description.clone();
    if !show_details {
        return message;
    }
    if let Some(reason) = finding.rule_description.as_deref().filter(|s| !s.is_empty()) {
        message.push(LINE_SEPARATOR);
        message.push_str(reason);
    }
    if let Some(url) = finding.external_info_url.as_deref().filter(|s| !s.is_empty()) {
        message.push(LINE_SEPARATOR);
        message.push_str(url);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockAnalyzer {
        report: Report,
        fail: bool,
        calls: AtomicUsize,
    }

    impl MockAnalyzer {
        fn returning(report: Report) -> Self {
            Self {
                report,
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                report: Report::default(),
                fail: true,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Analyzer for MockAnalyzer {
        fn analyze(&self, _run: &AnalyzerRun) -> std::result::Result<Report, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AnalysisError::Reported("ruleset not found".into()));
            }
            Ok(self.report.clone())
        }
    }

    fn finding(path: &str, line: u32, priority: u64, description: &str) -> Finding {
        Finding {
            path: path.to_string(),
            begin_line: line,
            priority,
            description: description.to_string(),
            rule: "SomeRule".to_string(),
            rule_description: None,
            external_info_url: None,
        }
    }

    fn options(rulesets: &str, show_details: bool) -> PmdOptions {
        PmdOptions {
            rulesets: PmdOptions::rulesets_from_value(Some(rulesets)),
            show_violation_details: show_details,
            ..PmdOptions::default()
        }
    }

    fn java_review(dir: &std::path::Path, names: &[&str]) -> Review {
        let mut files = Vec::new();
        for name in names {
            let path = dir.join(name);
            fs::write(&path, "class X {}").unwrap();
            files.push(path.display().to_string());
        }
        Review::new(files)
    }

    #[test]
    fn no_selected_files_is_none_and_skips_the_analyzer() {
        let analyzer = MockAnalyzer::returning(Report::default());
        let processor = PmdProcessor::new(analyzer, options("basic", false));
        let review = Review::new(vec!["README.md".to_string()]);

        let outcome = processor.process(&review).unwrap();
        assert!(outcome.is_none());
        assert_eq!(processor.analyzer.calls(), 0);
    }

    #[test]
    fn missing_file_fails_before_analysis() {
        let analyzer = MockAnalyzer::returning(Report::default());
        let processor = PmdProcessor::new(analyzer, options("basic", false));
        let review = Review::new(vec!["no/such/File.java".to_string()]);

        let err = processor.process(&review).unwrap_err();
        assert!(matches!(err, ReviewError::MissingFile(_)));
        assert_eq!(processor.analyzer.calls(), 0);
    }

    #[test]
    fn single_finding_becomes_one_warning_violation() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let review = java_review(tmp.path(), &["A.java", "B.java"]);

        let report = Report {
            findings: vec![finding("A.java", 12, 2, "avoid X")],
        };
        let processor = PmdProcessor::new(MockAnalyzer::returning(report), options("basic,design", false));

        let result = processor.process(&review).unwrap().expect("analysis ran");
        assert_eq!(result.len(), 1);
        let violation = &result.violations[0];
        assert_eq!(violation.path, "A.java");
        assert_eq!(violation.line, 12);
        assert_eq!(violation.severity, Severity::Warning);
        assert_eq!(violation.message, "avoid X");
        assert_eq!(processor.analyzer.calls(), 1);
    }

    #[test]
    fn empty_report_is_an_empty_result_not_none() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let review = java_review(tmp.path(), &["A.java"]);

        let processor =
            PmdProcessor::new(MockAnalyzer::returning(Report::default()), options("", false));
        let result = processor.process(&review).unwrap();
        assert!(result.expect("present").is_empty());
    }

    #[test]
    fn conversion_keeps_count_and_order() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let review = java_review(tmp.path(), &["A.java"]);

        let report = Report {
            findings: vec![
                finding("A.java", 3, 1, "first"),
                finding("A.java", 1, 5, "second"),
                finding("B.java", 9, 3, "third"),
            ],
        };
        let processor = PmdProcessor::new(MockAnalyzer::returning(report), options("basic", false));

        let result = processor.process(&review).unwrap().unwrap();
        let messages: Vec<&str> = result.violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn unknown_priority_aborts_the_whole_result() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let review = java_review(tmp.path(), &["A.java"]);

        let report = Report {
            findings: vec![finding("A.java", 1, 1, "fine"), finding("A.java", 2, 9, "skewed")],
        };
        let processor = PmdProcessor::new(MockAnalyzer::returning(report), options("basic", false));

        let err = processor.process(&review).unwrap_err();
        assert!(matches!(err, ReviewError::UnsupportedPriority(9)));
    }

    #[test]
    fn analyzer_failure_propagates_as_analysis_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let review = java_review(tmp.path(), &["A.java"]);

        let processor = PmdProcessor::new(MockAnalyzer::failing(), options("bogus", false));
        let err = processor.process(&review).unwrap_err();
        assert!(matches!(err, ReviewError::Analysis(_)));
        assert_eq!(processor.analyzer.calls(), 1);
    }

    #[test]
    fn render_without_details_is_verbatim() {
        let mut detailed = finding("A.java", 1, 2, "avoid X");
        detailed.rule_description = Some("X hides latent bugs".to_string());
        detailed.external_info_url = Some("https://example.org/avoid-x".to_string());

        assert_eq!(render_violation(&detailed, false), "avoid X");
    }

    #[test]
    fn render_with_details_appends_reason_then_url() {
        let mut detailed = finding("A.java", 1, 2, "avoid X");
        detailed.rule_description = Some("X hides latent bugs".to_string());
        detailed.external_info_url = Some("https://example.org/avoid-x".to_string());

        assert_eq!(
            render_violation(&detailed, true),
            "avoid X\nX hides latent bugs\nhttps://example.org/avoid-x"
        );
    }

    #[test]
    fn render_with_details_but_empty_metadata_matches_plain() {
        let mut bare = finding("A.java", 1, 2, "avoid X");
        bare.rule_description = Some(String::new());
        bare.external_info_url = Some(String::new());

        assert_eq!(render_violation(&bare, true), render_violation(&bare, false));
    }

    #[test]
    fn render_with_only_url_skips_the_reason_line() {
        let mut with_url = finding("A.java", 1, 2, "avoid X");
        with_url.external_info_url = Some("https://example.org/avoid-x".to_string());

        assert_eq!(
            render_violation(&with_url, true),
            "avoid X\nhttps://example.org/avoid-x"
        );
    }

    #[test]
    fn pipeline_supplied_filter_replaces_the_default() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("Build.gradle");
        fs::write(&path, "plugins {}").unwrap();

        let processor = PmdProcessor::new(
            MockAnalyzer::returning(Report::default()),
            options("basic", false),
        )
        .with_filter(ExtensionFilter::new(["gradle"]));

        let review = Review::new(vec![path.display().to_string()]);
        let result = processor.process(&review).unwrap();
        assert!(result.is_some());
        assert_eq!(processor.analyzer.calls(), 1);
    }

    #[test]
    fn adapter_reports_its_fixed_name() {
        let processor =
            PmdProcessor::new(MockAnalyzer::returning(Report::default()), options("", false));
        assert_eq!(processor.name(), "PMD");
    }
}
