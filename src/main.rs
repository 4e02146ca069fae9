mod args;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use pmd_review::config::PmdOptions;
use pmd_review::pmd::{PmdCli, PmdProcessor};
use pmd_review::review::{Review, ReviewProcessor, ReviewResult};

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut options =
        PmdOptions::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(raw) = args.rulesets.as_deref() {
        options.rulesets = PmdOptions::rulesets_from_value(Some(raw));
    }
    if args.details {
        options.show_violation_details = true;
    }

    let analyzer = PmdCli::with_binary(&args.pmd_bin);
    if !analyzer.is_installed() {
        warn!(
            "PMD executable '{}' not found; analysis will fail",
            args.pmd_bin.display()
        );
    }

    let processor = PmdProcessor::new(analyzer, options);
    let review = Review::new(args.files);

    match processor.process(&review)? {
        None => info!("no files selected for {}", processor.name()),
        Some(result) => print_result(&result, &args.format)?,
    }
    Ok(())
}

fn print_result(result: &ReviewResult, format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(result)?),
        _ => {
            for violation in &result.violations {
                println!(
                    "{}:{} [{}] {}",
                    violation.path, violation.line, violation.severity, violation.message
                );
            }
            println!("{} violation(s)", result.len());
        }
    }
    Ok(())
}
