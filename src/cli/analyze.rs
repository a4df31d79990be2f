use std::path::Path;
use console::style;
use crate::cli::commands::AnalyzeArgs;
use crate::config::load_config;
use crate::errors::KdumpCheckError;
use crate::extraction::{Extractor, SolutionTable};
use crate::models::{AnalysisReport, SOLUTION_LABEL, UNVERIFIED_NOTE};
use crate::pipeline::analyze_file;
use tracing::info;

pub async fn handle_analyze(args: AnalyzeArgs) -> Result<(), KdumpCheckError> {
    let config = load_config(args.config.as_deref().map(Path::new)).await?;
    let extractor = Extractor::new(SolutionTable::new(&config.solutions));

    info!(file = %args.file, "Analyzing report");
    let report = analyze_file(&extractor, Path::new(&args.file)).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("{}", style("System").bold());
    for (label, value) in report.header() {
        print_field(label, value);
    }
    println!();
    println!("{}", style("Kdump results").bold());
    for (label, value) in report.extraction.fields() {
        print_field(label, value);
        if label == SOLUTION_LABEL && report.extraction.solution_unverified {
            println!("  {:<28} {}", "", style(UNVERIFIED_NOTE).yellow());
        }
    }
}

fn print_field(label: &str, value: &str) {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or("");
    println!("  {:<28} {}", style(label).cyan(), first);
    for line in lines {
        println!("  {:<28} {}", "", line);
    }
}
