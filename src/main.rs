mod cli;

use chrono::Utc;
use clap::Parser;
use profile_scan::config::{self, resolve_store_path};
use profile_scan::error::{Result, ScanError};
use profile_scan::review::prompt::{build_review_prompt, school_name_from_slug, section_text};
use profile_scan::review::slugs::slugs_from_csv_path;
use profile_scan::review::ReviewError;
use profile_scan::store::{JsonLinesStore, ScanRecord, ScanStore};
use profile_scan::types::config::ScanConfig;
use profile_scan::{input, report, telemetry};
use profile_scan::{get_profile_scan_delta, run_complete_school_analysis};
use std::collections::BTreeMap;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn open_store(root: &std::path::Path, cfg: &ScanConfig) -> JsonLinesStore {
    JsonLinesStore::new(resolve_store_path(root, cfg))
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    if !cli.root.exists() {
        return Err(ScanError::PathNotFound(cli.root.display().to_string()));
    }
    let cfg = config::load_config(&cli.root)?;
    telemetry::init(&telemetry::level_for(
        cli.verbose,
        cli.quiet,
        cfg.log_level(),
    ))?;

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let document = input::read_profile(&cmd.path)?;
            let slug = match cmd.slug.or_else(|| document.slug_text()) {
                Some(slug) => slug,
                None => return Err(ScanError::MissingSlug(cmd.path.display().to_string())),
            };

            let store = open_store(&cli.root, &cfg);
            let analysis =
                run_complete_school_analysis(&store, &slug, &document, &cfg.weights())?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&analysis, output_format)?);

            if !cmd.no_record {
                store.record(ScanRecord::new(&slug, analysis, Utc::now()))?;
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Trend(cmd) => {
            let store = open_store(&cli.root, &cfg);
            match get_profile_scan_delta(&store, &cmd.slug)? {
                None => println!("trend: not enough scans"),
                Some(trend) => {
                    let percent = trend
                        .percent_change
                        .map(|percent| format!("{percent:+.1}%"))
                        .unwrap_or_else(|| "n/a".to_string());
                    println!("current: {:.1}", trend.current_score);
                    println!("previous: {:.1}", trend.previous_score);
                    println!("delta: {:+.1} ({percent})", trend.delta);
                    println!("period: {}", trend.comparison_period);
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let store = open_store(&cli.root, &cfg);
            let records = store.recent(&cmd.slug, cmd.limit)?;
            if records.is_empty() {
                println!("history: no scans for {}", cmd.slug);
            }
            for record in &records {
                println!(
                    "{}  {}  {}",
                    record.created_at.to_rfc3339(),
                    record.scan_id,
                    record
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let files = input::profile_files(&cmd.path)?;
            if files.is_empty() {
                eprintln!("warning: no profile documents under {}", cmd.path.display());
                return Ok(exit_code::WARNINGS);
            }

            let store = open_store(&cli.root, &cfg);
            let weights = cfg.weights();
            let mut failures = 0usize;
            for path in &files {
                let outcome = input::read_profile(path).and_then(|document| {
                    let slug = input::fallback_slug(&document, path)
                        .ok_or_else(|| ScanError::MissingSlug(path.display().to_string()))?;
                    let analysis =
                        run_complete_school_analysis(&store, &slug, &document, &weights)?;
                    Ok((slug, analysis))
                });

                match outcome {
                    Ok((slug, analysis)) => {
                        let confidence = analysis
                            .confidence_level
                            .map(|level| level.to_string())
                            .unwrap_or_default();
                        println!("{slug}: {:.1} ({confidence})", analysis.overall_score);
                        if !cmd.no_record {
                            store.record(ScanRecord::new(&slug, analysis, Utc::now()))?;
                        }
                    }
                    Err(err) => {
                        failures += 1;
                        tracing::warn!(path = %path.display(), error = %err, "profile skipped");
                        eprintln!("{}: error: {err}", path.display());
                    }
                }
            }

            println!(
                "batch: {} analysed, {failures} failed",
                files.len() - failures
            );
            if failures > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Slugs(cmd) => {
            if !cmd.path.exists() {
                return Err(ScanError::PathNotFound(cmd.path.display().to_string()));
            }
            let slugs = slugs_from_csv_path(&cmd.path)?;
            if slugs.is_empty() {
                return Err(ReviewError::NoProfileUrls.into());
            }
            for slug in &slugs {
                println!("{slug}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Prompt(cmd) => {
            if !cmd.path.exists() {
                return Err(ScanError::PathNotFound(cmd.path.display().to_string()));
            }
            let raw = std::fs::read_to_string(&cmd.path)?;
            let sections: BTreeMap<String, String> = serde_json::from_str(&raw)?;
            if sections.is_empty() {
                return Err(ReviewError::NoSections(cmd.path.display().to_string()).into());
            }
            let school_name = school_name_from_slug(&cmd.slug);
            println!(
                "{}",
                build_review_prompt(&cmd.slug, &school_name, &section_text(&sections))
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
