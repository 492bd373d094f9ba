use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::fs;
use std::process::ExitCode;
use tracing::{debug, info};

use playwright_tagging::cli::Args;
use playwright_tagging::config::{find_config, load_config, TagRuleConfig};
use playwright_tagging::discovery::collect_targets;
use playwright_tagging::logging::{self, Verbosity};
use playwright_tagging::output::{fix_file, OutputFormatter};
use playwright_tagging::scanner::{ScanResult, Scanner};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    args.validate().context("Invalid arguments")?;

    let config = match args.config.clone().or_else(|| find_config(args.config_dir())) {
        Some(path) => {
            info!(config = %path.display(), "using config");
            load_config(&path).with_context(|| format!("Cannot load config: {}", path.display()))?
        }
        None => {
            debug!("no config file found, using defaults");
            TagRuleConfig::default()
        }
    };

    let targets = collect_targets(&args.path, !args.include_hidden)?;
    info!(files = targets.len(), format = args.format.as_str(), "scanning");

    let scanner = Scanner::new(&config);
    let scan_all = || -> Vec<ScanResult> {
        targets
            .iter()
            .map(|path| scanner.scan_file(path, args.language))
            .collect()
    };

    let mut results = scan_all();
    if args.fix {
        let mut fixed = 0;
        for (path, result) in targets.iter().zip(&results) {
            fixed += fix_file(path, &result.diagnostics)?;
        }
        if fixed > 0 {
            info!(edits = fixed, "rescanning fixed files");
            results = scan_all();
        }
    }

    let report = OutputFormatter::format(&results, args.format)?;
    match &args.output_file {
        Some(path) => fs::write(path, &report)
            .with_context(|| format!("Cannot write output: {}", path.display()))?,
        None if !args.quiet => print!("{report}"),
        None => {}
    }

    if results.iter().any(|r| r.has_errors()) {
        return Ok(ExitCode::from(2));
    }
    if results.iter().any(|r| r.diagnostic_count() > 0) {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
