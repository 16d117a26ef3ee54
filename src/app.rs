// src/app.rs
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use sloc_census_infra::{
    CargoManifestReader, FileMeasurer, JsonReportSource, JsonReportStore, WalkEnumerator,
    syntax_file::build_registry,
};
use sloc_census_usecase::{AnalyzeRepository, SummarizeReports};

use crate::{
    cli::{self, Args, Command, ScanArgs, SummarizeArgs},
    logging, presentation,
};

pub fn run() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = logging::init(cli::log_spec(&args.log)) {
        eprintln!("[warn] logger initialization failed: {e}");
    }

    match &args.command {
        Command::Scan(scan) => run_scan(scan),
        Command::Summarize(summarize) => run_summarize(summarize),
    }
}

fn run_scan(args: &ScanArgs) -> Result<()> {
    let config = cli::build_scan_config(args).context("invalid scan options")?;
    info!("sloc_census v{} · parallel={}", crate::VERSION, config.jobs);

    let registry = build_registry(args.syntax_file.as_deref()).context("failed to load language syntax")?;
    let enumerator = WalkEnumerator::new();
    let measurer = FileMeasurer::from_config(registry, &config);
    let manifests = CargoManifestReader::new();
    let store = args.out_dir.as_ref().map(JsonReportStore::new);

    let mut analyze = AnalyzeRepository::new(&enumerator, &measurer, &manifests);
    if let Some(store) = &store {
        analyze = analyze.with_sink(store);
    }
    let reports = analyze.run_all(&config).context("failed to analyze repositories")?;
    if reports.iter().all(|r| r.total_files.is_zero()) {
        warn!("no files found under the given paths");
    }

    presentation::emit_reports(&reports, args.output.format.into(), args.output.output.as_deref())
        .context("failed to emit output")
}

fn run_summarize(args: &SummarizeArgs) -> Result<()> {
    let config = cli::build_summary_config(args).context("invalid summarize options")?;
    let source = JsonReportSource::new();
    let summary = SummarizeReports::new(&source)
        .run(&args.reports, &config)
        .context("failed to summarize reports")?;

    presentation::emit_summary(&summary, args.output.format.into(), args.output.output.as_deref())
        .context("failed to emit output")
}
