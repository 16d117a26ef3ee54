// src/cli/mod.rs
mod args;
mod parsers;
mod value_enum;

pub use args::{Args, Command, LogOptions, OutputOptions, ScanArgs, SummarizeArgs};
pub use value_enum::{CliLogLevel, CliOutputFormat};

use sloc_census_domain::config::{ExcludeDirs, ScanConfig, SummaryConfig};
use sloc_census_shared_kernel::{PresentationError, Result};

/// 並列数の既定値（論理 CPU 数、上限 512）
fn default_jobs() -> usize {
    num_cpus::get().clamp(1, 512)
}

/// `scan` の引数から検証済みの設定を組み立てる
///
/// # Errors
///
/// 除外 glob が不正な場合や設定の検証に失敗した場合にエラーを返します。
pub fn build_scan_config(args: &ScanArgs) -> Result<ScanConfig> {
    let exclude_dirs = ExcludeDirs::new(args.exclude_dir.iter().map(|p| p.trim().to_string()))?;
    let ext_filters = args.ext.iter().filter_map(|e| parsers::normalize_extension(e)).collect();

    let config = ScanConfig {
        roots: args.paths.clone(),
        hidden: args.hidden,
        follow: args.follow,
        no_default_prune: args.no_default_prune,
        exclude_dirs,
        ext_filters,
        jobs: args.jobs.unwrap_or_else(default_jobs),
        primary_language: args.primary.trim().to_string(),
        per_file: args.per_file,
        strict: args.strict,
    };
    config.validate()?;
    Ok(config)
}

/// `summarize` の引数から設定を組み立てる
///
/// # Errors
///
/// 除外クレート名が空の場合にエラーを返します。
pub fn build_summary_config(args: &SummarizeArgs) -> Result<SummaryConfig> {
    let mut config = SummaryConfig {
        unique_threshold: args.threshold,
        strict: args.strict,
        ..SummaryConfig::default()
    };
    if args.no_default_ignores {
        config.ignored_crates.clear();
    }
    for name in &args.ignore_crate {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresentationError::InvalidValue {
                flag: "--ignore-crate".to_string(),
                value: String::new(),
                reason: "crate name must not be empty".to_string(),
            }
            .into());
        }
        config.ignored_crates.insert(name.to_string());
    }
    Ok(config)
}

/// ログ指定を解決する。`--log-level` が最優先、次に `--quiet`、最後に `-v` の回数
pub fn log_spec(opts: &LogOptions) -> &'static str {
    if let Some(level) = opts.log_level {
        return level.as_spec();
    }
    if opts.quiet {
        return "error";
    }
    match opts.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
