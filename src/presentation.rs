// src/presentation.rs
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use sloc_census_domain::{analytics::OrgSummary, model::RepoReport, options::OutputFormat};
use sloc_census_infra::persistence::FileWriter;

/// Render scan results in `format` to `output` (stdout when `None`).
pub fn emit_reports(reports: &[RepoReport], format: OutputFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let mut writer = OutputWriter::create(output)?;
    match format {
        OutputFormat::Table => output_reports_table(reports, &mut writer)?,
        OutputFormat::Json => output_json(reports, &mut writer)?,
        OutputFormat::Csv => output_reports_csv(reports, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Render an organisation summary in `format` to `output` (stdout when `None`).
pub fn emit_summary(summary: &OrgSummary, format: OutputFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let mut writer = OutputWriter::create(output)?;
    match format {
        OutputFormat::Table => output_summary_table(summary, &mut writer)?,
        OutputFormat::Json => output_json(summary, &mut writer)?,
        OutputFormat::Csv => output_summary_csv(summary, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    fn create(output: Option<&Path>) -> anyhow::Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = output {
            Box::new(FileWriter::create(path)?)
        } else {
            Box::new(BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn output_json<T: Serialize + ?Sized>(value: &T, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn output_reports_table(reports: &[RepoReport], out: &mut impl Write) -> anyhow::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{}: {} files, {} SLOC, {} {} of SLOC ({} of files)",
            report.repo,
            report.total_files,
            report.total_sloc,
            report.primary.language,
            format_percent(report.primary.sloc_ratio),
            format_percent(report.primary.file_ratio),
        )?;
        if !report.unreadable_files.is_zero() {
            writeln!(out, "  unreadable files: {}", report.unreadable_files)?;
        }
        writeln!(out, "{:<20} {:>8} {:>10}", "LANGUAGE", "FILES", "SLOC")?;
        writeln!(out, "{}", "-".repeat(40))?;
        for totals in &report.languages {
            writeln!(out, "{:<20} {:>8} {:>10}", totals.language, totals.files, totals.sloc)?;
        }
        if !report.dependencies.is_empty() {
            writeln!(out, "dependencies: {}", report.dependencies.join(", "))?;
        }
        if !report.files.is_empty() {
            writeln!(out)?;
            writeln!(out, "{:>10}  {:<12} FILE", "SLOC", "LANGUAGE")?;
            for file in &report.files {
                let language = file.language.as_deref().unwrap_or("-");
                let mark = if file.readable { "" } else { " (unreadable)" };
                writeln!(out, "{:>10}  {:<12} {}{}", file.sloc, language, file.path.display(), mark)?;
            }
        }
    }
    Ok(())
}

fn output_reports_csv(reports: &[RepoReport], out: &mut impl Write) -> anyhow::Result<()> {
    let per_file = reports.iter().any(|r| !r.files.is_empty());
    if per_file {
        writeln!(out, "repo,path,language,sloc,readable")?;
        for report in reports {
            for file in &report.files {
                writeln!(
                    out,
                    "{},{},{},{},{}",
                    escape_field(&report.repo, ','),
                    escape_field(&file.path.display().to_string(), ','),
                    escape_field(file.language.as_deref().unwrap_or(""), ','),
                    file.sloc,
                    file.readable
                )?;
            }
        }
    } else {
        writeln!(out, "repo,language,files,sloc")?;
        for report in reports {
            for totals in &report.languages {
                writeln!(
                    out,
                    "{},{},{},{}",
                    escape_field(&report.repo, ','),
                    escape_field(&totals.language, ','),
                    totals.files,
                    totals.sloc
                )?;
            }
        }
    }
    Ok(())
}

fn write_ranked(title: &str, rows: &[(String, usize)], out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{title}")?;
    for (name, value) in rows {
        writeln!(out, "  {name:<20} {value:>10}")?;
    }
    writeln!(out)?;
    Ok(())
}

fn output_summary_table(summary: &OrgSummary, out: &mut impl Write) -> anyhow::Result<()> {
    let primary = if summary.has_mixed_primary() { "primary-language" } else { summary.primary_language.as_str() };
    writeln!(out, "{} repositories, {} with {primary} code", summary.repositories, summary.primary_repositories)?;
    if summary.has_mixed_primary() {
        let seen: Vec<String> =
            summary.primary_languages.iter().map(|(name, count)| format!("{name} x{count}")).collect();
        writeln!(out, "mixed primary languages: {}", seen.join(", "))?;
    }
    writeln!(out)?;
    write_ranked("Files per language", &summary.files_per_language, out)?;
    write_ranked("Repositories per language", &summary.repos_per_language, out)?;
    write_ranked("SLOC per language", &summary.sloc_per_language, out)?;

    writeln!(out, "Crate usage")?;
    for usage in &summary.crate_usage {
        writeln!(
            out,
            "  {:<24} {:>5} {:>7}",
            usage.name,
            usage.repos,
            format_percent(summary.usage_share(usage))
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Repositories by {} share (unique: used in <= {} repos)", summary.primary_language, summary.unique_threshold)?;
    for repo in &summary.repos {
        writeln!(
            out,
            "  {:<24} {:>7} {:>10} SLOC  deps {}/{}  unique: {}",
            repo.repo,
            format_percent(repo.primary_ratio),
            repo.primary_sloc,
            repo.filtered_dependencies,
            repo.total_dependencies,
            if repo.unique_crates.is_empty() { "-".to_string() } else { repo.unique_crates.join(", ") }
        )?;
    }
    Ok(())
}

fn output_summary_csv(summary: &OrgSummary, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "section,name,value")?;
    let sections = [
        ("files_per_language", &summary.files_per_language),
        ("repos_per_language", &summary.repos_per_language),
        ("sloc_per_language", &summary.sloc_per_language),
    ];
    for (section, rows) in sections {
        for (name, value) in rows {
            writeln!(out, "{section},{},{value}", escape_field(name, ','))?;
        }
    }
    for usage in &summary.crate_usage {
        writeln!(out, "crate_usage,{},{}", escape_field(&usage.name, ','), usage.repos)?;
    }
    for repo in &summary.repos {
        writeln!(out, "primary_ratio,{},{:.4}", escape_field(&repo.repo, ','), repo.primary_ratio)?;
    }
    Ok(())
}

/// Quote `field` only when it contains the separator, a quote or a line break.
fn escape_field(field: &str, sep: char) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
