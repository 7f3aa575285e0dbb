//! tagmap command line entry point.
//!
//! # Responsibility
//! - Read the notes file and configuration, run the analysis, print reports.
//! - Hand the full and most-popular node sets to the DOT renderer.

mod args;

use args::{Cli, OutputFormat};
use clap::Parser;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tagmap_core::{
    default_log_level, init_logging, AnalysisReport, AnalyzeError, CorpusSummary, DotRenderer,
    GraphRenderer, LoggingError, RenderError, TagLookup, TagMapAnalyzer, TagMapConfig,
};

#[derive(Debug)]
enum CliError {
    Logging(LoggingError),
    ReadFile { path: PathBuf, source: std::io::Error },
    ParseConfig { path: PathBuf, source: serde_json::Error },
    Analyze(AnalyzeError),
    Render(RenderError),
    Output(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::ReadFile { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::ParseConfig { path, source } => {
                write!(f, "invalid config file `{}`: {source}", path.display())
            }
            Self::Analyze(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to encode report: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::ReadFile { source, .. } => Some(source),
            Self::ParseConfig { source, .. } => Some(source),
            Self::Analyze(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<AnalyzeError> for CliError {
    fn from(value: AnalyzeError) -> Self {
        Self::Analyze(value)
    }
}

impl From<RenderError> for CliError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(CliError::Logging)?;
    }

    let analyzer = TagMapAnalyzer::new(load_config(&cli)?)?;
    let source = read_file(&cli.notes_file)?;
    let report = analyzer.analyze(source.lines())?;
    let config = analyzer.config();

    let mut rendered = Vec::new();
    if !cli.no_render {
        let renderer = DotRenderer::default();
        renderer.render(
            &report.full_graph,
            &report.full_nodes(),
            &config.full_graph_output,
        )?;
        rendered.push(("full", config.full_graph_output.as_path()));
        renderer.render(
            &report.full_graph,
            &report.popular_nodes(),
            &config.popular_graph_output,
        )?;
        rendered.push(("popular", config.popular_graph_output.as_path()));
    }

    match cli.format {
        OutputFormat::Text => print!("{}", format_text_report(&report, config, &rendered)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(CliError::Output)?;
            println!("{json}");
        }
    }

    info!(
        "event=cli_run module=cli status=ok rendered={} format={:?}",
        rendered.len(),
        cli.format
    );
    Ok(())
}

/// Builds the effective configuration: file values, then flag overrides.
fn load_config(cli: &Cli) -> Result<TagMapConfig, CliError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => {
            let raw = read_file(path)?;
            serde_json::from_str(&raw).map_err(|source| CliError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => TagMapConfig::default(),
    };

    if let Some(marker) = cli.marker {
        config.marker = marker;
    }
    if let Some(max_top_tags) = cli.max_top_tags {
        config.max_top_tags = max_top_tags;
    }
    if !cli.key_tags.is_empty() {
        config.key_tags = cli.key_tags.clone();
    }
    if let Some(path) = cli.full_graph.as_ref() {
        config.full_graph_output = path.clone();
    }
    if let Some(path) = cli.popular_graph.as_ref() {
        config.popular_graph_output = path.clone();
    }
    Ok(config)
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn format_text_report(
    report: &AnalysisReport,
    config: &TagMapConfig,
    rendered: &[(&str, &Path)],
) -> String {
    let mut lines = vec![
        format_summary(&report.summary, config.max_top_tags),
        format!(
            "full tag graph has {} nodes and {} edges",
            report.full_stats.nodes, report.full_stats.edges
        ),
        format!(
            "popular tag graph has {} nodes and {} edges",
            report.popular_stats.nodes, report.popular_stats.edges
        ),
    ];
    for (kind, path) in rendered {
        lines.push(format!("{kind} graph saved to file: '{}'", path.display()));
    }
    lines.extend(report.key_tags.iter().map(format_lookup));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn format_summary(summary: &CorpusSummary, max_top_tags: usize) -> String {
    let ranked = summary
        .top_tags
        .iter()
        .map(|entry| format!("{}:{}", entry.tag, entry.count))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} notes, {} tags, {} unique tags, {} most popular tags: {}",
        summary.note_count, summary.tag_occurrences, summary.distinct_tags, max_top_tags, ranked
    )
}

fn format_lookup(lookup: &TagLookup) -> String {
    match lookup {
        TagLookup::Found(report) => format!(
            "tag '{}' has weight {}, linked to: {}",
            report.tag,
            report.weight,
            report.neighbors.join(", ")
        ),
        TagLookup::NotFound { tag } => format!("error: invalid tag '{tag}'"),
    }
}
