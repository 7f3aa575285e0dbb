//! Command line definition.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Graph analysis of tagged notes.
#[derive(Debug, Parser)]
#[command(name = "tagmap", version, about = "Graph analysis of tagged notes")]
pub struct Cli {
    /// File with one note per line.
    #[arg(value_parser = existing_file)]
    pub notes_file: PathBuf,

    /// JSON configuration file; flags below override its values.
    #[arg(long, value_parser = existing_file)]
    pub config: Option<PathBuf>,

    /// Character that prefixes a tag.
    #[arg(long)]
    pub marker: Option<char>,

    /// Size of the most-popular ranking.
    #[arg(long = "top")]
    pub max_top_tags: Option<usize>,

    /// Tag to report neighbors for (repeatable).
    #[arg(long = "tag", value_name = "TAG")]
    pub key_tags: Vec<String>,

    /// Output path for the full graph.
    #[arg(long)]
    pub full_graph: Option<PathBuf>,

    /// Output path for the most-popular graph.
    #[arg(long)]
    pub popular_graph: Option<PathBuf>,

    /// Skip writing graph files.
    #[arg(long)]
    pub no_render: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level used when `--log-dir` is set.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for rolling log files; logging is off without it.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("no such file: {value}"))
    }
}
