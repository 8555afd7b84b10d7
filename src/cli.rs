use clap::Parser;
use dep_visualizer::application::dto::OutputFormat;
use dep_visualizer::config::SettingsOverrides;
use std::path::PathBuf;

/// Explore a package's dependency graph with depth and name filters
#[derive(Parser, Debug)]
#[command(name = "dep-visualizer")]
#[command(version)]
#[command(
    about = "Explore a package's dependency graph with depth and name filters",
    long_about = None
)]
pub struct Args {
    /// Path to a YAML config file (defaults to ./dep-visualizer.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Package (start node) to explore
    #[arg(short, long)]
    pub package: Option<String>,

    /// Manifest URL (remote mode) or graph file path (local mode)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Source mode: local or remote
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Image file to render (.png, .jpg, .jpeg, .svg)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Maximum traversal depth (0 = start node only)
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Drop every dependency whose name contains this substring
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Report format: text, json or dot
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Skip rendering the image with Graphviz
    #[arg(long)]
    pub no_render: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that replace config file values
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            package_name: self.package.clone(),
            repository: self.repository.clone(),
            mode: self.mode.clone(),
            output_file: self.output.clone(),
            max_depth: self.max_depth,
            filter_substring: self.filter.clone(),
        }
    }
}
