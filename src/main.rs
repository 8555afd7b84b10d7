mod cli;

use cli::Args;
use dep_visualizer::adapters::outbound::console::StderrProgressReporter;
use dep_visualizer::adapters::outbound::filesystem::FileSystemReader;
use dep_visualizer::adapters::outbound::formatters::DotFormatter;
use dep_visualizer::adapters::outbound::network::HttpManifestFetcher;
use dep_visualizer::adapters::outbound::rendering::GraphvizRenderer;
use dep_visualizer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_visualizer::application::use_cases::VisualizeGraphUseCase;
use dep_visualizer::config;
use dep_visualizer::graph_analysis::domain::Settings;
use dep_visualizer::ports::outbound::{GraphFormatter, ImageRenderer};
use dep_visualizer::shared::error::ExitCode;
use dep_visualizer::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on failure)
    let args = Args::parse_args();

    let settings = load_settings(&args)?;

    // Create adapters (Dependency Injection)
    let local_fetcher = FileSystemReader::new();
    let remote_fetcher = HttpManifestFetcher::new()?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case = VisualizeGraphUseCase::new(local_fetcher, remote_fetcher, progress_reporter);
    let response = use_case.execute(&settings)?;

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format);
    let formatted_output = formatter.format(&response.report)?;

    let presenter = PresenterFactory::create(PresenterType::from_report_path(args.report.clone()));
    presenter.present(&formatted_output)?;

    if !args.no_render {
        let dot_source = DotFormatter::new().format(&response.report)?;
        let output_path = Path::new(settings.output_file());
        eprintln!("🖼️  Rendering graph image: {}", output_path.display());
        GraphvizRenderer::new().render(&dot_source, output_path)?;
        eprintln!("✅ Image written: {}", output_path.display());
    }

    Ok(())
}

/// Config file (explicit or discovered) merged with command-line overrides
fn load_settings(args: &Args) -> Result<Settings> {
    let config_file = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => {
            let current_dir = std::env::current_dir()?;
            config::discover_config(&current_dir)?.unwrap_or_default()
        }
    };

    config_file.apply_overrides(args.overrides()).into_settings()
}
