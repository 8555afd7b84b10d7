use crate::application::dto::VisualizeResponse;
use crate::application::read_models::TraversalReport;
use crate::graph_analysis::domain::{DependencyGraph, GraphFormat, Settings, SourceMode};
use crate::graph_analysis::services::{parser_for, BoundedTraversal};
use crate::ports::outbound::{ProgressReporter, SourceFetcher};
use crate::shared::Result;

/// VisualizeGraphUseCase - fetch, parse and traverse one dependency graph
///
/// Collaborators are injected generically so tests can swap in mocks.
///
/// # Type Parameters
/// * `LF` - SourceFetcher for local paths
/// * `RF` - SourceFetcher for remote URLs
/// * `PR` - ProgressReporter implementation
pub struct VisualizeGraphUseCase<LF, RF, PR> {
    local_fetcher: LF,
    remote_fetcher: RF,
    progress_reporter: PR,
}

impl<LF, RF, PR> VisualizeGraphUseCase<LF, RF, PR>
where
    LF: SourceFetcher,
    RF: SourceFetcher,
    PR: ProgressReporter,
{
    /// Creates a new VisualizeGraphUseCase with injected dependencies
    pub fn new(local_fetcher: LF, remote_fetcher: RF, progress_reporter: PR) -> Self {
        Self {
            local_fetcher,
            remote_fetcher,
            progress_reporter,
        }
    }

    /// Executes the use case for one validated settings record
    ///
    /// # Errors
    /// Only fetch failures propagate; parsing and traversal cannot fail.
    pub fn execute(&self, settings: &Settings) -> Result<VisualizeResponse> {
        // Step 1: Load raw source text
        let content = self.fetch_source(settings)?;

        // Step 2: Parse with the strategy chosen for this run
        let graph = self.parse_graph(settings, &content);

        // Step 3: Bounded breadth-first traversal
        let traversal = BoundedTraversal::from_settings(settings);
        let result = traversal.traverse(&graph, settings.package_name());

        self.progress_reporter.report(&format!(
            "🔎 Traversed {} node(s) and {} edge(s) within depth {}",
            result.node_count(),
            result.edge_count(),
            settings.max_depth()
        ));
        self.warn_about_traversal(settings, &graph, result.filtered_count());

        // Step 4: Build response
        let report = TraversalReport::build(settings, &result);
        self.progress_reporter.report_completion(&format!(
            "✅ Dependency view ready: {} node(s) reachable from {}",
            report.node_count(),
            settings.package_name()
        ));
        Ok(VisualizeResponse::new(
            report,
            graph.node_count(),
            graph.edge_count(),
        ))
    }

    fn fetch_source(&self, settings: &Settings) -> Result<String> {
        match settings.mode() {
            SourceMode::Local => {
                self.progress_reporter.report(&format!(
                    "📖 Loading graph source from: {}",
                    settings.repository()
                ));
                self.local_fetcher.fetch(settings.repository())
            }
            SourceMode::Remote => {
                self.progress_reporter.begin_wait(&format!(
                    "🌐 Fetching manifest from: {}",
                    settings.repository()
                ));
                let content = self.remote_fetcher.fetch(settings.repository());
                if content.is_ok() {
                    self.progress_reporter.report("✅ Manifest downloaded");
                }
                content
            }
        }
    }

    fn parse_graph(&self, settings: &Settings, content: &str) -> DependencyGraph {
        let format = settings.graph_format();
        let graph = parser_for(format).parse(content, settings.package_name());

        match format {
            GraphFormat::Manifest => self.progress_reporter.report(&format!(
                "✅ Found {} direct dependency declaration(s) for {}",
                graph.dependencies_of(settings.package_name()).len(),
                settings.package_name()
            )),
            GraphFormat::Synthetic => self.progress_reporter.report(&format!(
                "✅ Parsed {} node(s) and {} edge(s) from {}",
                graph.node_count(),
                graph.edge_count(),
                format
            )),
        }

        graph
    }

    fn warn_about_traversal(&self, settings: &Settings, graph: &DependencyGraph, filtered: usize) {
        if settings.graph_format() == GraphFormat::Synthetic
            && !graph.contains_node(settings.package_name())
        {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Start node '{}' does not appear in the graph source.",
                settings.package_name()
            ));
        }

        if !settings.filter_substring().is_empty() {
            if filtered == 0 {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Filter '{}' did not match any dependency.",
                    settings.filter_substring()
                ));
            } else {
                self.progress_reporter.report(&format!(
                    "🚫 Filter '{}' suppressed {} identifier(s)",
                    settings.filter_substring(),
                    filtered
                ));
            }
        }
    }
}
