use dep_visualizer::prelude::*;

/// Mock SourceFetcher for testing that returns canned content
#[derive(Default, Clone)]
pub struct MockSourceFetcher {
    pub content: String,
    pub should_fail: bool,
    pub requested: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockSourceFetcher {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Default::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    pub fn requested_locations(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl SourceFetcher for MockSourceFetcher {
    fn fetch(&self, location: &str) -> Result<String> {
        self.requested.lock().unwrap().push(location.to_string());
        if self.should_fail {
            anyhow::bail!("Mock fetch failure for {}", location);
        }
        Ok(self.content.clone())
    }
}
