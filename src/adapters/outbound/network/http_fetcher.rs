use crate::ports::outbound::SourceFetcher;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// HttpManifestFetcher adapter for downloading manifests over HTTPS
///
/// Implements the SourceFetcher port for remote mode with a blocking client:
/// the run has nothing else to do while the single request is in flight.
///
/// # Security
/// - Only `https://` URLs are accepted
/// - Requests time out after 10 seconds
pub struct HttpManifestFetcher {
    client: Client,
    max_retries: u32,
}

impl HttpManifestFetcher {
    const TIMEOUT_SECONDS: u64 = 10;
    const MANIFEST_FILE: &'static str = "Cargo.toml";

    /// Creates a new fetcher with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dep-visualizer/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: 3,
        })
    }

    /// Resolves the repository setting to the URL that serves the manifest
    ///
    /// `https://github.com/<owner>/<repo>` is rewritten to the raw manifest at
    /// the repository's default branch. Every other https URL is used as is.
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or is not https
    pub fn manifest_url(repository: &str) -> Result<Url> {
        let url = Url::parse(repository.trim()).map_err(|e| VisualizerError::InvalidUrl {
            url: repository.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "https" {
            return Err(VisualizerError::InvalidUrl {
                url: repository.to_string(),
                reason: format!("Unsupported scheme '{}'; only https is allowed", url.scheme()),
            }
            .into());
        }

        if url.host_str() == Some("github.com") {
            let segments: Vec<&str> = url
                .path_segments()
                .map(|segments| segments.filter(|s| !s.is_empty()).collect())
                .unwrap_or_default();

            if let [owner, repo] = segments.as_slice() {
                let repo = repo.trim_end_matches(".git");
                let raw = format!(
                    "https://raw.githubusercontent.com/{}/{}/HEAD/{}",
                    owner,
                    repo,
                    Self::MANIFEST_FILE
                );
                return Url::parse(&raw).map_err(|e| {
                    VisualizerError::InvalidUrl {
                        url: repository.to_string(),
                        reason: e.to_string(),
                    }
                    .into()
                });
            }
        }

        Ok(url)
    }

    /// Fetches with retry and linear backoff
    fn fetch_with_retry(&self, url: &Url) -> Result<String> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once(url) {
                Ok(body) => return Ok(body),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No fetch attempt was made")))
    }

    fn fetch_once(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send()?;

        if !response.status().is_success() {
            anyhow::bail!("Server returned status code {}", response.status());
        }

        Ok(response.text()?)
    }
}

impl SourceFetcher for HttpManifestFetcher {
    fn fetch(&self, location: &str) -> Result<String> {
        let url = Self::manifest_url(location)?;

        self.fetch_with_retry(&url).map_err(|e| {
            VisualizerError::FetchError {
                url: url.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
