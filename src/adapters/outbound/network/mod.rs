/// Network adapters for fetching remote manifests
mod http_fetcher;

pub use http_fetcher::HttpManifestFetcher;
