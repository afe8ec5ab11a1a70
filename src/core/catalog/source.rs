use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::CatalogConfig;
use crate::utils::{Error, MoviepickResult};

use super::{parser, Catalog};

/// Where the raw catalog CSV comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> MoviepickResult<String>;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> MoviepickResult<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::Other(format!(
                "Failed to read catalog file '{}': {e}",
                self.path.display()
            ))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String, timeout: Duration) -> MoviepickResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> MoviepickResult<String> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "text/csv, text/plain")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Other(format!(
                "Catalog request failed: HTTP {status} body={body}"
            )));
        }

        Ok(resp.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

fn is_http_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

pub fn source_from_config(cfg: &CatalogConfig) -> MoviepickResult<Box<dyn CatalogSource>> {
    if is_http_url(&cfg.source) {
        let timeout = Duration::from_secs(cfg.timeout_secs);
        Ok(Box::new(HttpSource::new(cfg.source.clone(), timeout)?))
    } else {
        Ok(Box::new(FileSource::new(&cfg.source)))
    }
}

/// Fetch and parse the catalog once. Any failure is logged and yields an empty catalog.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    let origin = source.describe();
    debug!(target: "moviepick::catalog", source = %origin, "Fetching catalog");

    match source.fetch().await {
        Ok(raw) => {
            let catalog = Catalog::new(parser::parse_csv(&raw));
            if catalog.is_empty() {
                warn!(target: "moviepick::catalog", source = %origin, "Catalog has no movies");
            }
            info!(target: "moviepick::catalog", source = %origin, movies = catalog.len(), "Catalog loaded");
            catalog
        }
        Err(e) => {
            error!(target: "moviepick::catalog", source = %origin, "Error loading CSV: {e}");
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch(&self) -> MoviepickResult<String> {
            Err(Error::Other("unreachable".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn file_source_loads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title,year,size,genre").unwrap();
        writeln!(file, "Alien,1979,700 MB,Horror").unwrap();
        writeln!(file, r#""Heat",1995,2.1 GB,"Crime, Thriller""#).unwrap();

        let catalog = load_catalog(&FileSource::new(file.path())).await;
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("Heat", "1995").is_some());
    }

    #[tokio::test]
    async fn missing_file_yields_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = load_catalog(&FileSource::new(dir.path().join("nope.csv"))).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn header_only_file_yields_empty_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title,year,size,genre").unwrap();

        let catalog = load_catalog(&FileSource::new(file.path())).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_yields_empty_catalog() {
        let catalog = load_catalog(&FailingSource).await;
        assert!(catalog.is_empty());
    }

    #[test]
    fn source_kind_follows_scheme() {
        let http = CatalogConfig { source: "HTTPS://example.org/movies.csv".to_string(), timeout_secs: 5 };
        assert_eq!(source_from_config(&http).unwrap().describe(), "HTTPS://example.org/movies.csv");
        assert!(is_http_url("http://localhost/movies.csv"));
        assert!(!is_http_url("./movies.csv"));

        let file = CatalogConfig { source: "movies.csv".to_string(), timeout_secs: 5 };
        assert_eq!(source_from_config(&file).unwrap().describe(), "movies.csv");
    }
}
