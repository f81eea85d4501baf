use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::cloud::{self, Catalog, ResolvedImage};
use crate::error::ResolveError;
use crate::query::SelectionQuery;

/// Simplestreams catalogue of released Ubuntu AWS images.
pub const CATALOG_URL: &str =
    "https://cloud-images.ubuntu.com/releases/streams/v1/com.ubuntu.cloud:released:aws.json";

/// Bound on the catalogue fetch; the documents are small, so anything
/// slower than this is treated as a transport failure.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of a catalogue document. The HTTP implementation is the real one;
/// tests inject in-memory fixtures to resolve without a network.
#[async_trait]
pub trait FetchCatalog: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog, ResolveError>;
}

/// Fetches the catalogue over HTTP with a single full-body GET.
pub struct HttpCatalog {
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl FetchCatalog for HttpCatalog {
    async fn fetch_catalog(&self) -> Result<Catalog, ResolveError> {
        let url = &self.url;
        debug!(%url, "fetching ubuntu image catalogue");

        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|err| ResolveError::network(url, err))?;

        let response = client
            .get(url)
            .header("User-Agent", "distro-image-resolver/1.0")
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| ResolveError::network(url, err))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ResolveError::network(url, err))?;

        let catalog: Catalog = serde_json::from_slice(&bytes)
            .map_err(|err| ResolveError::decode(url, err.to_string()))?;

        if catalog.is_empty() {
            return Err(ResolveError::decode(url, "catalog contains no products"));
        }

        Ok(catalog)
    }
}

/// One resolution session over the Ubuntu catalogue.
///
/// The catalogue is fetched at most once per session: the first successful
/// fetch fills the cell, concurrent callers are serialised on it, and a
/// failed fetch leaves it empty so a later call can try again. Sessions are
/// cheap to create; keep one alive across calls to reuse the catalogue.
pub struct UbuntuSession {
    source: Box<dyn FetchCatalog>,
    catalog: OnceCell<Catalog>,
}

impl UbuntuSession {
    /// Session against the fixed upstream catalogue URL.
    pub fn new() -> Self {
        Self::with_source(Box::new(HttpCatalog::new(CATALOG_URL)))
    }

    /// Session against an alternative catalogue URL (mock servers, mirrors).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::with_source(Box::new(HttpCatalog::new(url)))
    }

    /// Session with a fully injected catalogue source.
    pub fn with_source(source: Box<dyn FetchCatalog>) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    async fn catalog(&self) -> Result<&Catalog, ResolveError> {
        self.catalog
            .get_or_try_init(|| self.source.fetch_catalog())
            .await
    }

    /// Resolve a query against the (possibly cached) catalogue.
    pub async fn resolve(&self, query: &SelectionQuery) -> Result<ResolvedImage, ResolveError> {
        let catalog = self.catalog().await?;
        let selection = cloud::resolve(catalog, query)?;

        // The selection indexes into the catalogue we just searched, so the
        // lookups cannot miss.
        let product = &catalog.products()[&selection.product];
        let item = &product.versions()[&selection.version].items()[&selection.item];

        let name = format!("{}.{}", product.release_version(), selection.version);
        Ok(ResolvedImage::new(name, selection.identifier(), item.id()))
    }
}

impl Default for UbuntuSession {
    fn default() -> Self {
        Self::new()
    }
}
