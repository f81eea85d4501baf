use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::cloud::ResolvedImage;
use crate::error::ResolveError;
use crate::query::SelectionQuery;

/// Release endpoint template; `{}` is replaced by the update channel.
pub const RELEASE_ROOT_TEMPLATE: &str = "http://{}.release.core-os.net/amd64-usr";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-region AMI record as published in `coreos_production_ami_all.json`.
#[derive(Debug, Deserialize)]
struct AmiRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    pv: String,
    #[serde(default)]
    hvm: String,
}

#[derive(Debug, Deserialize)]
struct AmiDocument {
    #[serde(default)]
    amis: Vec<AmiRecord>,
}

/// Degenerate resolution path for CoreOS: the release endpoint already
/// encodes the resolved version in its URL, so there is no catalogue to
/// search — one version string and one region-keyed AMI table.
pub struct CoreOsSession {
    root_template: String,
}

impl CoreOsSession {
    /// Session against the upstream release endpoints.
    pub fn new() -> Self {
        Self::with_root_template(RELEASE_ROOT_TEMPLATE)
    }

    /// Session against an alternative endpoint root. A template without the
    /// `{}` placeholder (e.g. a mock server URL) is used verbatim for every
    /// channel.
    pub fn with_root_template(template: impl Into<String>) -> Self {
        Self {
            root_template: template.into(),
        }
    }

    fn release_root(&self, query: &SelectionQuery) -> String {
        self.root_template.replacen("{}", &query.channel, 1)
    }

    /// Resolve the version string and the AMI for the requested
    /// region/virtualization.
    pub async fn resolve(&self, query: &SelectionQuery) -> Result<ResolvedImage, ResolveError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|err| ResolveError::network(self.release_root(query), err))?;

        let version = self.fetch_version(&client, query).await?;
        let image_id = self.fetch_ami(&client, query).await?;

        let id = format!("{}:{}", query.channel, query.version);
        Ok(ResolvedImage::new(version, id, image_id))
    }

    async fn fetch_version(
        &self,
        client: &Client,
        query: &SelectionQuery,
    ) -> Result<String, ResolveError> {
        let url = format!("{}/{}/version.txt", self.release_root(query), query.version);
        debug!(%url, "fetching CoreOS version document");

        let body = fetch_text(client, &url).await?;
        parse_version_document(&body)
            .ok_or_else(|| ResolveError::decode(&url, "missing COREOS_VERSION key"))
    }

    async fn fetch_ami(
        &self,
        client: &Client,
        query: &SelectionQuery,
    ) -> Result<String, ResolveError> {
        let url = format!(
            "{}/{}/coreos_production_ami_all.json",
            self.release_root(query),
            query.version
        );
        debug!(%url, "fetching CoreOS AMI table");

        let body = fetch_text(client, &url).await?;
        let document: AmiDocument = serde_json::from_str(&body)
            .map_err(|err| ResolveError::decode(&url, err.to_string()))?;

        for record in &document.amis {
            if record.name != query.region {
                continue;
            }
            return match query.virtualization.as_str() {
                "pv" => Ok(record.pv.clone()),
                "hvm" => Ok(record.hvm.clone()),
                other => Err(ResolveError::UnknownVirtualization(other.to_string())),
            };
        }
        Err(ResolveError::NoMatch)
    }
}

impl Default for CoreOsSession {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_text(client: &Client, url: &str) -> Result<String, ResolveError> {
    let response = client
        .get(url)
        .header("User-Agent", "distro-image-resolver/1.0")
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|err| ResolveError::network(url, err))?;

    response
        .text()
        .await
        .map_err(|err| ResolveError::network(url, err))
}

/// Pull `COREOS_VERSION` out of the INI-like `version.txt` body. Section
/// headers and comments are skipped; only a bare `KEY=value` line counts.
fn parse_version_document(body: &str) -> Option<String> {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') || line.starts_with('[')
        {
            continue;
        }
        if let Some((key, value)) = line.split_once('=')
            && key.trim() == "COREOS_VERSION"
        {
            return Some(value.trim().to_string());
        }
    }
    None
}
