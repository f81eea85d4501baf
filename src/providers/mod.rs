pub mod aws;
pub mod jpc;

use std::env;

use tracing::debug;

use crate::cloud::ResolvedImage;
use crate::error::ResolveError;
use crate::query::SelectionQuery;

/// Top-level entry point: route a resolution to the matching provider and
/// distribution. Holds no logic of its own; unrecognized tags fail with the
/// offending value named.
pub async fn resolve_image(
    provider: &str,
    distribution: &str,
    query: &SelectionQuery,
) -> Result<ResolvedImage, ResolveError> {
    debug!(provider, distribution, "dispatching image resolution");
    match provider {
        "aws" => aws::resolve(distribution, query).await,
        "jpc" => jpc::resolve(distribution, query).await,
        other => Err(ResolveError::UnsupportedCombination {
            field: "cloud provider",
            value: other.to_string(),
        }),
    }
}

/// The cloud provider has no built-in default; hosts conventionally supply
/// it through `CLOUD_PROVIDER`.
pub fn provider_from_env() -> Option<String> {
    env::var("CLOUD_PROVIDER").ok()
}

/// Distribution tag, defaulting to "coreos" as the original tooling did.
pub fn distribution_from_env() -> String {
    env::var("CLOUD_DISTRO").unwrap_or_else(|_| "coreos".to_string())
}
