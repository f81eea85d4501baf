pub mod coreos;
pub mod ubuntu;

use tracing::debug;

use crate::cloud::ResolvedImage;
use crate::error::ResolveError;
use crate::query::SelectionQuery;

/// Route an AWS resolution to the distribution-specific lookup. Each call
/// builds a fresh session, so the catalogue cache lives for exactly one
/// resolution; hold a session directly to amortize the fetch across calls.
pub async fn resolve(
    distribution: &str,
    query: &SelectionQuery,
) -> Result<ResolvedImage, ResolveError> {
    match distribution {
        "coreos" => {
            debug!("searching aws for a CoreOS image");
            coreos::CoreOsSession::new().resolve(query).await
        }
        "ubuntu" => {
            debug!("searching aws for an Ubuntu image");
            ubuntu::UbuntuSession::new().resolve(query).await
        }
        other => Err(ResolveError::UnsupportedCombination {
            field: "aws distribution",
            value: other.to_string(),
        }),
    }
}
