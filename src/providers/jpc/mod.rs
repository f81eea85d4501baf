use crate::cloud::ResolvedImage;
use crate::error::ResolveError;
use crate::query::SelectionQuery;

/// Joyent Public Cloud stub: the provider tag is recognized, but no
/// distribution has been implemented for it yet.
pub async fn resolve(
    distribution: &str,
    _query: &SelectionQuery,
) -> Result<ResolvedImage, ResolveError> {
    Err(ResolveError::UnsupportedCombination {
        field: "jpc distribution",
        value: distribution.to_string(),
    })
}
