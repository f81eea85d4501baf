/// Everything a resolution can fail with.
///
/// Failures always propagate to the immediate caller; nothing in the crate
/// retries or degrades to a partial result. Callers branch on the variant:
/// `UnsupportedOption` means a single option exists nowhere in the
/// catalogue, `NoMatch` means every option is individually valid but no one
/// entry satisfies them jointly.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("network error while fetching {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("{field} {value:?} is not available in the image catalog")]
    UnsupportedOption { field: &'static str, value: String },

    #[error("no image matches the requested combination of options")]
    NoMatch,

    #[error("unknown virtualization type {0:?}")]
    UnknownVirtualization(String),

    #[error("{value:?} is not a supported {field}")]
    UnsupportedCombination { field: &'static str, value: String },
}

impl ResolveError {
    pub(crate) fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    pub(crate) fn decode(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
