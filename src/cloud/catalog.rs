use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level container for the Simplestreams catalogue published by a cloud
/// image repository.
///
/// Products are kept in a `BTreeMap` so every walk over the catalogue visits
/// entries in key order; the match loops in the resolver rely on this for
/// reproducible results.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    products: BTreeMap<String, super::Product>,
}

impl Catalog {
    /// Borrow the catalogue entries keyed by their product identifier.
    pub fn products(&self) -> &BTreeMap<String, super::Product> {
        &self.products
    }

    /// A catalogue with no products is never cached; callers treat it the
    /// same as a failed fetch.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
