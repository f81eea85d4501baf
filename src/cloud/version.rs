use serde::Deserialize;
use std::collections::BTreeMap;

/// One dated build of a product, keyed by an opaque item label per variant.
#[derive(Debug, Deserialize)]
pub struct Version {
    #[serde(default)]
    items: BTreeMap<String, super::Item>,
}

impl Version {
    pub fn items(&self) -> &BTreeMap<String, super::Item> {
        &self.items
    }
}
