use serde::Deserialize;
use std::collections::BTreeMap;

/// One distro/arch/release combination in the catalogue, owning every dated
/// build published for it.
#[derive(Debug, Deserialize)]
pub struct Product {
    #[serde(default)]
    arch: String,

    /// Base release version of the distribution, e.g. "16.04".
    #[serde(rename = "version", default)]
    release_version: String,

    #[serde(default)]
    versions: BTreeMap<String, super::Version>,
}

impl Product {
    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn release_version(&self) -> &str {
        &self.release_version
    }

    pub fn versions(&self) -> &BTreeMap<String, super::Version> {
        &self.versions
    }
}
