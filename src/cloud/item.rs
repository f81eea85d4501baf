use serde::Deserialize;

/// One concrete image variant: a region, a storage backend, a virtualization
/// mode and the provider image id to hand to the provisioning tool.
///
/// Field names follow the Simplestreams AWS document (`crsn` is the region
/// code, `root_store` the storage backend, `virt` the virtualization mode).
#[derive(Debug, Deserialize)]
pub struct Item {
    #[serde(rename = "crsn", default)]
    region: String,

    #[serde(rename = "root_store", default)]
    store: String,

    #[serde(rename = "virt", default)]
    virtualization: String,

    #[serde(default)]
    id: String,
}

impl Item {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn virtualization(&self) -> &str {
        &self.virtualization
    }

    /// The opaque image id, e.g. an AMI id.
    pub fn id(&self) -> &str {
        &self.id
    }
}
