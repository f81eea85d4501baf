/// Normalised result of a resolution, regardless of the upstream catalogue
/// format.
///
/// `name` and `id` are the two computed fields the host consumes; `image_id`
/// is the provider-native identifier (e.g. an AMI id) that the provisioning
/// tool actually boots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    name: String,
    id: String,
    image_id: String,
}

impl ResolvedImage {
    pub fn new(name: impl Into<String>, id: impl Into<String>, image_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            image_id: image_id.into(),
        }
    }

    /// Human readable display name, e.g. "16.04.20160627" or the literal
    /// CoreOS release version.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable opaque identity of the resolved resource (colon-joined), not
    /// the cloud image id itself.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The provider image id to pass to the provisioning tool.
    pub fn image_id(&self) -> &str {
        &self.image_id
    }
}
