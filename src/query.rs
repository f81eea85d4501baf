use std::env;

/// The full set of filters a caller can supply for one resolution.
///
/// Every field is required by the core; `Default` fills in the conventional
/// values so hosts only override what they care about:
///
/// ```
/// use distro_image_resolver::SelectionQuery;
///
/// let query = SelectionQuery {
///     version: "16.04".to_string(),
///     region: "eu-west-1".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(query.store, "ebs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionQuery {
    /// Architecture string, e.g. "amd64" or "i386".
    pub arch: String,
    /// CoreOS update channel ("stable", "beta", "alpha").
    pub channel: String,
    /// Cloud region/datacenter code.
    pub region: String,
    /// Storage backend: "ebs", "ssd", "instance", ...
    pub store: String,
    /// Catalogue version label to pin, or "latest".
    pub subversion: String,
    /// Base release version of the distribution, e.g. "16.04"; "current"
    /// for the CoreOS endpoints.
    pub version: String,
    /// Virtualization mode: "hvm" or "pv".
    pub virtualization: String,
}

impl Default for SelectionQuery {
    fn default() -> Self {
        Self {
            arch: "amd64".to_string(),
            channel: "stable".to_string(),
            region: "us-west-2".to_string(),
            store: "ebs".to_string(),
            subversion: "latest".to_string(),
            version: "current".to_string(),
            virtualization: "hvm".to_string(),
        }
    }
}

impl SelectionQuery {
    /// Defaults, with the version selectors overridable from the
    /// environment (`CLOUD_DISTRO_VERSION`, `CLOUD_DISTRO_SUBVERSION`).
    pub fn from_env() -> Self {
        let mut query = Self::default();
        if let Ok(version) = env::var("CLOUD_DISTRO_VERSION") {
            query.version = version;
        }
        if let Ok(subversion) = env::var("CLOUD_DISTRO_SUBVERSION") {
            query.subversion = subversion;
        }
        query
    }
}
