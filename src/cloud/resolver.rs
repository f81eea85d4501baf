use tracing::debug;

use super::Catalog;
use crate::error::ResolveError;
use crate::query::SelectionQuery;

/// Index of a matched catalogue entry: which product, which version under
/// it, which item under that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub product: String,
    pub version: String,
    pub item: String,
}

impl Selection {
    /// Render the colon-joined stable identity handed back to the host.
    pub fn identifier(&self) -> String {
        format!("{}:{}:{}", self.product, self.version, self.item)
    }

    /// Parse an identifier produced by [`Selection::identifier`] back into
    /// its components. Product keys may themselves contain colons
    /// ("com.ubuntu.cloud:server:16.04:amd64"), so the version and item are
    /// split off the right-hand end.
    pub fn parse(identifier: &str) -> Option<Self> {
        let (rest, item) = identifier.rsplit_once(':')?;
        let (product, version) = rest.rsplit_once(':')?;
        if product.is_empty() || version.is_empty() || item.is_empty() {
            return None;
        }
        Some(Self {
            product: product.to_string(),
            version: version.to_string(),
            item: item.to_string(),
        })
    }
}

/// Check each requested option against the whole catalogue, one field at a
/// time.
///
/// The checks are deliberately independent of each other: a region passes as
/// long as *some* item anywhere uses it, even if no item combines it with
/// the requested store. This is what lets callers tell "check your spelling"
/// (`UnsupportedOption`) apart from "relax your constraints" (`NoMatch`).
/// Check order is fixed so the first reported failure is reproducible.
pub fn validate(catalog: &Catalog, query: &SelectionQuery) -> Result<(), ResolveError> {
    let unsupported = |field: &'static str, value: &str| ResolveError::UnsupportedOption {
        field,
        value: value.to_string(),
    };

    if !catalog
        .products()
        .values()
        .any(|product| product.arch() == query.arch)
    {
        return Err(unsupported("architecture", &query.arch));
    }

    if !any_item(catalog, |store, _, _| store == query.store) {
        return Err(unsupported("store", &query.store));
    }

    if !any_item(catalog, |_, region, _| region == query.region) {
        return Err(unsupported("region", &query.region));
    }

    if !any_item(catalog, |_, _, virt| virt == query.virtualization) {
        return Err(unsupported("virtualization", &query.virtualization));
    }

    Ok(())
}

fn any_item(catalog: &Catalog, pred: impl Fn(&str, &str, &str) -> bool) -> bool {
    catalog.products().values().any(|product| {
        product.versions().values().any(|version| {
            version
                .items()
                .values()
                .any(|item| pred(item.store(), item.region(), item.virtualization()))
        })
    })
}

/// Walk the catalogue applying every filter and return the index of the best
/// match.
///
/// Validation runs first, so an option that exists nowhere in the catalogue
/// surfaces as `UnsupportedOption` rather than `NoMatch`.
///
/// With `subversion == "latest"` the walk keeps a running maximum over
/// version labels, compared bytewise; labels that do not sort in release
/// order give a "latest" that is not the newest build. The maximum advances
/// on the label comparison alone, before items are inspected, so a greater
/// label with no satisfying item shadows a smaller one that would have
/// matched. Both are long-standing documented limitations of the catalogue
/// format, kept as-is.
///
/// When several items under the retained version match every filter, the
/// one with the greatest item key wins (later matches overwrite, and the
/// maps iterate in key order).
pub fn resolve(catalog: &Catalog, query: &SelectionQuery) -> Result<Selection, ResolveError> {
    validate(catalog, query)?;

    let mut selected: Option<Selection> = None;
    let mut max_version = String::new();

    for (product_name, product) in catalog.products() {
        if product.arch() != query.arch || product.release_version() != query.version {
            continue;
        }
        for (version_name, version) in product.versions() {
            if query.subversion != "latest" && *version_name != query.subversion {
                continue;
            }
            if query.subversion == "latest" && *version_name <= max_version {
                continue;
            }
            max_version = version_name.clone();
            for (item_name, item) in version.items() {
                if item.region() != query.region
                    || item.store() != query.store
                    || item.virtualization() != query.virtualization
                {
                    continue;
                }
                selected = Some(Selection {
                    product: product_name.clone(),
                    version: version_name.clone(),
                    item: item_name.clone(),
                });
            }
        }
    }

    match selected {
        Some(selection) => {
            debug!(
                product = %selection.product,
                version = %selection.version,
                item = %selection.item,
                "catalogue match"
            );
            Ok(selection)
        }
        None => Err(ResolveError::NoMatch),
    }
}
