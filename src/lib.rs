//! Resolve a symbolic cloud image description (distro, version, arch,
//! store, virtualization, region) into a concrete provider image id and a
//! display name.
//!
//! The usual entry point is [`resolve_image`], which dispatches on a cloud
//! provider and distribution tag. Hosts that resolve repeatedly should hold
//! a provider session ([`providers::aws::ubuntu::UbuntuSession`]) so the
//! catalogue fetch is shared across calls.

pub mod cloud;
pub mod error;
pub mod providers;
pub mod query;

pub use cloud::{Catalog, ResolvedImage, Selection};
pub use error::ResolveError;
pub use providers::resolve_image;
pub use query::SelectionQuery;
