mod catalog;
mod image;
mod item;
mod product;
mod resolver;
mod version;

pub use catalog::Catalog;
pub use image::ResolvedImage;
pub use item::Item;
pub use product::Product;
pub use resolver::{Selection, resolve, validate};
pub use version::Version;
