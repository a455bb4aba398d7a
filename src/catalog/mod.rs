mod product;
mod traits;

pub use product::{CatalogCollection, Product};
pub use traits::CatalogProvider;
