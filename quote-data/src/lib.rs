pub mod loader;
pub mod report;

pub use loader::{CatalogLoader, CatalogLoaderError, CatalogRecord};
pub use report::{format_money, format_range, render_breakdown};
