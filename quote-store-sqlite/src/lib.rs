pub mod factory;
pub mod store;

pub use factory::{SqliteDraftStoreFactory, connection_url};
pub use store::SqliteDraftStore;
