pub mod draft_store;
pub mod factory;
pub mod memory;
pub mod writer;

pub use draft_store::{DRAFT_KEY, DraftStore, StoreError};
pub use factory::{DraftStoreFactory, DraftStoreRegistry, StoreConfig};
pub use memory::{MemoryDraftStore, MemoryDraftStoreFactory};
pub use writer::DraftWriter;
