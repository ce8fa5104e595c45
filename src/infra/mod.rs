//! Infrastructure adapters: storage backends behind capability traits.

pub mod store;

pub use store::{BookingStore, CatalogStore, JsonFileStore, MemoryStore, UserStore};
