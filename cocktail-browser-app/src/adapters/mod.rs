//! Storage adapters for the `KeyValueStore` trait.

mod memory_store;

pub use memory_store::InMemoryStore;

#[cfg(feature = "json-store")]
mod json_file_store;

#[cfg(feature = "json-store")]
pub use json_file_store::JsonFileStore;
