//! Key-value storage abstraction and implementations for FinQuest.
//!
//! The progress tracker persists one serialized record under a fixed key.
//! This crate provides the store trait, an in-memory store for tests and
//! embedding, and a directory-backed JSON file store.

#![warn(missing_docs)]

pub mod trait_;
pub mod memory;
#[cfg(feature = "json")]
pub mod json_storage;

pub use trait_::{KeyValueStore, StorageError, Result};
pub use memory::MemoryStore;
#[cfg(feature = "json")]
pub use json_storage::JsonFileStore;
