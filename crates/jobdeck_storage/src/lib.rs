#![forbid(unsafe_code)]

pub mod collections;
pub mod ids;
pub mod repo;
pub mod store;

pub use repo::{ApplicationRepo, JobBoard, JobRepo, WishlistRepo, WishlistState};
pub use store::{KeyValueStore, LocalStore, MemoryStore, StorageError};
