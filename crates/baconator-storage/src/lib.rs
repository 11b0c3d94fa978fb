//! Baconator Storage - Storage backends for the actor/movie graph
//!
//! Only an in-memory backend exists; the graph lives for the lifetime of
//! the process.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use traits::{GraphStats, StorageBackend};
