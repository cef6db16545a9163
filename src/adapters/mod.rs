//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Profile store implementations (filesystem, in-memory)

pub mod storage;

pub use storage::{FsProfileStore, InMemoryProfileStore};
