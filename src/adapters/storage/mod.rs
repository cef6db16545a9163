//! Storage Adapters
//!
//! Implementations of the ProfileStore port for persisting the onboarding profile.
//!
//! ## Available Adapters
//!
//! - **FsProfileStore** - Stores the profile as a JSON file on disk
//! - **InMemoryProfileStore** - Stores the profile in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FsProfileStore, InMemoryProfileStore};
//!
//! // Durable client-local storage
//! let store = FsProfileStore::new("./.persona-console", "onboarding-profile");
//!
//! // Testing: in-memory storage
//! let store = InMemoryProfileStore::new("onboarding-profile");
//! ```

mod fs_profile_store;
mod in_memory_profile_store;

pub use fs_profile_store::FsProfileStore;
pub use in_memory_profile_store::InMemoryProfileStore;
