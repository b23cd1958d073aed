//! In-memory repository implementation.
//!
//! One concrete store, [`MemoryRegistry`], implements every domain
//! repository trait behind a single lock so compound operations stay
//! atomic.

pub mod memory_registry;

pub use memory_registry::MemoryRegistry;
