//! Media Flag Store: the per-scene map of named placements, persisted in
//! host-managed scene flags. Single source of truth for bounded sprites.

mod backend;
mod change;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use backend::FlagBackend;
pub use change::{FlagChange, TOMBSTONE_PREFIX};
pub use memory::MemoryHost;
pub use store::MediaFlagStore;
