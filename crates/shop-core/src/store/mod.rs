//! Store Layer
//!
//! Key/value persistence abstraction and the persisted cart store.

mod traits;
mod memory;
mod cart_store;

pub use traits::{KeyValueStore, StorageError, StorageResult};
pub use memory::MemoryStore;
pub use cart_store::{CartStore, SubscriptionId};
