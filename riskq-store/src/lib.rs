//! # riskq-store
//!
//! Implementations of [`IRiskDataStore`](riskq_core::traits::IRiskDataStore):
//! a concurrent in-memory store, a read-through cache that can sit in front
//! of any store, and the field sink that connects debounced form fields to
//! a record in the store.

pub mod cached;
pub mod memory;
pub mod sink;
mod table;

pub use cached::CachedStore;
pub use memory::InMemoryStore;
pub use sink::{SinkTarget, StoreFieldSink};
