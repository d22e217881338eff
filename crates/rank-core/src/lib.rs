//! # rank-core
//!
//! Bounded ranked containers and the utilities around them:
//!
//! - **Containers** (`list`, `heap`, `container`) — fixed-capacity structures
//!   that keep the K largest values offered and evict the smallest
//! - **Sort order** (`order`) — ascending / descending snapshots
//! - **Selection** (`select`) — top-n / bottom-n keys of a mapping by one field
//! - **Error types** (`error`) — domain-specific `RankError` via thiserror
//! - **Logging** (`logging`) — tracing-based logging and the `Logger` trait
//! - **Memory** (`memory`) — resident memory probe for the current process
//! - **Configuration** (`config`) — JSON config deserialization

pub mod config;
pub mod container;
pub mod error;
pub mod heap;
pub mod list;
pub mod logging;
pub mod memory;
pub mod order;
pub mod select;

pub use container::RankedContainer;
pub use error::RankError;
pub use heap::RankedHeap;
pub use list::{Handle, RankedList};
pub use order::Order;
