//! Eviction policy cores.
//!
//! Each submodule implements one replacement strategy as a standalone,
//! generic, single-threaded core. All four implement
//! [`EvictionPolicy`](crate::traits::EvictionPolicy); callers that want a
//! runtime-selected policy go through
//! [`BoundedCache`](crate::cache::BoundedCache) instead of using the cores
//! directly.
//!
//! | Policy | Eviction basis        | `get` side effect    | Tie-break          |
//! |--------|-----------------------|----------------------|--------------------|
//! | LRU    | Last access time      | Moves entry to front | none (total order) |
//! | LFU    | Access frequency      | Bumps frequency      | oldest in bucket   |
//! | FIFO   | Insertion order       | None                 | none (total order) |
//! | Random | Uniform random choice | None                 | n/a                |

pub mod fifo;
pub mod lfu;
pub mod lru;
pub mod random;
