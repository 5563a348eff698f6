//! Core types for the dictionary registry.
//!
//! This crate contains the fundamental types that are independent of the
//! registry itself:
//! - `FastHashMap` - hashbrown map with an ahash hasher
//! - `DictId` - handle identifying one dictionary instance
//! - `TraceSink` - injectable sink for the debug trace side channel

pub mod id;
pub mod map;
pub mod trace;

pub use id::{DictId, GLOBAL_DICT_ID, IdAllocator};
pub use map::{Dict, FastHashMap, fast_map_new, fast_map_with_capacity};
pub use trace::{BufferTrace, NullTrace, StderrTrace, TraceSink};
