//! In-process registry of string-to-string dictionaries.
//!
//! Dictionaries are addressed by numeric handle. One reserved dictionary,
//! the Global Dictionary, exists for the registry's whole lifetime and acts
//! as a size-bounded fallback namespace: a lookup that misses in any other
//! dictionary (or names a handle that no longer exists) is retried against
//! it before reporting "not found".
//!
//! Every operation is total. Invalid inputs degrade to no-ops or `None`,
//! never to an error the caller must handle.

pub mod config;
mod registry;
mod shared;

pub use config::{MAX_GLOBAL_DICT_SIZE, RegistryConfig};
pub use registry::Registry;
pub use shared::SharedRegistry;

// Re-exports from dict_core
pub use dict_core::{BufferTrace, DictId, GLOBAL_DICT_ID, NullTrace, StderrTrace, TraceSink};
