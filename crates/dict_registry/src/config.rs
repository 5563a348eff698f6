//! Registry configuration.

/// Upper bound on the Global Dictionary's key count. Inserting a brand-new
/// key into the Global Dictionary once it holds this many entries is a
/// no-op; overwriting an existing key is always allowed. No other
/// dictionary is bounded.
pub const MAX_GLOBAL_DICT_SIZE: usize = 42;

/// Registry configuration options.
#[derive(Clone, Copy, Debug)]
pub struct RegistryConfig {
    /// Emit one trace line per operation call and per outcome. Off by
    /// default; the trace carries no semantic weight.
    pub debug: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { debug: false }
    }
}
