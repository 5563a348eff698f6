//! Lock-guarded registry for use from multiple threads.

use std::sync::{Mutex, MutexGuard};

use dict_core::{DictId, TraceSink};

use crate::config::RegistryConfig;
use crate::registry::Registry;

/// A [`Registry`] behind one mutex, acquired once per operation.
///
/// The registry itself assumes a single logical caller; this wrapper is the
/// external mutual-exclusion discipline for embedders that share one
/// registry across threads. `find` returns an owned value since the lock
/// cannot outlive the call.
pub struct SharedRegistry {
    inner: Mutex<Registry>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::from_registry(Registry::with_config(config))
    }

    pub fn from_registry(registry: Registry) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }

    pub fn global_id(&self) -> DictId {
        self.lock().global_id()
    }

    pub fn set_debug(&self, debug: bool) {
        self.lock().set_debug(debug);
    }

    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink + Send>) {
        self.lock().set_trace_sink(sink);
    }

    pub fn contains(&self, id: DictId) -> bool {
        self.lock().contains(id)
    }

    pub fn dict_count(&self) -> usize {
        self.lock().dict_count()
    }

    pub fn create(&self) -> DictId {
        self.lock().create()
    }

    pub fn destroy(&self, id: DictId) {
        self.lock().destroy(id);
    }

    pub fn size(&self, id: DictId) -> usize {
        self.lock().size(id)
    }

    pub fn insert(&self, id: DictId, key: Option<&str>, value: Option<&str>) {
        self.lock().insert(id, key, value);
    }

    pub fn remove(&self, id: DictId, key: Option<&str>) {
        self.lock().remove(id, key);
    }

    pub fn find(&self, id: DictId, key: Option<&str>) -> Option<String> {
        self.lock().find(id, key).map(str::to_string)
    }

    pub fn clear(&self, id: DictId) {
        self.lock().clear(id);
    }

    pub fn copy(&self, src: DictId, dst: DictId) {
        self.lock().copy(src, dst);
    }

    /// Consumes the wrapper, returning the registry.
    pub fn into_inner(self) -> Registry {
        match self.inner.into_inner() {
            Ok(reg) => reg,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // Every operation leaves the registry in a valid state, so a poison
    // flag from a panicked holder carries no information; recover instead
    // of propagating to keep the public contract total.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
