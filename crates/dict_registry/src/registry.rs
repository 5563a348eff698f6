//! The dictionary registry and its operations.

use dict_core::trace::{dict_label, quoted};
use dict_core::{
    Dict, DictId, FastHashMap, GLOBAL_DICT_ID, IdAllocator, StderrTrace, TraceSink, fast_map_new,
};

use crate::config::{MAX_GLOBAL_DICT_SIZE, RegistryConfig};

/// Internal result of a single-dictionary probe, kept as a named tri-state
/// so the public contract (which collapses "no such dictionary" and "no such
/// key" into the same fallback path) stays auditable.
enum Lookup<'a> {
    Found(&'a str),
    MissingKey,
    NoDict,
}

/// Internal result of the shared insertion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PutOutcome {
    Stored,
    RejectedFull,
    NoDict,
}

/// Registry of independent string-to-string dictionaries.
///
/// Construction pre-allocates the Global Dictionary, so `GLOBAL_DICT_ID` is
/// valid for the registry's whole lifetime. All state is owned here; the
/// registry is `Send` and can be handed to another thread wholesale, but it
/// performs no locking of its own (see [`crate::SharedRegistry`]).
pub struct Registry {
    dicts: FastHashMap<DictId, Dict>,
    ids: IdAllocator,
    config: RegistryConfig,
    sink: Box<dyn TraceSink + Send>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let mut reg = Self {
            dicts: fast_map_new(),
            ids: IdAllocator::new(),
            config,
            sink: Box::new(StderrTrace),
        };
        let global = reg.ids.alloc();
        reg.dicts.insert(global, fast_map_new());
        reg
    }

    /// The reserved handle of the Global Dictionary.
    pub fn global_id(&self) -> DictId {
        GLOBAL_DICT_ID
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Replaces the trace sink. The sink only sees lines while `debug` is
    /// set and never influences operation results.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink + Send>) {
        self.sink = sink;
    }

    /// Whether a dictionary with this handle currently exists. Unlike
    /// [`Registry::size`], this distinguishes a missing dictionary from an
    /// empty one.
    pub fn contains(&self, id: DictId) -> bool {
        self.dicts.contains_key(&id)
    }

    /// Number of dictionaries currently in the registry (the Global
    /// Dictionary included).
    pub fn dict_count(&self) -> usize {
        self.dicts.len()
    }

    /// Allocates a fresh handle and an empty dictionary under it. Never
    /// fails; handles are never reused.
    pub fn create(&mut self) -> DictId {
        self.trace(|| "create()".to_string());

        let id = self.ids.alloc();
        self.dicts.insert(id, fast_map_new());

        self.trace(|| format!("create: dict {id} has been created"));
        id
    }

    /// Removes the dictionary with this handle and discards its entries.
    /// The Global Dictionary is protected; destroying it (or a handle that
    /// does not exist) is a no-op.
    pub fn destroy(&mut self, id: DictId) {
        self.trace(|| format!("destroy({id})"));

        if id.is_global() {
            self.trace(|| "destroy: an attempt to remove the Global Dictionary".to_string());
            return;
        }

        if self.dicts.remove(&id).is_none() {
            self.trace(|| format!("destroy: {} does not exist", dict_label(id)));
            return;
        }
        self.trace(|| format!("destroy: {} has been deleted", dict_label(id)));
    }

    /// Entry count of the dictionary, or 0 if the handle does not exist.
    /// The two cases are deliberately indistinguishable here; callers that
    /// need the distinction use [`Registry::contains`].
    pub fn size(&self, id: DictId) -> usize {
        self.trace(|| format!("size({id})"));

        let Some(dict) = self.dicts.get(&id) else {
            self.trace(|| format!("size: {} does not exist", dict_label(id)));
            return 0;
        };

        self.trace(|| {
            format!(
                "size: {} contains {} element(s)",
                dict_label(id),
                dict.len()
            )
        });
        dict.len()
    }

    /// Inserts or overwrites `key -> value` in the dictionary. Silent no-op
    /// when the key or value is absent, when the key is empty, when the
    /// handle does not exist, or when the Global Dictionary is at capacity
    /// and the key is genuinely new. Overwriting an existing global key is
    /// always allowed.
    pub fn insert(&mut self, id: DictId, key: Option<&str>, value: Option<&str>) {
        self.trace(|| format!("insert({id}, {}, {})", quoted(key), quoted(value)));

        let key = valid_key(key);
        if key.is_none() {
            self.trace(|| {
                format!(
                    "insert: {}, an attempt to insert an absent key",
                    dict_label(id)
                )
            });
        }
        if value.is_none() {
            self.trace(|| {
                format!(
                    "insert: {}, an attempt to insert an absent value",
                    dict_label(id)
                )
            });
        }
        let (Some(key), Some(value)) = (key, value) else {
            return;
        };

        if !self.dicts.contains_key(&id) {
            self.trace(|| format!("insert: {} does not exist", dict_label(id)));
            return;
        }
        self.put(id, key, value);
    }

    /// Deletes `key` from the dictionary if present. No-op when the handle
    /// or the key does not exist. The Global Dictionary gets no protection
    /// here.
    pub fn remove(&mut self, id: DictId, key: Option<&str>) {
        self.trace(|| format!("remove({id}, {})", quoted(key)));

        let Some(key) = valid_key(key) else {
            self.trace(|| "remove: an attempt to remove an absent key".to_string());
            return;
        };

        let Some(dict) = self.dicts.get_mut(&id) else {
            self.trace(|| format!("remove: {} does not exist", dict_label(id)));
            return;
        };
        let removed = dict.remove(key).is_some();

        if removed {
            self.trace(|| {
                format!(
                    "remove: {}, the key {} has been removed",
                    dict_label(id),
                    quoted(Some(key))
                )
            });
        } else {
            self.trace(|| {
                format!(
                    "remove: {} does not contain the key {}",
                    dict_label(id),
                    quoted(Some(key))
                )
            });
        }
    }

    /// Looks up `key`, applying the fallback chain: a miss in a regular
    /// dictionary, or a lookup against a handle that does not exist, is
    /// retried against the Global Dictionary before reporting `None`. Only
    /// a miss in the Global Dictionary itself is final.
    pub fn find(&self, id: DictId, key: Option<&str>) -> Option<&str> {
        self.trace(|| format!("find({id}, {})", quoted(key)));

        let Some(key) = valid_key(key) else {
            self.trace(|| "find: an attempt to search an absent key".to_string());
            return None;
        };

        match self.lookup(id, key) {
            Lookup::Found(value) => {
                self.trace(|| {
                    format!(
                        "find: {}, the key {} has the value {}",
                        dict_label(id),
                        quoted(Some(key)),
                        quoted(Some(value))
                    )
                });
                Some(value)
            }
            Lookup::MissingKey if id.is_global() => {
                self.trace(|| format!("find: the key {} not found", quoted(Some(key))));
                None
            }
            Lookup::MissingKey => {
                self.trace(|| {
                    format!(
                        "find: the key {} not found, looking up the Global Dictionary",
                        quoted(Some(key))
                    )
                });
                self.find_global(id, key)
            }
            Lookup::NoDict => {
                self.trace(|| format!("find: {} does not exist", dict_label(id)));
                self.trace(|| {
                    format!(
                        "find: the key {} not found, looking up the Global Dictionary",
                        quoted(Some(key))
                    )
                });
                self.find_global(id, key)
            }
        }
    }

    /// Removes all entries from the dictionary; no-op when the handle does
    /// not exist. The Global Dictionary is clearable, which also frees it
    /// to accept new keys again.
    pub fn clear(&mut self, id: DictId) {
        self.trace(|| format!("clear({id})"));

        let Some(dict) = self.dicts.get_mut(&id) else {
            self.trace(|| format!("clear: {} does not exist", dict_label(id)));
            return;
        };
        dict.clear();
        self.trace(|| format!("clear: {} has been cleared", dict_label(id)));
    }

    /// Copies every entry of `src` into `dst` through the same insertion
    /// path as [`Registry::insert`], so the Global Dictionary's bound
    /// applies per entry. No-op when `src == dst` or either handle does not
    /// exist. A partially applied copy (some entries rejected by the bound)
    /// is the defined outcome, not an error.
    pub fn copy(&mut self, src: DictId, dst: DictId) {
        self.trace(|| format!("copy({src}, {dst})"));

        if src == dst {
            self.trace(|| "copy: an attempt to copy a dict onto itself".to_string());
            return;
        }
        let Some(src_dict) = self.dicts.get(&src) else {
            self.trace(|| format!("copy: {} does not exist", dict_label(src)));
            return;
        };
        if !self.dicts.contains_key(&dst) {
            self.trace(|| format!("copy: {} does not exist", dict_label(dst)));
            return;
        }

        // No atomicity across the whole copy; entries are applied one by
        // one and the bound may reject some of them.
        let entries: Vec<(String, String)> = src_dict
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (key, value) in &entries {
            self.put(dst, key, value);
        }

        self.trace(|| {
            format!(
                "copy: {} has been copied to {}",
                dict_label(src),
                dict_label(dst)
            )
        });
    }

    /// Shared insertion path enforcing the bounded-insert policy: a
    /// brand-new key for the Global Dictionary at capacity is rejected,
    /// while an overwrite of an existing key always goes through.
    fn put(&mut self, id: DictId, key: &str, value: &str) -> PutOutcome {
        let outcome = match self.dicts.get_mut(&id) {
            None => PutOutcome::NoDict,
            Some(dict) => {
                if id.is_global()
                    && dict.len() >= MAX_GLOBAL_DICT_SIZE
                    && !dict.contains_key(key)
                {
                    PutOutcome::RejectedFull
                } else {
                    dict.insert(key.to_string(), value.to_string());
                    PutOutcome::Stored
                }
            }
        };

        match outcome {
            PutOutcome::Stored => self.trace(|| {
                format!(
                    "put: {}, the pair ({}, {}) has been inserted",
                    dict_label(id),
                    quoted(Some(key)),
                    quoted(Some(value))
                )
            }),
            PutOutcome::RejectedFull => {
                self.trace(|| "put: the Global Dictionary is full".to_string());
            }
            PutOutcome::NoDict => {}
        }
        outcome
    }

    /// Probe of a single dictionary, no fallback.
    fn lookup(&self, id: DictId, key: &str) -> Lookup<'_> {
        match self.dicts.get(&id) {
            None => Lookup::NoDict,
            Some(dict) => match dict.get(key) {
                Some(value) => Lookup::Found(value),
                None => Lookup::MissingKey,
            },
        }
    }

    /// Final step of the fallback chain: a direct probe of the Global
    /// Dictionary. `origin` is only used for trace context.
    fn find_global(&self, origin: DictId, key: &str) -> Option<&str> {
        let value = self
            .dicts
            .get(&GLOBAL_DICT_ID)
            .and_then(|global| global.get(key))
            .map(String::as_str);
        match value {
            Some(value) => {
                self.trace(|| {
                    format!(
                        "find: {}, the key {} has the value {}",
                        dict_label(origin),
                        quoted(Some(key)),
                        quoted(Some(value))
                    )
                });
                Some(value)
            }
            None => {
                self.trace(|| format!("find: the key {} not found", quoted(Some(key))));
                None
            }
        }
    }

    fn trace<F: FnOnce() -> String>(&self, msg: F) {
        if self.config.debug {
            self.sink.line(&msg());
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Boundary validation: an absent or empty key degrades to the same no-op.
fn valid_key(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.is_empty())
}
