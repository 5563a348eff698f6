//! Dictionary handles and their allocator.

use std::fmt;

/// Handle to one dictionary instance in the registry.
///
/// Opaque to callers; ids are unique for the lifetime of the registry and
/// never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictId(pub u64);

/// The reserved handle of the Global Dictionary: the first id ever
/// allocated, by construction of the counter.
pub const GLOBAL_DICT_ID: DictId = DictId(0);

impl DictId {
    #[inline]
    pub fn is_global(self) -> bool {
        self == GLOBAL_DICT_ID
    }
}

impl fmt::Display for DictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing id source. Ids start at 0 and are never handed
/// out twice, so destroyed handles stay dead.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn alloc(&mut self) -> DictId {
        let id = DictId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_allocated_id_is_the_global_id() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.alloc(), GLOBAL_DICT_ID);
        assert!(GLOBAL_DICT_ID.is_global());
    }

    #[test]
    fn ids_are_distinct_and_increasing() {
        let mut ids = IdAllocator::new();
        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();
        assert!(a < b && b < c);
        assert!(!b.is_global());
    }
}
