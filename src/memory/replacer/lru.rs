use linked_hash_map::LinkedHashMap;

use super::{ReplacementPolicy, Replacer};
use crate::common::types::PageNumber;

/// LRU (Least Recently Used) page replacement policy.
///
/// The map keeps insertion order with a key index, so moving a page to the
/// most-recent end and removing the least-recent one are both O(1).
/// Front = least recently used, back = most recently used.
#[derive(Debug)]
pub struct LruReplacer {
    lru_list: LinkedHashMap<PageNumber, ()>,
}

impl LruReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lru_list: LinkedHashMap::with_capacity(capacity),
        }
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> ReplacementPolicy {
        ReplacementPolicy::Lru
    }

    fn on_load(&mut self, page: PageNumber) {
        // insert() refreshes an existing key, so a double load cannot duplicate
        self.lru_list.insert(page, ());
    }

    fn on_access(&mut self, page: PageNumber) {
        self.lru_list.get_refresh(&page);
    }

    fn select_victim(&self) -> Option<PageNumber> {
        self.lru_list.front().map(|(&page, _)| page)
    }

    fn on_evict(&mut self, page: PageNumber) {
        self.lru_list.remove(&page);
    }

    fn len(&self) -> usize {
        self.lru_list.len()
    }

    fn eviction_order(&self) -> Vec<PageNumber> {
        self.lru_list.keys().copied().collect()
    }
}
