use std::collections::VecDeque;

use super::{ReplacementPolicy, Replacer};
use crate::common::types::PageNumber;

/// FIFO (First In, First Out) page replacement policy.
///
/// Pages are queued in load order; hits do not reorder the queue.
#[derive(Debug)]
pub struct FifoReplacer {
    queue: VecDeque<PageNumber>,
}

impl FifoReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> ReplacementPolicy {
        ReplacementPolicy::Fifo
    }

    fn on_load(&mut self, page: PageNumber) {
        debug_assert!(!self.queue.contains(&page), "page {} queued twice", page);
        self.queue.push_back(page);
    }

    fn on_access(&mut self, _page: PageNumber) {}

    fn select_victim(&self) -> Option<PageNumber> {
        self.queue.front().copied()
    }

    fn on_evict(&mut self, page: PageNumber) {
        if self.queue.front() == Some(&page) {
            self.queue.pop_front();
        } else if let Some(pos) = self.queue.iter().position(|&p| p == page) {
            self.queue.remove(pos);
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn eviction_order(&self) -> Vec<PageNumber> {
        self.queue.iter().copied().collect()
    }
}
