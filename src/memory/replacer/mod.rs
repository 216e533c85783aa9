use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::types::PageNumber;

mod fifo;
mod lru;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

/// Eviction-order bookkeeping for resident pages.
///
/// The engine owns exactly one replacer, chosen once at construction, and
/// drives it through the same four calls regardless of policy:
/// `on_load` when a page becomes resident, `on_access` on every successful
/// translation, `select_victim` when no frame is free, and `on_evict` once the
/// chosen victim has been unmapped.
pub trait Replacer: Send + fmt::Debug {
    /// The policy this replacer implements
    fn policy(&self) -> ReplacementPolicy;

    /// Record that a page has just been loaded into a frame
    fn on_load(&mut self, page: PageNumber);

    /// Record a translation that touched a resident page
    fn on_access(&mut self, page: PageNumber);

    /// The page that would be evicted next, if any page is tracked
    fn select_victim(&self) -> Option<PageNumber>;

    /// Stop tracking an evicted page
    fn on_evict(&mut self, page: PageNumber);

    /// Number of tracked (resident) pages
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked pages in eviction order, next victim first
    fn eviction_order(&self) -> Vec<PageNumber>;
}

/// Page replacement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReplacementPolicy {
    /// Evict the page that was loaded earliest
    #[default]
    Fifo,
    /// Evict the page whose last load or hit is oldest
    Lru,
}

impl ReplacementPolicy {
    /// Build the replacer for this policy, sized for `capacity` resident pages
    pub fn create_replacer(self, capacity: usize) -> Box<dyn Replacer> {
        match self {
            ReplacementPolicy::Fifo => Box::new(FifoReplacer::new(capacity)),
            ReplacementPolicy::Lru => Box::new(LruReplacer::new(capacity)),
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementPolicy::Fifo => write!(f, "FIFO"),
            ReplacementPolicy::Lru => write!(f, "LRU"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown replacement policy '{0}' (expected fifo, lru, 1 or 2)")]
pub struct ParsePolicyError(pub String);

impl FromStr for ReplacementPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "1" => Ok(ReplacementPolicy::Fifo),
            "lru" | "2" => Ok(ReplacementPolicy::Lru),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}
