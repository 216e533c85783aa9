use std::fmt;

use serde::{Deserialize, Serialize};

/// Monotonic access counters kept by the engine
#[derive(Debug, Default, Clone, Copy)]
pub struct Statistics {
    accesses: u64,
    page_faults: u64,
    evictions: u64,
}

impl Statistics {
    pub fn record_access(&mut self) {
        self.accesses += 1;
    }

    pub fn record_fault(&mut self) {
        self.page_faults += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            accesses: self.accesses,
            page_faults: self.page_faults,
            evictions: self.evictions,
            fault_rate: if self.accesses > 0 {
                Some(self.page_faults as f64 / self.accesses as f64)
            } else {
                None
            },
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub accesses: u64,
    pub page_faults: u64,
    pub evictions: u64,
    /// page_faults / accesses; None before the first access
    pub fault_rate: Option<f64>,
}

impl StatisticsSnapshot {
    pub fn hits(&self) -> u64 {
        self.accesses - self.page_faults
    }
}

impl fmt::Display for StatisticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "Total accesses: {}", self.accesses)?;
        writeln!(f, "Page faults: {}", self.page_faults)?;
        writeln!(f, "Evictions: {}", self.evictions)?;
        match self.fault_rate {
            Some(rate) => write!(f, "Page fault rate: {:.2}%", rate * 100.0),
            None => write!(f, "Page fault rate: N/A"),
        }
    }
}
