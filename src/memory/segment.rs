use serde::{Deserialize, Serialize};

use crate::common::types::SegmentIndex;
use crate::memory::error::{ConfigError, MemoryError};

/// A contiguous range of the logical address space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub base: usize,
    pub limit: usize,
}

impl Segment {
    /// Whether `offset` lies inside the segment
    pub fn contains(&self, offset: usize) -> bool {
        offset < self.limit
    }
}

/// Name for segment `index`: trimmed, or `Segment<index>` when blank
pub(crate) fn segment_name(index: SegmentIndex, name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        format!("Segment{}", index)
    } else {
        trimmed.to_string()
    }
}

/// Static segment index -> (base, limit) mapping, built once
#[derive(Debug, Clone)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    /// Split `total_memory` into equal, adjacent segments, one per name
    pub fn initialize<S: AsRef<str>>(
        total_memory: usize,
        names: &[S],
    ) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::NoSegments);
        }
        if total_memory == 0 {
            return Err(ConfigError::ZeroMemorySize);
        }
        if total_memory % names.len() != 0 {
            return Err(ConfigError::SegmentsMisaligned {
                memory_size: total_memory,
                segments: names.len(),
            });
        }

        let limit = total_memory / names.len();
        let segments = names
            .iter()
            .enumerate()
            .map(|(i, name)| Segment {
                name: segment_name(i, name.as_ref()),
                base: i * limit,
                limit,
            })
            .collect();

        Ok(Self { segments })
    }

    /// Find a segment by index
    pub fn lookup(&self, index: SegmentIndex) -> Result<&Segment, MemoryError> {
        self.segments.get(index).ok_or(MemoryError::InvalidSegment {
            index,
            count: self.segments.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}
