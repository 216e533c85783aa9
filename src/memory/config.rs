use serde::{Deserialize, Deserializer, Serialize};

use crate::common::types::{DEFAULT_MEMORY_SIZE, DEFAULT_PAGE_SIZE};
use crate::memory::error::ConfigError;
use crate::memory::replacer::ReplacementPolicy;
use crate::memory::segment::segment_name;

/// Configuration for a translation engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Total logical memory size in bytes, shared out between the segments
    pub memory_size: usize,

    /// Size of a page and of a frame in bytes
    pub page_size: usize,

    /// Number of physical frames; defaults to the number of pages
    #[serde(default)]
    pub frame_count: Option<usize>,

    /// Segment names, one per segment, in index order
    #[serde(deserialize_with = "deserialize_segment_names")]
    pub segment_names: Vec<String>,

    /// Page replacement policy used once no frame is free
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

/// Sizes derived from a validated configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub page_count: usize,
    pub frame_count: usize,
    pub segment_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_MEMORY_SIZE,
            DEFAULT_PAGE_SIZE,
            ["", ""],
            ReplacementPolicy::Fifo,
        )
    }
}

impl EngineConfig {
    /// Create a configuration; blank segment names become `Segment<i>`
    pub fn new<I, S>(
        memory_size: usize,
        page_size: usize,
        segment_names: I,
        policy: ReplacementPolicy,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segment_names = segment_names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let name: String = name.into();
                segment_name(i, &name)
            })
            .collect();

        Self {
            memory_size,
            page_size,
            frame_count: None,
            segment_names,
            policy,
        }
    }

    /// Limit physical memory to `frames` frames
    pub fn with_frame_count(mut self, frames: usize) -> Self {
        self.frame_count = Some(frames);
        self
    }

    pub fn with_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the configuration and derive page, frame and segment sizes.
    ///
    /// Sizes that do not divide evenly are rejected instead of truncated.
    pub fn validate(&self) -> Result<Geometry, ConfigError> {
        if self.memory_size == 0 {
            return Err(ConfigError::ZeroMemorySize);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.memory_size % self.page_size != 0 {
            return Err(ConfigError::PageSizeMisaligned {
                memory_size: self.memory_size,
                page_size: self.page_size,
            });
        }
        if self.segment_names.is_empty() {
            return Err(ConfigError::NoSegments);
        }
        if self.memory_size % self.segment_names.len() != 0 {
            return Err(ConfigError::SegmentsMisaligned {
                memory_size: self.memory_size,
                segments: self.segment_names.len(),
            });
        }

        let page_count = self.memory_size / self.page_size;
        let frame_count = self.frame_count.unwrap_or(page_count);
        if frame_count == 0 {
            return Err(ConfigError::NoFrames);
        }
        if frame_count > page_count {
            return Err(ConfigError::TooManyFrames {
                frames: frame_count,
                pages: page_count,
            });
        }

        Ok(Geometry {
            page_count,
            frame_count,
            segment_size: self.memory_size / self.segment_names.len(),
        })
    }
}

fn deserialize_segment_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    Ok(names
        .iter()
        .enumerate()
        .map(|(i, name)| segment_name(i, name))
        .collect())
}
