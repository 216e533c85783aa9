use thiserror::Error;

use crate::common::types::SegmentIndex;

/// Rejected engine configurations. Fatal at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Total memory size must be positive")]
    ZeroMemorySize,
    #[error("Page size must be positive")]
    ZeroPageSize,
    #[error("Page size {page_size} does not evenly divide memory size {memory_size}")]
    PageSizeMisaligned { memory_size: usize, page_size: usize },
    #[error("At least one segment is required")]
    NoSegments,
    #[error("{segments} segments do not evenly partition memory size {memory_size}")]
    SegmentsMisaligned { memory_size: usize, segments: usize },
    #[error("Physical memory must hold at least one frame")]
    NoFrames,
    #[error("{frames} frames requested but there are only {pages} pages")]
    TooManyFrames { frames: usize, pages: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
    #[error("Invalid segment index {index} (segment count {count})")]
    InvalidSegment { index: SegmentIndex, count: usize },
    #[error("Offset {offset} out of bounds for segment {segment} (limit {limit})")]
    OffsetOutOfBounds {
        segment: SegmentIndex,
        offset: usize,
        limit: usize,
    },
}

/// Result type for memory engine operations
pub type Result<T> = std::result::Result<T, MemoryError>;
