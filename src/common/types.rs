use serde::{Deserialize, Serialize};

/// Logical page number
pub type PageNumber = usize;

/// Physical frame number
pub type FrameNumber = usize;

/// Index into the segment table
pub type SegmentIndex = usize;

/// Default total logical memory size in bytes
pub const DEFAULT_MEMORY_SIZE: usize = 1024;

/// Default page (and frame) size in bytes
pub const DEFAULT_PAGE_SIZE: usize = 256;

/// A (segment, offset) logical address as supplied by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessRequest {
    pub segment: SegmentIndex,
    pub offset: usize,
}

impl AccessRequest {
    pub fn new(segment: SegmentIndex, offset: usize) -> Self {
        Self { segment, offset }
    }
}
