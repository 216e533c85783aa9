use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::types::{FrameNumber, PageNumber, SegmentIndex};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentInfo {
    pub index: SegmentIndex,
    pub name: String,
    pub base: usize,
    pub limit: usize,
}

/// Segments in index order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentTableSnapshot {
    pub segments: Vec<SegmentInfo>,
}

impl fmt::Display for SegmentTableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segments:")?;
        for seg in &self.segments {
            write!(f, "\n{}: {}: Base = {}, Limit = {}", seg.index, seg.name, seg.base, seg.limit)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntrySnapshot {
    pub page: PageNumber,
    pub resident: bool,
    pub frame: Option<FrameNumber>,
}

/// Every page in page-number order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTableSnapshot {
    pub pages: Vec<PageEntrySnapshot>,
}

impl PageTableSnapshot {
    pub fn get(&self, page: PageNumber) -> Option<&PageEntrySnapshot> {
        self.pages.get(page)
    }
}

impl fmt::Display for PageTableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page Table (Page -> Frame):")?;
        for entry in &self.pages {
            match entry.frame {
                Some(frame) => write!(f, "\nPage {} -> Frame {}", entry.page, frame)?,
                None => write!(f, "\nPage {} -> Not in memory", entry.page)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: FrameNumber,
    pub occupant: Option<PageNumber>,
}

/// Every frame in frame-number order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTableSnapshot {
    pub frames: Vec<FrameSnapshot>,
}

impl FrameTableSnapshot {
    pub fn get(&self, frame: FrameNumber) -> Option<&FrameSnapshot> {
        self.frames.get(frame)
    }
}

impl fmt::Display for FrameTableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frames (Frame -> Page):")?;
        for entry in &self.frames {
            match entry.occupant {
                Some(page) => write!(f, "\nFrame {} -> Page {}", entry.frame, page)?,
                None => write!(f, "\nFrame {} -> Empty", entry.frame)?,
            }
        }
        Ok(())
    }
}
