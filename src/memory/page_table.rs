use serde::{Deserialize, Serialize};

use crate::common::types::{FrameNumber, PageNumber};

/// Page table entry. A page is resident exactly when it has a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTableEntry {
    pub frame: Option<FrameNumber>,
}

impl PageTableEntry {
    pub fn is_resident(&self) -> bool {
        self.frame.is_some()
    }
}

/// Logical page number -> residency / frame mapping
#[derive(Debug, Clone)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Create a page table with every page non-resident
    pub fn new(page_count: usize) -> Self {
        Self {
            entries: vec![PageTableEntry::default(); page_count],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, page: PageNumber) -> Option<&PageTableEntry> {
        self.entries.get(page)
    }

    /// Frame backing `page`, or None if the page is not resident
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameNumber> {
        self.entries.get(page).and_then(|entry| entry.frame)
    }

    /// Mark `page` resident in `frame`
    pub fn map(&mut self, page: PageNumber, frame: FrameNumber) {
        self.entries[page].frame = Some(frame);
    }

    /// Mark `page` non-resident, returning the frame it occupied
    pub fn unmap(&mut self, page: PageNumber) -> Option<FrameNumber> {
        self.entries[page].frame.take()
    }

    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_resident()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageNumber, &PageTableEntry)> {
        self.entries.iter().enumerate()
    }
}
