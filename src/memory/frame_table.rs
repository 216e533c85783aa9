use std::collections::BTreeSet;

use crate::common::types::{FrameNumber, PageNumber};

/// Physical frame number -> occupying page mapping.
///
/// Free frames are also kept in an ordered set so the lowest-numbered free
/// frame is found without scanning the table.
#[derive(Debug, Clone)]
pub struct FrameTable {
    occupants: Vec<Option<PageNumber>>,
    free_list: BTreeSet<FrameNumber>,
}

impl FrameTable {
    /// Create a frame table with every frame empty
    pub fn new(frame_count: usize) -> Self {
        Self {
            occupants: vec![None; frame_count],
            free_list: (0..frame_count).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Page held by `frame`, if any
    pub fn occupant(&self, frame: FrameNumber) -> Option<PageNumber> {
        self.occupants.get(frame).copied().flatten()
    }

    /// Lowest-numbered empty frame
    pub fn first_free(&self) -> Option<FrameNumber> {
        self.free_list.first().copied()
    }

    /// Place `page` in `frame`
    pub fn assign(&mut self, frame: FrameNumber, page: PageNumber) {
        debug_assert!(self.occupants[frame].is_none(), "frame {} already occupied", frame);
        self.occupants[frame] = Some(page);
        self.free_list.remove(&frame);
    }

    /// Empty `frame`, returning the page it held
    pub fn release(&mut self, frame: FrameNumber) -> Option<PageNumber> {
        let page = self.occupants[frame].take();
        self.free_list.insert(frame);
        page
    }

    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupants.len() - self.free_list.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameNumber, Option<PageNumber>)> + '_ {
        self.occupants.iter().copied().enumerate()
    }
}
