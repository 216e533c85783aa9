use std::collections::HashSet;

use log::info;

use crate::common::types::{FrameNumber, PageNumber, SegmentIndex};
use crate::memory::config::EngineConfig;
use crate::memory::error::Result;
use crate::memory::frame_table::FrameTable;
use crate::memory::page_table::PageTable;
use crate::memory::replacer::{ReplacementPolicy, Replacer};
use crate::memory::segment::{Segment, SegmentTable};
use crate::memory::snapshot::{
    FrameSnapshot, FrameTableSnapshot, PageEntrySnapshot, PageTableSnapshot, SegmentInfo,
    SegmentTableSnapshot,
};
use crate::memory::stats::{Statistics, StatisticsSnapshot};

mod fault_handling;
mod translation;

pub use fault_handling::PageLoad;
pub use translation::TranslationResult;

/// Segmented, demand-paged address translation engine.
///
/// Owns the segment table, page table, frame table and the replacement
/// tracker. Not synchronized; wrap it in a `SharedEngine` to use it from
/// several threads.
#[derive(Debug)]
pub struct TranslationEngine {
    page_size: usize,
    segments: SegmentTable,
    page_table: PageTable,
    frame_table: FrameTable,
    replacer: Box<dyn Replacer>,
    stats: Statistics,
}

impl TranslationEngine {
    /// Build an engine from a configuration, validating it first
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let geometry = config.validate()?;
        let segments =
            SegmentTable::initialize(config.memory_size, config.segment_names.as_slice())?;

        info!(
            "Created translation engine: {} bytes, {} pages of {} bytes, {} frames, \
             {} segments, {} replacement",
            config.memory_size,
            geometry.page_count,
            config.page_size,
            geometry.frame_count,
            segments.len(),
            config.policy
        );

        Ok(Self {
            page_size: config.page_size,
            segments,
            page_table: PageTable::new(geometry.page_count),
            frame_table: FrameTable::new(geometry.frame_count),
            replacer: config.policy.create_replacer(geometry.frame_count),
            stats: Statistics::default(),
        })
    }

    pub fn policy(&self) -> ReplacementPolicy {
        self.replacer.policy()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_table.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frame_table.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, index: SegmentIndex) -> Result<&Segment> {
        self.segments.lookup(index)
    }

    /// Frame currently backing `page`, if resident
    pub fn frame_of(&self, page: PageNumber) -> Option<FrameNumber> {
        self.page_table.frame_of(page)
    }

    /// Resident pages in eviction order, next victim first
    pub fn eviction_order(&self) -> Vec<PageNumber> {
        self.replacer.eviction_order()
    }

    pub fn snapshot_segments(&self) -> SegmentTableSnapshot {
        SegmentTableSnapshot {
            segments: self
                .segments
                .iter()
                .enumerate()
                .map(|(index, seg)| SegmentInfo {
                    index,
                    name: seg.name.clone(),
                    base: seg.base,
                    limit: seg.limit,
                })
                .collect(),
        }
    }

    pub fn snapshot_page_table(&self) -> PageTableSnapshot {
        PageTableSnapshot {
            pages: self
                .page_table
                .iter()
                .map(|(page, entry)| PageEntrySnapshot {
                    page,
                    resident: entry.is_resident(),
                    frame: entry.frame,
                })
                .collect(),
        }
    }

    pub fn snapshot_frame_table(&self) -> FrameTableSnapshot {
        FrameTableSnapshot {
            frames: self
                .frame_table
                .iter()
                .map(|(frame, occupant)| FrameSnapshot { frame, occupant })
                .collect(),
        }
    }

    pub fn snapshot_statistics(&self) -> StatisticsSnapshot {
        self.stats.snapshot()
    }

    /// Check that the page table, frame table and replacer agree:
    /// page -> frame and frame -> page are inverse over resident pages, and
    /// the replacer tracks exactly the resident pages.
    pub fn is_consistent(&self) -> bool {
        let resident = self.page_table.resident_count();
        if resident != self.frame_table.occupied_count() || resident != self.replacer.len() {
            return false;
        }

        let pages_agree = self.page_table.iter().all(|(page, entry)| match entry.frame {
            Some(frame) => self.frame_table.occupant(frame) == Some(page),
            None => true,
        });
        let frames_agree = self.frame_table.iter().all(|(frame, occupant)| match occupant {
            Some(page) => self.page_table.frame_of(page) == Some(frame),
            None => true,
        });
        let tracked: HashSet<PageNumber> = self.replacer.eviction_order().into_iter().collect();
        let tracked_once = tracked.len() == self.replacer.len();
        let resident_tracked = self
            .page_table
            .iter()
            .filter(|(_, entry)| entry.is_resident())
            .all(|(page, _)| tracked.contains(&page));

        pages_agree && frames_agree && tracked_once && resident_tracked
    }
}
