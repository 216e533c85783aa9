use log::debug;

use crate::common::types::{FrameNumber, PageNumber};
use super::TranslationEngine;

/// Outcome of resolving a page fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLoad {
    /// Frame the page now occupies
    pub frame: FrameNumber,
    /// Page evicted to make room, if no frame was free
    pub evicted: Option<PageNumber>,
}

impl TranslationEngine {
    /// Make a non-resident page resident.
    ///
    /// Takes the lowest-numbered free frame, or evicts the replacer's victim
    /// when every frame is occupied. Cannot fail: with no free frame every
    /// frame holds a tracked page, so a victim always exists.
    pub(crate) fn load_page(&mut self, page: PageNumber) -> PageLoad {
        debug_assert!(self.page_table.frame_of(page).is_none(), "page {} already resident", page);

        let (frame, evicted) = match self.frame_table.first_free() {
            Some(frame) => (frame, None),
            None => {
                let (frame, victim) = self.evict_victim();
                (frame, Some(victim))
            }
        };

        self.page_table.map(page, frame);
        self.frame_table.assign(frame, page);
        self.replacer.on_load(page);

        debug!("Loaded page {} into frame {}", page, frame);
        PageLoad { frame, evicted }
    }

    /// Evict the replacer's chosen page and return its (now free) frame
    fn evict_victim(&mut self) -> (FrameNumber, PageNumber) {
        let victim = self
            .replacer
            .select_victim()
            .unwrap_or_else(|| unreachable!("no free frame but replacer tracks no page"));
        let frame = self
            .page_table
            .unmap(victim)
            .unwrap_or_else(|| unreachable!("victim page {} is not resident", victim));

        self.frame_table.release(frame);
        self.replacer.on_evict(victim);
        self.stats.record_eviction();

        debug!("Evicted page {} from frame {} ({})", victim, frame, self.replacer.policy());
        (frame, victim)
    }
}
