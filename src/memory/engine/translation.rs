use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::common::types::{AccessRequest, FrameNumber, PageNumber, SegmentIndex};
use crate::memory::error::{MemoryError, Result};
use super::TranslationEngine;

/// A resolved logical -> physical translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub segment: SegmentIndex,
    pub offset: usize,
    pub logical_address: usize,
    pub page_number: PageNumber,
    pub page_offset: usize,
    pub frame: FrameNumber,
    pub physical_address: usize,
    /// The page was not resident when the translation started
    pub faulted: bool,
    /// Page evicted to resolve the fault
    pub evicted: Option<PageNumber>,
}

impl fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.faulted {
            write!(f, "Page fault occurred! Loaded page {} into memory", self.page_number)?;
            if let Some(victim) = self.evicted {
                write!(f, " (evicted page {})", victim)?;
            }
            writeln!(f, ".")?;
        }
        writeln!(
            f,
            "Logical Address: {} (Segment {}, Offset {})",
            self.logical_address, self.segment, self.offset
        )?;
        write!(
            f,
            "Physical Address: {} (Frame {}, Offset {})",
            self.physical_address, self.frame, self.page_offset
        )
    }
}

impl TranslationEngine {
    /// Translate a (segment, offset) logical address to a physical address,
    /// loading the page on a fault.
    ///
    /// Rejected requests leave every table and counter untouched.
    pub fn translate(&mut self, segment: SegmentIndex, offset: usize) -> Result<TranslationResult> {
        let seg = match self.segments.lookup(segment) {
            Ok(seg) => seg,
            Err(e) => {
                debug!("Rejected access: {}", e);
                return Err(e);
            }
        };
        if !seg.contains(offset) {
            let err = MemoryError::OffsetOutOfBounds {
                segment,
                offset,
                limit: seg.limit,
            };
            debug!("Rejected access: {}", err);
            return Err(err);
        }

        let logical_address = seg.base + offset;
        let page_number = logical_address / self.page_size;
        let page_offset = logical_address % self.page_size;

        self.stats.record_access();

        let (frame, faulted, evicted) = match self.page_table.frame_of(page_number) {
            Some(frame) => {
                trace!("Hit on page {} in frame {}", page_number, frame);
                (frame, false, None)
            }
            None => {
                self.stats.record_fault();
                debug!("Page fault on page {} (logical address {})", page_number, logical_address);
                let load = self.load_page(page_number);
                (load.frame, true, load.evicted)
            }
        };

        self.replacer.on_access(page_number);
        debug_assert!(self.is_consistent());

        Ok(TranslationResult {
            segment,
            offset,
            logical_address,
            page_number,
            page_offset,
            frame,
            physical_address: frame * self.page_size + page_offset,
            faulted,
            evicted,
        })
    }

    /// Translate each request in order. A rejected request does not stop
    /// the batch.
    pub fn translate_batch<'a, I>(&mut self, requests: I) -> Vec<Result<TranslationResult>>
    where
        I: IntoIterator<Item = &'a AccessRequest>,
    {
        requests
            .into_iter()
            .map(|req| self.translate(req.segment, req.offset))
            .collect()
    }
}
