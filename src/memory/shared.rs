use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::types::{AccessRequest, SegmentIndex};
use crate::memory::config::EngineConfig;
use crate::memory::engine::{TranslationEngine, TranslationResult};
use crate::memory::error::Result;
use crate::memory::snapshot::{FrameTableSnapshot, PageTableSnapshot, SegmentTableSnapshot};
use crate::memory::stats::StatisticsSnapshot;

/// A translation engine that can be shared between threads.
///
/// Every call holds the engine lock for its whole duration, so translations
/// are processed one at a time.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<TranslationEngine>>,
}

impl SharedEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self::from_engine(TranslationEngine::new(config)?))
    }

    pub fn from_engine(engine: TranslationEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn translate(&self, segment: SegmentIndex, offset: usize) -> Result<TranslationResult> {
        self.inner.lock().translate(segment, offset)
    }

    pub fn translate_batch(&self, requests: &[AccessRequest]) -> Vec<Result<TranslationResult>> {
        self.inner.lock().translate_batch(requests)
    }

    /// Run `f` with exclusive access to the engine
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut TranslationEngine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }

    pub fn snapshot_segments(&self) -> SegmentTableSnapshot {
        self.inner.lock().snapshot_segments()
    }

    pub fn snapshot_page_table(&self) -> PageTableSnapshot {
        self.inner.lock().snapshot_page_table()
    }

    pub fn snapshot_frame_table(&self) -> FrameTableSnapshot {
        self.inner.lock().snapshot_frame_table()
    }

    pub fn snapshot_statistics(&self) -> StatisticsSnapshot {
        self.inner.lock().snapshot_statistics()
    }
}
