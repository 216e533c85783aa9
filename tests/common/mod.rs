#![allow(dead_code)]

use anyhow::Result;
use tempfile::NamedTempFile;
use std::io::Write;

use vmsim::{EngineConfig, ReplacementPolicy, TranslationEngine, TranslationResult};

pub const PAGE_SIZE: usize = 256;

// Create an engine over 8 pages in a single segment, backed by `frames` frames
pub fn create_test_engine(policy: ReplacementPolicy, frames: usize) -> Result<TranslationEngine> {
    let config =
        EngineConfig::new(8 * PAGE_SIZE, PAGE_SIZE, ["main"], policy).with_frame_count(frames);
    Ok(TranslationEngine::new(&config)?)
}

// Create the 1024-byte, 4-page, two-segment engine used by the worked examples
pub fn create_small_engine(policy: ReplacementPolicy) -> Result<TranslationEngine> {
    let config = EngineConfig::new(1024, PAGE_SIZE, ["code", "data"], policy);
    Ok(TranslationEngine::new(&config)?)
}

// Touch `page` through segment 0 of an engine built by create_test_engine
pub fn access_page(engine: &mut TranslationEngine, page: usize) -> Result<TranslationResult> {
    Ok(engine.translate(0, page * PAGE_SIZE)?)
}

// Write trace text to a temporary file
pub fn create_trace_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
