// Segmented, demand-paged virtual memory simulator

pub mod common;
pub mod memory;
pub mod trace;

// Re-export key items for convenient access
pub use common::types::AccessRequest;
pub use memory::{
    ConfigError, EngineConfig, MemoryError, ReplacementPolicy, SharedEngine, TranslationEngine,
    TranslationResult,
};
pub use trace::TraceError;
