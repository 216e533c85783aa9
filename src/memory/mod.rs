pub mod config;
pub mod engine;
pub mod error;
pub mod frame_table;
pub mod page_table;
pub mod replacer;
pub mod segment;
pub mod shared;
pub mod snapshot;
pub mod stats;

pub use config::EngineConfig;
pub use engine::{TranslationEngine, TranslationResult};
pub use error::{ConfigError, MemoryError};
pub use replacer::{ReplacementPolicy, Replacer};
pub use shared::SharedEngine;
