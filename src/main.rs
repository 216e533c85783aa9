use anyhow::Result;

use vmsim::{EngineConfig, ReplacementPolicy, TranslationEngine};

fn main() -> Result<()> {
    // 2 KB of logical memory in 256-byte pages, backed by only 4 frames
    let segments = ["code", "data", "heap", "stack"];
    let config = EngineConfig::new(2048, 256, segments, ReplacementPolicy::Lru).with_frame_count(4);
    let mut engine = TranslationEngine::new(&config)?;

    println!("{}", engine.snapshot_segments());
    println!();

    // Touch every segment, revisit code, then push the working set past capacity
    let accesses = [(0, 10), (1, 20), (2, 300), (0, 12), (3, 100), (3, 400), (1, 30)];
    for (segment, offset) in accesses {
        let result = engine.translate(segment, offset)?;
        println!("{}", result);
        println!();
    }

    println!("{}", engine.snapshot_page_table());
    println!();
    println!("{}", engine.snapshot_frame_table());
    println!();
    println!("{}", engine.snapshot_statistics());

    Ok(())
}
