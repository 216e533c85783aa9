use std::collections::HashMap;

use anyhow::Result;
use rand::prelude::*;

use vmsim::ReplacementPolicy;

#[path = "../common/mod.rs"]
mod common;
use common::{access_page, create_test_engine};

#[test]
fn test_fifo_evicts_earliest_loaded() -> Result<()> {
    let mut engine = create_test_engine(ReplacementPolicy::Fifo, 4)?;

    for page in 0..4 {
        let result = access_page(&mut engine, page)?;
        assert!(result.faulted);
        assert_eq!(result.frame, page);
    }

    let result = access_page(&mut engine, 4)?;
    assert!(result.faulted);
    assert_eq!(result.evicted, Some(0));
    assert_eq!(result.frame, 0);
    assert_eq!(engine.frame_of(0), None);
    assert_eq!(engine.eviction_order(), vec![1, 2, 3, 4]);

    Ok(())
}

#[test]
fn test_fifo_ignores_hits() -> Result<()> {
    let mut engine = create_test_engine(ReplacementPolicy::Fifo, 4)?;
    for page in 0..4 {
        access_page(&mut engine, page)?;
    }

    // Re-touching page 0 must not protect it under FIFO
    let hit = access_page(&mut engine, 0)?;
    assert!(!hit.faulted);

    let result = access_page(&mut engine, 4)?;
    assert_eq!(result.evicted, Some(0));

    Ok(())
}

#[test]
fn test_lru_spares_recently_used_page() -> Result<()> {
    let mut engine = create_test_engine(ReplacementPolicy::Lru, 4)?;
    for page in 0..4 {
        access_page(&mut engine, page)?;
    }

    access_page(&mut engine, 0)?;
    let result = access_page(&mut engine, 4)?;

    assert_eq!(result.evicted, Some(1));
    assert_eq!(result.frame, 1);
    assert_eq!(engine.frame_of(0), Some(0));
    assert_eq!(engine.eviction_order(), vec![2, 3, 0, 4]);

    Ok(())
}

#[test]
fn test_lru_without_hits_behaves_like_fifo() -> Result<()> {
    let mut fifo = create_test_engine(ReplacementPolicy::Fifo, 3)?;
    let mut lru = create_test_engine(ReplacementPolicy::Lru, 3)?;

    // Cyclic access to more pages than frames never hits
    for page in [0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2] {
        let a = access_page(&mut fifo, page)?;
        let b = access_page(&mut lru, page)?;
        assert!(a.faulted && b.faulted);
        assert_eq!(a.evicted, b.evicted);
        assert_eq!(a.frame, b.frame);
    }

    Ok(())
}

#[test]
fn test_reloaded_page_cycles_through_residency() -> Result<()> {
    let mut engine = create_test_engine(ReplacementPolicy::Fifo, 1)?;

    assert!(access_page(&mut engine, 0)?.faulted);
    assert_eq!(access_page(&mut engine, 1)?.evicted, Some(0));
    let reload = access_page(&mut engine, 0)?;
    assert!(reload.faulted);
    assert_eq!(reload.evicted, Some(1));
    assert_eq!(reload.frame, 0);

    let stats = engine.snapshot_statistics();
    assert_eq!(stats.page_faults, 3);
    assert_eq!(stats.evictions, 2);

    Ok(())
}

/// Replay a random workload and check every eviction against a reference
/// model built from load / last-use timestamps.
fn check_victims_against_model(policy: ReplacementPolicy, seed: u64) -> Result<()> {
    let mut engine = create_test_engine(policy, 3)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut loaded_at: HashMap<usize, usize> = HashMap::new();
    let mut used_at: HashMap<usize, usize> = HashMap::new();

    for clock in 0..400 {
        let page = rng.gen_range(0..8);
        let result = access_page(&mut engine, page)?;

        if let Some(victim) = result.evicted {
            let stamps = match policy {
                ReplacementPolicy::Fifo => &loaded_at,
                ReplacementPolicy::Lru => &used_at,
            };
            let expected = stamps
                .iter()
                .min_by_key(|&(_, &stamp)| stamp)
                .map(|(&p, _)| p);
            assert_eq!(Some(victim), expected, "{} picked the wrong victim", policy);

            loaded_at.remove(&victim);
            used_at.remove(&victim);
        }

        if result.faulted {
            loaded_at.insert(page, clock);
        }
        used_at.insert(page, clock);
    }

    Ok(())
}

#[test]
fn test_fifo_victims_match_load_order() -> Result<()> {
    for seed in 0..5 {
        check_victims_against_model(ReplacementPolicy::Fifo, seed)?;
    }
    Ok(())
}

#[test]
fn test_lru_victims_match_recency() -> Result<()> {
    for seed in 0..5 {
        check_victims_against_model(ReplacementPolicy::Lru, seed)?;
    }
    Ok(())
}
