use anyhow::Result;

use pagesim::{simulate, simulate_fifo, simulate_lru, simulate_optimal, PageId, Policy, SimulationError};

#[path = "../common/mod.rs"]
mod common;
use common::{assert_trace_invariants, outcome_string, refs, sample_references, slots};

#[test]
fn test_fifo_sample_sequence() -> Result<()> {
    let references = sample_references();
    let trace = simulate_fifo(&references, 3)?;

    assert_trace_invariants(&trace, &references, 3);
    assert_eq!(trace.total_faults(), 7);
    assert_eq!(trace.total_hits(), 1);
    assert_eq!(outcome_string(&trace), "FFFFHFFF");
    assert_eq!(trace.evictions(), refs(&[7, 0, 1, 2]));
    assert_eq!(slots(&trace.final_step().frames), vec![Some(4), Some(3), Some(0)]);

    Ok(())
}

#[test]
fn test_lru_sample_sequence() -> Result<()> {
    let references = sample_references();
    let trace = simulate_lru(&references, 3)?;

    assert_trace_invariants(&trace, &references, 3);
    assert_eq!(trace.total_faults(), 6);
    assert_eq!(trace.total_hits(), 2);
    assert_eq!(outcome_string(&trace), "FFFFHFHF");
    assert_eq!(trace.evictions(), refs(&[7, 1, 2]));
    assert_eq!(slots(&trace.final_step().frames), vec![Some(4), Some(0), Some(3)]);

    Ok(())
}

#[test]
fn test_optimal_sample_sequence() -> Result<()> {
    let references = sample_references();
    let trace = simulate_optimal(&references, 3)?;

    assert_trace_invariants(&trace, &references, 3);
    assert_eq!(trace.total_faults(), 6);
    assert_eq!(trace.total_hits(), 2);
    assert_eq!(outcome_string(&trace), "FFFFHFHF");
    assert_eq!(trace.evictions(), refs(&[7, 2, 3]));
    assert_eq!(slots(&trace.final_step().frames), vec![Some(4), Some(0), Some(1)]);

    // Same fault count as LRU here, different victims than FIFO
    assert_ne!(trace.evictions(), simulate_fifo(&references, 3)?.evictions());

    Ok(())
}

#[test]
fn test_empty_slots_used_before_eviction() -> Result<()> {
    let references = refs(&[1, 2, 3]);

    for policy in Policy::ALL {
        let trace = simulate(policy, &references, 3)?;
        assert_trace_invariants(&trace, &references, 3);
        assert_eq!(outcome_string(&trace), "FFF");
        assert!(trace.iter().all(|step| step.evicted.is_none()));
        assert_eq!(slots(&trace.final_step().frames), vec![Some(1), Some(2), Some(3)]);
    }

    Ok(())
}

#[test]
fn test_optimal_evicts_farthest_next_use() -> Result<()> {
    let references = refs(&[1, 2, 3, 1, 2, 4]);
    let trace = simulate_optimal(&references, 2)?;
    assert_trace_invariants(&trace, &references, 2);

    // At the fault on 3: 1 recurs one reference later, 2 two references later
    assert_eq!(slots(&trace[2].frames), vec![Some(1), Some(2)]);
    assert_eq!(trace[3].evicted, Some(PageId(2)));
    assert_eq!(slots(&trace[3].frames), vec![Some(1), Some(3)]);

    assert!(trace[4].is_hit());
    assert_eq!(trace.evictions(), refs(&[2, 1, 2]));
    assert_eq!(trace.total_faults(), 5);
    assert_eq!(trace.total_hits(), 1);

    Ok(())
}

#[test]
fn test_optimal_prefers_page_never_used_again() -> Result<()> {
    // 9 in slot 1 never recurs; 5 in slot 0 recurs far away
    let references = refs(&[5, 9, 6, 6, 6, 6, 5]);
    let trace = simulate_optimal(&references, 2)?;

    assert_eq!(trace[3].evicted, Some(PageId(9)));
    assert!(trace[7].is_hit());

    Ok(())
}

#[test]
fn test_fifo_belady_anomaly() -> Result<()> {
    let references = refs(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);

    assert_eq!(simulate_fifo(&references, 3)?.total_faults(), 9);
    assert_eq!(simulate_fifo(&references, 4)?.total_faults(), 10);

    // Stack policies never get worse with more frames
    assert!(simulate_lru(&references, 4)?.total_faults() <= simulate_lru(&references, 3)?.total_faults());
    assert!(simulate_optimal(&references, 4)?.total_faults() <= simulate_optimal(&references, 3)?.total_faults());

    Ok(())
}

#[test]
fn test_readmitted_page_can_change_slot() -> Result<()> {
    let references = refs(&[1, 2, 3, 1]);
    let trace = simulate_fifo(&references, 2)?;

    assert_eq!(trace[1].slot.map(|s| s.index()), Some(0));
    // 1 is evicted by 3, then comes back in the slot 2 vacated
    assert_eq!(trace[4].slot.map(|s| s.index()), Some(1));
    assert_eq!(slots(&trace[4].frames), vec![Some(3), Some(1)]);

    Ok(())
}

#[test]
fn test_zero_frames_rejected() {
    let references = sample_references();
    for policy in Policy::ALL {
        assert_eq!(
            simulate(policy, &references, 0).unwrap_err(),
            SimulationError::InvalidCapacity(0)
        );
    }
}

#[test]
fn test_capacity_larger_than_sequence() -> Result<()> {
    let references = refs(&[3, 3, 8, 3, 8]);
    for policy in Policy::ALL {
        let trace = simulate(policy, &references, 10)?;
        assert_trace_invariants(&trace, &references, 10);
        assert_eq!(trace.total_faults(), 2);
        assert_eq!(trace.total_hits(), 3);
        assert_eq!(trace.final_step().frames.resident_count(), 2);
    }
    Ok(())
}
