use std::panic;
use std::thread;
use log::info;
use serde::{Serialize, Deserialize};

use crate::common::types::PageId;
use crate::simulator::error::Result;
use crate::simulator::step::Step;
use crate::simulator::{simulate_fifo, simulate_lru, simulate_optimal, Policy};

/// Final step of each policy's trace over the same input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub fifo: Step,
    pub lru: Step,
    pub optimal: Step,
}

impl Comparison {
    pub fn get(&self, policy: Policy) -> &Step {
        match policy {
            Policy::Fifo => &self.fifo,
            Policy::Lru => &self.lru,
            Policy::Optimal => &self.optimal,
        }
    }

    /// Results in `Policy::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Policy, &Step)> {
        Policy::ALL.into_iter().map(move |policy| (policy, self.get(policy)))
    }

    /// Policy with the fewest faults; earlier policies win ties
    pub fn best(&self) -> Policy {
        let mut best = Policy::Fifo;
        for (policy, step) in self.iter() {
            if step.faults < self.get(best).faults {
                best = policy;
            }
        }
        best
    }
}

/// Runs all three policies over the same input and keeps only their totals
pub fn compare(references: &[PageId], capacity: usize) -> Result<Comparison> {
    let comparison = Comparison {
        fifo: simulate_fifo(references, capacity)?.into_final_step(),
        lru: simulate_lru(references, capacity)?.into_final_step(),
        optimal: simulate_optimal(references, capacity)?.into_final_step(),
    };
    log_comparison(&comparison, references.len(), capacity);
    Ok(comparison)
}

/// Same as [`compare`], with each policy simulated on its own thread
pub fn compare_parallel(references: &[PageId], capacity: usize) -> Result<Comparison> {
    let scoped = crossbeam::scope(|s| {
        let fifo = s.spawn(|_| simulate_fifo(references, capacity));
        let lru = s.spawn(|_| simulate_lru(references, capacity));
        let optimal = s.spawn(|_| simulate_optimal(references, capacity));

        (joined(fifo.join()), joined(lru.join()), joined(optimal.join()))
    });

    let (fifo, lru, optimal) = joined(scoped);
    let comparison = Comparison {
        fifo: fifo?.into_final_step(),
        lru: lru?.into_final_step(),
        optimal: optimal?.into_final_step(),
    };
    log_comparison(&comparison, references.len(), capacity);
    Ok(comparison)
}

// Simulators do not panic on valid input; re-raise if one ever does
fn joined<T>(result: thread::Result<T>) -> T {
    result.unwrap_or_else(|payload| panic::resume_unwind(payload))
}

fn log_comparison(comparison: &Comparison, reference_count: usize, capacity: usize) {
    info!(
        "Compared {} references on {} frames: FIFO {} faults, LRU {} faults, Optimal {} faults",
        reference_count,
        capacity,
        comparison.fifo.faults,
        comparison.lru.faults,
        comparison.optimal.faults
    );
}
