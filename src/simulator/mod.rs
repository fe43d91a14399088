pub mod compare;
pub mod engine;
pub mod error;
pub mod replacer;
pub mod step;

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::common::types::PageId;
use replacer::{FIFOReplacer, LRUReplacer, OptimalReplacer};

pub use compare::{compare, compare_parallel, Comparison};
pub use error::{Result, SimulationError};
pub use step::{Outcome, Step, StepTrace};

/// Page replacement policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    #[default]
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Short key, as accepted by `FromStr`
    pub fn key(self) -> &'static str {
        match self {
            Policy::Fifo => "fifo",
            Policy::Lru => "lru",
            Policy::Optimal => "optimal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO (First In First Out)",
            Policy::Lru => "LRU (Least Recently Used)",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Lru => write!(f, "LRU"),
            Policy::Optimal => write!(f, "Optimal"),
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            other => Err(format!("unknown policy '{}' (expected fifo, lru or optimal)", other)),
        }
    }
}

/// Runs `references` through the given policy on `capacity` frames
pub fn simulate(policy: Policy, references: &[PageId], capacity: usize) -> Result<StepTrace> {
    match policy {
        Policy::Fifo => simulate_fifo(references, capacity),
        Policy::Lru => simulate_lru(references, capacity),
        Policy::Optimal => simulate_optimal(references, capacity),
    }
}

pub fn simulate_fifo(references: &[PageId], capacity: usize) -> Result<StepTrace> {
    engine::run(FIFOReplacer::new(capacity), references, capacity)
}

pub fn simulate_lru(references: &[PageId], capacity: usize) -> Result<StepTrace> {
    engine::run(LRUReplacer::new(capacity), references, capacity)
}

/// Clairvoyant simulation; needs the whole reference sequence up front
pub fn simulate_optimal(references: &[PageId], capacity: usize) -> Result<StepTrace> {
    engine::run(OptimalReplacer::new(), references, capacity)
}
