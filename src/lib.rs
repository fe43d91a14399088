// Page replacement simulator

pub mod common;
pub mod input;
pub mod playback;
pub mod simulator;

// Re-export key items for convenient access
pub use common::types::{FrameId, FrameSet, PageId};
pub use simulator::{
    compare, compare_parallel, simulate, simulate_fifo, simulate_lru, simulate_optimal,
    Comparison, Outcome, Policy, SimulationError, Step, StepTrace,
};
pub use playback::{PlaybackConfig, PlaybackError, Session};
pub use input::{InputConfig, InputError};
