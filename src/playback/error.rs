use thiserror::Error;

use crate::input::InputError;
use crate::simulator::SimulationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("No simulation has been started")]
    EmptyTrace,
    #[error("Step {step} is out of range (trace has {len} steps)")]
    StepOutOfRange { step: usize, len: usize },
    #[error("Playback speed {0} must be between 1 and 10")]
    InvalidSpeed(u32),
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
