use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid frame capacity {0}: at least one frame is required")]
    InvalidCapacity(usize),
    #[error("Replacer found no victim for reference {0} with all frames occupied")]
    NoVictim(usize),
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulationError>;
