pub mod types;

pub use types::{FrameId, FrameSet, PageId};
