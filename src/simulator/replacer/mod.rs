use crate::common::types::{FrameId, FrameSet, PageId};

mod fifo;
mod lru;
mod optimal;

pub use fifo::FIFOReplacer;
pub use lru::LRUReplacer;
pub use optimal::OptimalReplacer;

/// Victim selection for a fixed-capacity frame set.
///
/// The simulation engine owns the frames and reports every hit and every load;
/// a replacer only tracks the eviction order it needs, keyed by slot.
pub trait Replacer {
    /// A resident page in `frame_id` was referenced again
    fn record_access(&mut self, frame_id: FrameId);

    /// A faulted page was placed into `frame_id`
    fn record_load(&mut self, frame_id: FrameId);

    /// Chooses the slot to evict from a full frame set.
    ///
    /// `upcoming` holds the references strictly after the one being processed.
    fn victim(&mut self, frames: &FrameSet, upcoming: &[PageId]) -> Option<FrameId>;
}
