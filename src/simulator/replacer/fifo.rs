use std::collections::VecDeque;

use super::Replacer;
use crate::common::types::{FrameId, FrameSet, PageId};

/// First-in-first-out replacement: slots leave in the order they were loaded
pub struct FIFOReplacer {
    fifo_queue: VecDeque<FrameId>,
}

impl FIFOReplacer {
    pub fn new(pool_size: usize) -> Self {
        Self {
            fifo_queue: VecDeque::with_capacity(pool_size),
        }
    }
}

impl Replacer for FIFOReplacer {
    // Admission order only; hits never reorder the queue.
    fn record_access(&mut self, _frame_id: FrameId) {}

    fn record_load(&mut self, frame_id: FrameId) {
        self.fifo_queue.push_back(frame_id);
    }

    fn victim(&mut self, _frames: &FrameSet, _upcoming: &[PageId]) -> Option<FrameId> {
        self.fifo_queue.pop_front()
    }
}
