use std::collections::VecDeque;

use super::Replacer;
use crate::common::types::{FrameId, FrameSet, PageId};

/// Simple LRU (Least Recently Used) page replacement policy
///
/// Front of the list is the least recently used slot, back the most recent.
pub struct LRUReplacer {
    lru_list: VecDeque<FrameId>,
}

impl LRUReplacer {
    pub fn new(pool_size: usize) -> Self {
        Self {
            lru_list: VecDeque::with_capacity(pool_size),
        }
    }

    /// Remove a frame from the recency list
    fn remove(&mut self, frame_id: FrameId) {
        if let Some(pos) = self.lru_list.iter().position(|&id| id == frame_id) {
            self.lru_list.remove(pos);
        }
    }
}

impl Replacer for LRUReplacer {
    fn record_access(&mut self, frame_id: FrameId) {
        self.remove(frame_id);
        self.lru_list.push_back(frame_id);
    }

    fn record_load(&mut self, frame_id: FrameId) {
        self.lru_list.push_back(frame_id);
    }

    fn victim(&mut self, _frames: &FrameSet, _upcoming: &[PageId]) -> Option<FrameId> {
        self.lru_list.pop_front()
    }
}
