use log::debug;

use super::Replacer;
use crate::common::types::{FrameId, FrameSet, PageId};

/// Clairvoyant replacement (Belady's MIN).
///
/// Keeps no state between faults: the victim is recomputed from the remaining
/// reference sequence every time.
#[derive(Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for OptimalReplacer {
    fn record_access(&mut self, _frame_id: FrameId) {}

    fn record_load(&mut self, _frame_id: FrameId) {}

    fn victim(&mut self, frames: &FrameSet, upcoming: &[PageId]) -> Option<FrameId> {
        let mut farthest: Option<(FrameId, usize)> = None;

        for (frame_id, page) in frames.occupied() {
            let Some(distance) = upcoming.iter().position(|&p| p == page) else {
                // Never referenced again: nothing can beat it, first such slot wins
                debug!("Optimal victim {} (page {} not referenced again)", frame_id, page);
                return Some(frame_id);
            };

            // Strictly greater, so equal distances keep the lower slot
            if farthest.is_none_or(|(_, best)| distance > best) {
                farthest = Some((frame_id, distance));
            }
        }

        if let Some((frame_id, distance)) = farthest {
            debug!("Optimal victim {} (next use in {} references)", frame_id, distance + 1);
        }
        farthest.map(|(frame_id, _)| frame_id)
    }
}
