use log::debug;

use crate::common::types::{FrameSet, PageId};
use crate::simulator::error::{Result, SimulationError};
use crate::simulator::replacer::Replacer;
use crate::simulator::step::{Outcome, Step, StepTrace};

/// Drives one simulation run.
///
/// Owns the frame set for the duration of the run; the replacer only sees slot
/// indices. Empty slots are always consumed before the replacer is asked for a
/// victim.
pub fn run<R: Replacer>(
    mut replacer: R,
    references: &[PageId],
    capacity: usize,
) -> Result<StepTrace> {
    if capacity == 0 {
        return Err(SimulationError::InvalidCapacity(capacity));
    }

    let mut frames = FrameSet::new(capacity);
    let mut trace = StepTrace::new(Step::initial(capacity), references.len());
    let mut faults = 0;
    let mut hits = 0;

    for (position, &page) in references.iter().enumerate() {
        let mut evicted = None;

        let (slot, outcome) = match frames.find(page) {
            Some(frame_id) => {
                hits += 1;
                replacer.record_access(frame_id);
                (frame_id, Outcome::Hit)
            }
            None => {
                faults += 1;
                let frame_id = match frames.first_empty() {
                    Some(frame_id) => frame_id,
                    None => replacer
                        .victim(&frames, &references[position + 1..])
                        .ok_or(SimulationError::NoVictim(position))?,
                };

                evicted = frames.replace(frame_id, page);
                replacer.record_load(frame_id);

                if let Some(old_page) = evicted {
                    debug!("Reference {}: page {} evicted page {} from {}", position, page, old_page, frame_id);
                }
                (frame_id, Outcome::Fault)
            }
        };

        trace.push(Step {
            page: Some(page),
            frames: frames.clone(),
            outcome: Some(outcome),
            evicted,
            slot: Some(slot),
            faults,
            hits,
        });
    }

    debug!(
        "Simulated {} references on {} frames: {} faults, {} hits",
        references.len(),
        capacity,
        faults,
        hits
    );

    Ok(trace)
}
