use std::fmt;
use std::ops::Index;
use serde::{Serialize, Deserialize};

use crate::common::types::{FrameId, FrameSet, PageId};

/// Result of processing one reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Fault,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => write!(f, "Page Hit"),
            Outcome::Fault => write!(f, "Page Fault"),
        }
    }
}

/// State of the frame set immediately after one reference, or before any reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Reference just processed; `None` for the initial step
    pub page: Option<PageId>,
    /// Independent snapshot of the frames at this point
    pub frames: FrameSet,
    /// `None` for the initial step
    pub outcome: Option<Outcome>,
    /// Page removed to make room for `page`
    pub evicted: Option<PageId>,
    /// Slot holding `page` after this step
    pub slot: Option<FrameId>,
    /// Cumulative faults through this step
    pub faults: usize,
    /// Cumulative hits through this step
    pub hits: usize,
}

impl Step {
    pub fn initial(capacity: usize) -> Self {
        Self {
            page: None,
            frames: FrameSet::new(capacity),
            outcome: None,
            evicted: None,
            slot: None,
            faults: 0,
            hits: 0,
        }
    }

    pub fn is_initial(&self) -> bool {
        self.page.is_none()
    }

    pub fn is_hit(&self) -> bool {
        self.outcome == Some(Outcome::Hit)
    }

    pub fn is_fault(&self) -> bool {
        self.outcome == Some(Outcome::Fault)
    }

    /// References processed through this step
    pub fn processed(&self) -> usize {
        self.faults + self.hits
    }

    /// `faults / (faults + hits)`, undefined before the first reference
    pub fn fault_ratio(&self) -> Option<f64> {
        let total = self.processed();
        if total == 0 {
            return None;
        }
        Some(self.faults as f64 / total as f64)
    }

    pub fn hit_ratio(&self) -> Option<f64> {
        self.fault_ratio().map(|ratio| 1.0 - ratio)
    }

    /// Short label for the step result
    pub fn describe(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => "Initial state".to_string(),
        }
    }
}

/// Full ordered record of one simulation run: the initial step followed by one
/// step per reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub(crate) fn new(initial: Step, reference_count: usize) -> Self {
        let mut steps = Vec::with_capacity(reference_count + 1);
        steps.push(initial);
        Self { steps }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Number of steps, including the initial one
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a trace produced by a simulator
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of references processed
    pub fn reference_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn initial(&self) -> &Step {
        &self.steps[0]
    }

    /// Step after the last reference, carrying the run totals
    pub fn final_step(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    pub fn total_faults(&self) -> usize {
        self.final_step().faults
    }

    pub fn total_hits(&self) -> usize {
        self.final_step().hits
    }

    /// Pages evicted over the run, in order
    pub fn evictions(&self) -> Vec<PageId> {
        self.steps.iter().filter_map(|step| step.evicted).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_final_step(mut self) -> Step {
        // A trace always holds the initial step
        self.steps.swap_remove(self.steps.len() - 1)
    }
}

impl Index<usize> for StepTrace {
    type Output = Step;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
