pub mod error;

use std::time::Duration;
use log::debug;

use crate::common::types::PageId;
use crate::input::{self, InputConfig};
use crate::simulator::{self, Outcome, Policy, Step, StepTrace};

pub use error::{PlaybackError, Result};

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 10;

/// Auto-play settings
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// 1 (slowest) to 10 (fastest)
    pub speed: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed: 5 }
    }
}

impl PlaybackConfig {
    pub fn with_speed(speed: u32) -> Result<Self> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(PlaybackError::InvalidSpeed(speed));
        }
        Ok(Self { speed })
    }

    /// Delay between auto-play ticks: 1000ms at speed 1 down to 100ms at speed 10
    pub fn tick_interval(&self) -> Duration {
        let speed = self.speed.clamp(MIN_SPEED, MAX_SPEED) as u64;
        Duration::from_millis(1100 - speed * 100)
    }
}

/// How a reference relates to the playback cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceMark {
    Past(Outcome),
    Current(Outcome),
    Pending,
}

/// Final totals as shown next to the trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub faults: usize,
    pub hits: usize,
    pub fault_ratio: f64,
    pub hit_ratio: f64,
}

impl Summary {
    fn zero() -> Self {
        Self {
            faults: 0,
            hits: 0,
            fault_ratio: 0.0,
            hit_ratio: 0.0,
        }
    }
}

/// Caller-owned playback context over one simulation run.
///
/// Holds the input, the selected policy, the computed trace and a cursor into
/// it. Nothing here mutates the trace; navigation only moves the cursor.
#[derive(Debug, Default)]
pub struct Session {
    references: Vec<PageId>,
    frame_count: usize,
    policy: Policy,
    trace: Option<StepTrace>,
    current: usize,
    config: InputConfig,
    playback: PlaybackConfig,
}

impl Session {
    pub fn new(config: InputConfig, playback: PlaybackConfig) -> Self {
        Self {
            config,
            playback,
            ..Default::default()
        }
    }

    /// Validates the input, runs the simulation and puts the cursor on step 0
    pub fn start(&mut self, references: Vec<PageId>, frame_count: usize, policy: Policy) -> Result<()> {
        input::validate_reference_string(&references)?;
        input::validate_frame_count(frame_count, &self.config)?;

        let trace = simulator::simulate(policy, &references, frame_count)?;
        debug!("Started {} session over {} references on {} frames", policy, references.len(), frame_count);

        self.references = references;
        self.frame_count = frame_count;
        self.policy = policy;
        self.trace = Some(trace);
        self.current = 0;
        Ok(())
    }

    /// Switches policy; a running session is re-simulated from step 0
    pub fn select_policy(&mut self, policy: Policy) -> Result<()> {
        self.policy = policy;
        if self.trace.is_some() {
            self.start(self.references.clone(), self.frame_count, policy)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.trace = None;
        self.current = 0;
    }

    pub fn is_running(&self) -> bool {
        self.trace.is_some()
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn trace(&self) -> Option<&StepTrace> {
        self.trace.as_ref()
    }

    pub fn playback(&self) -> &PlaybackConfig {
        &self.playback
    }

    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        self.playback = PlaybackConfig::with_speed(speed)?;
        Ok(())
    }

    fn trace_ref(&self) -> Result<&StepTrace> {
        self.trace.as_ref().ok_or(PlaybackError::EmptyTrace)
    }

    pub fn current(&self) -> Result<&Step> {
        let trace = self.trace_ref()?;
        Ok(&trace[self.current])
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of references, i.e. the index of the last step
    pub fn total_steps(&self) -> usize {
        self.trace.as_ref().map_or(0, StepTrace::reference_count)
    }

    pub fn can_go_previous(&self) -> bool {
        self.is_running() && self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.is_running() && self.current < self.total_steps()
    }

    pub fn is_at_end(&self) -> bool {
        self.is_running() && self.current == self.total_steps()
    }

    /// Advances one step; `false` at the last step
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves back one step; `false` at the initial step
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn seek(&mut self, step: usize) -> Result<&Step> {
        let trace = self.trace.as_ref().ok_or(PlaybackError::EmptyTrace)?;
        if step >= trace.len() {
            return Err(PlaybackError::StepOutOfRange { step, len: trace.len() });
        }
        self.current = step;
        Ok(&trace[step])
    }

    pub fn rewind(&mut self) {
        self.current = 0;
    }

    /// Prepares auto-play and returns the tick interval. A finished trace
    /// restarts from the initial step.
    pub fn begin_playback(&mut self) -> Result<Duration> {
        self.trace_ref()?;
        if self.is_at_end() {
            self.rewind();
        }
        Ok(self.playback.tick_interval())
    }

    /// Marks each reference as already processed, being processed, or pending
    pub fn reference_marks(&self) -> Vec<ReferenceMark> {
        let Some(trace) = &self.trace else {
            return Vec::new();
        };

        (0..self.references.len())
            .map(|index| {
                let step = index + 1;
                let outcome = trace[step].outcome.unwrap_or(Outcome::Fault);
                if step < self.current {
                    ReferenceMark::Past(outcome)
                } else if step == self.current {
                    ReferenceMark::Current(outcome)
                } else {
                    ReferenceMark::Pending
                }
            })
            .collect()
    }

    /// Whole-run totals once playback has left the initial step, zeros before
    pub fn summary(&self) -> Summary {
        match &self.trace {
            Some(trace) if self.current > 0 => {
                let last = trace.final_step();
                Summary {
                    faults: last.faults,
                    hits: last.hits,
                    fault_ratio: last.fault_ratio().unwrap_or(0.0),
                    hit_ratio: last.hit_ratio().unwrap_or(0.0),
                }
            }
            _ => Summary::zero(),
        }
    }
}
