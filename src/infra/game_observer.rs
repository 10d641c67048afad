use crate::session::{Attempt, SessionSummary, StepOutcome};
use crate::state::DangerMemory;
use crate::world::GridWorld;

/// Trait for observing session events during execution
pub trait SessionObserver {
    /// Called when a new world is installed, before its first attempt starts
    fn on_world_created(&mut self, world: &GridWorld, seed: u64);

    /// Called when an attempt starts on the current world
    fn on_attempt_started(&mut self, attempt: &Attempt, memory: &DangerMemory);

    /// Called after every step, including one that replaced a finished attempt
    fn on_step(&mut self, outcome: &StepOutcome, attempt: &Attempt, world: &GridWorld);

    /// Called once when an attempt reaches a terminal state
    fn on_attempt_finished(&mut self, attempt: &Attempt, score: i32);

    /// Called when `Session::run` completes
    fn on_session_finished(&mut self, summary: &SessionSummary) {
        let _ = summary;
    }
}

/// Observer that ignores everything.
pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn on_world_created(&mut self, _world: &GridWorld, _seed: u64) {}

    fn on_attempt_started(&mut self, _attempt: &Attempt, _memory: &DangerMemory) {}

    fn on_step(&mut self, _outcome: &StepOutcome, _attempt: &Attempt, _world: &GridWorld) {}

    fn on_attempt_finished(&mut self, _attempt: &Attempt, _score: i32) {}
}
