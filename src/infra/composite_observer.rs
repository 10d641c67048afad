use crate::infra::SessionObserver;
use crate::session::{Attempt, SessionSummary, StepOutcome};
use crate::state::DangerMemory;
use crate::world::GridWorld;

pub struct CompositeObserver {
    observers: Vec<Box<dyn SessionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Box<dyn SessionObserver>>) -> Self {
        Self { observers }
    }

    pub fn push(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }
}

impl SessionObserver for CompositeObserver {
    fn on_world_created(&mut self, world: &GridWorld, seed: u64) {
        for observer in &mut self.observers {
            observer.on_world_created(world, seed);
        }
    }

    fn on_attempt_started(&mut self, attempt: &Attempt, memory: &DangerMemory) {
        for observer in &mut self.observers {
            observer.on_attempt_started(attempt, memory);
        }
    }

    fn on_step(&mut self, outcome: &StepOutcome, attempt: &Attempt, world: &GridWorld) {
        for observer in &mut self.observers {
            observer.on_step(outcome, attempt, world);
        }
    }

    fn on_attempt_finished(&mut self, attempt: &Attempt, score: i32) {
        for observer in &mut self.observers {
            observer.on_attempt_finished(attempt, score);
        }
    }

    fn on_session_finished(&mut self, summary: &SessionSummary) {
        for observer in &mut self.observers {
            observer.on_session_finished(summary);
        }
    }
}
