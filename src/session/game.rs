use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::infra::{DefaultObserver, Position, SessionObserver};
use crate::planners::StrategyPlanner;
use crate::session::{
    Attempt, AttemptStatus, Score, ScoringRules, SessionError, StepEvent, Turn,
};
use crate::state::{DangerMemory, KnowledgeState};
use crate::world::{GridWorld, WorldConfig};

/// Result of a single `step`, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub attempt: u32,
    pub event: StepEvent,
    pub position: Position,
    pub score: i32,
    pub status: AttemptStatus,
}

impl StepOutcome {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Tally of finished attempts over a `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub attempts: u32,
    pub gold_found: u32,
    pub deaths: u32,
    pub impossible: u32,
    pub step_limited: u32,
    pub final_score: i32,
}

impl SessionSummary {
    fn record(&mut self, status: AttemptStatus) {
        self.attempts += 1;
        match status {
            AttemptStatus::GoalReached => self.gold_found += 1,
            AttemptStatus::Dead { .. } => self.deaths += 1,
            AttemptStatus::Impossible => self.impossible += 1,
            AttemptStatus::AtStart | AttemptStatus::Exploring => self.step_limited += 1,
        }
    }
}

/// One world instance and the attempts played on it.
///
/// Owns the score and the memory of fatal cells, both of which survive
/// attempts and are reset only when a new world is created.
pub struct Session {
    seed: u64,
    rng: StdRng,
    rules: ScoringRules,
    planner: StrategyPlanner,
    observer: Box<dyn SessionObserver>,
    world: Option<GridWorld>,
    score: Score,
    memory: DangerMemory,
    attempt: Option<Attempt>,
    attempts_started: u32,
}

impl Session {
    /// Session with a random seed and the default observer.
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_observer(seed, DefaultObserver::default())
    }

    pub fn with_observer(seed: u64, observer: impl SessionObserver + 'static) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            rules: ScoringRules::default(),
            planner: StrategyPlanner::new(),
            observer: Box::new(observer),
            world: None,
            score: Score::new(),
            memory: DangerMemory::new(),
            attempt: None,
            attempts_started: 0,
        }
    }

    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a fresh world and starts the first attempt on it.
    pub fn new_world(&mut self, config: WorldConfig) -> &GridWorld {
        let world = GridWorld::generate(&config, &mut self.rng);
        self.load_world(world)
    }

    /// Installs a prepared world, wiping score and remembered danger.
    pub fn load_world(&mut self, world: GridWorld) -> &GridWorld {
        self.score.reset();
        self.memory.clear();
        self.attempts_started = 0;
        self.attempt = None;
        self.observer.on_world_created(&world, self.seed);
        let world = self.world.insert(world);

        let attempt = Attempt::begin(1, &*world, &self.memory);
        self.attempts_started = 1;
        self.observer.on_attempt_started(&attempt, &self.memory);
        self.attempt = Some(attempt);

        world
    }

    pub fn try_new_attempt(&mut self) -> Result<u32, SessionError> {
        let world = self.world.as_ref().ok_or(SessionError::NoWorld)?;
        self.attempts_started += 1;
        let attempt = Attempt::begin(self.attempts_started, world, &self.memory);
        debug!(
            "Attempt {} seeded with {} remembered fatal cells",
            self.attempts_started,
            self.memory.len()
        );
        self.observer.on_attempt_started(&attempt, &self.memory);
        self.attempt = Some(attempt);
        Ok(self.attempts_started)
    }

    /// Starts a new attempt on the current world.
    ///
    /// # Panics
    ///
    /// Panics if no world has been created.
    pub fn new_attempt(&mut self) -> u32 {
        match self.try_new_attempt() {
            Ok(number) => number,
            Err(err) => panic!("new_attempt called without a world: {err}"),
        }
    }

    /// Advances the current attempt by one action. A finished attempt is
    /// replaced by a fresh one instead.
    pub fn try_step(&mut self) -> Result<StepOutcome, SessionError> {
        if self.world.is_none() {
            return Err(SessionError::NoWorld);
        }

        if self.attempt.as_ref().is_none_or(|a| a.is_terminal()) {
            let attempt = self.try_new_attempt()?;
            let outcome = self.outcome(StepEvent::AttemptStarted { attempt })?;
            if let (Some(world), Some(attempt)) = (&self.world, &self.attempt) {
                self.observer.on_step(&outcome, attempt, world);
            }
            return Ok(outcome);
        }

        let (Some(world), Some(attempt)) = (self.world.as_mut(), self.attempt.as_mut()) else {
            return Err(SessionError::NoWorld);
        };
        let mut turn = Turn {
            world,
            planner: &mut self.planner,
            rng: &mut self.rng,
            score: &mut self.score,
            rules: &self.rules,
            memory: &mut self.memory,
        };
        let event = attempt.step(&mut turn);
        let outcome = self.outcome(event)?;

        if let (Some(world), Some(attempt)) = (&self.world, &self.attempt) {
            self.observer.on_step(&outcome, attempt, world);
            if attempt.is_terminal() {
                self.observer.on_attempt_finished(attempt, self.score.total());
            }
        }
        Ok(outcome)
    }

    /// Advances the current attempt by one action.
    ///
    /// # Panics
    ///
    /// Panics if no world has been created.
    pub fn step(&mut self) -> StepOutcome {
        match self.try_step() {
            Ok(outcome) => outcome,
            Err(err) => panic!("step called without a world: {err}"),
        }
    }

    fn outcome(&self, event: StepEvent) -> Result<StepOutcome, SessionError> {
        let attempt = self.attempt.as_ref().ok_or(SessionError::NoWorld)?;
        Ok(StepOutcome {
            attempt: attempt.number(),
            event,
            position: attempt.position(),
            score: self.score.total(),
            status: attempt.status(),
        })
    }

    /// Plays `attempts` attempts, each capped at `max_steps` actions.
    pub fn run(&mut self, attempts: u32, max_steps: u32) -> Result<SessionSummary, SessionError> {
        let mut summary = SessionSummary::default();

        for index in 0..attempts {
            if index > 0 {
                self.try_new_attempt()?;
            }
            loop {
                let outcome = self.try_step()?;
                if outcome.is_terminal() {
                    break;
                }
                if self.attempt.as_ref().is_some_and(|a| a.steps() >= max_steps) {
                    warn!("Attempt {} hit the {} step limit", outcome.attempt, max_steps);
                    break;
                }
            }
            summary.record(self.status().unwrap_or(AttemptStatus::AtStart));
        }

        summary.final_score = self.score.total();
        info!(
            "Session finished: {} attempts, {} gold, {} deaths, {} impossible, score {}",
            summary.attempts,
            summary.gold_found,
            summary.deaths,
            summary.impossible,
            summary.final_score
        );
        self.observer.on_session_finished(&summary);
        Ok(summary)
    }

    pub fn world(&self) -> Option<&GridWorld> {
        self.world.as_ref()
    }

    pub fn attempt(&self) -> Option<&Attempt> {
        self.attempt.as_ref()
    }

    pub fn attempt_number(&self) -> u32 {
        self.attempts_started
    }

    pub fn knowledge(&self) -> Option<&KnowledgeState> {
        self.attempt.as_ref().map(Attempt::knowledge)
    }

    pub fn position(&self) -> Option<Position> {
        self.attempt.as_ref().map(Attempt::position)
    }

    pub fn score(&self) -> i32 {
        self.score.total()
    }

    pub fn has_arrow(&self) -> bool {
        self.attempt.as_ref().is_some_and(Attempt::has_arrow)
    }

    pub fn status(&self) -> Option<AttemptStatus> {
        self.attempt.as_ref().map(Attempt::status)
    }

    pub fn is_terminal(&self) -> bool {
        self.attempt.as_ref().is_some_and(Attempt::is_terminal)
    }

    pub fn danger_memory(&self) -> &DangerMemory {
        &self.memory
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
