use rand::RngCore;
use tracing::{debug, info};

use crate::infra::Position;
use crate::planners::{
    Action, ShotOutcome, StrategyPlanner, forget_stench, observe, resolve_attack,
};
use crate::session::{ScoreEvent, ScoreSink, ScoringRules};
use crate::state::{DangerMemory, KnowledgeState};
use crate::world::{Hazard, Perception, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptStatus {
    AtStart,
    Exploring,
    Dead { cause: Hazard, at: Position },
    GoalReached,
    Impossible,
}

impl AttemptStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AttemptStatus::Dead { .. } | AttemptStatus::GoalReached | AttemptStatus::Impossible
        )
    }

    pub fn describe(&self) -> String {
        match self {
            AttemptStatus::AtStart => "at start".to_string(),
            AttemptStatus::Exploring => "exploring".to_string(),
            AttemptStatus::Dead { cause, at } => {
                format!("fell to a {} at {}, the cell is remembered", cause.as_str(), at)
            }
            AttemptStatus::GoalReached => "found the gold".to_string(),
            AttemptStatus::Impossible => "no reasonable move left, gold deemed unreachable".to_string(),
        }
    }
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Shot {
        target: Position,
        outcome: ShotOutcome,
    },
    Moved {
        to: Position,
        perception: Perception,
    },
    Died {
        at: Position,
        cause: Hazard,
    },
    FoundGold {
        at: Position,
    },
    DeclaredImpossible,
    /// A fresh attempt replaced a finished one.
    AttemptStarted {
        attempt: u32,
    },
    /// The attempt had already ended; nothing changed.
    AlreadyFinished,
}

impl StepEvent {
    pub fn action(&self) -> Option<Action> {
        match self {
            StepEvent::Shot { target, .. } => Some(Action::Attack(*target)),
            StepEvent::Moved { to, .. } => Some(Action::Move(*to)),
            StepEvent::Died { at, .. } | StepEvent::FoundGold { at } => Some(Action::Move(*at)),
            StepEvent::DeclaredImpossible => Some(Action::Impossible),
            StepEvent::AttemptStarted { .. } | StepEvent::AlreadyFinished => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            StepEvent::Shot { outcome, .. } if outcome.is_hit() => {
                "arrow fired... a scream! A wumpus has died".to_string()
            }
            StepEvent::Shot { .. } => "arrow fired... no scream".to_string(),
            StepEvent::Moved { perception, .. } => perception.describe(),
            StepEvent::Died { at, cause } => {
                format!("fell to a {} at {}, the cell will be remembered", cause.as_str(), at)
            }
            StepEvent::FoundGold { at } => format!("found the gold at {}", at),
            StepEvent::DeclaredImpossible => {
                "no reasonable move left, gold deemed unreachable".to_string()
            }
            StepEvent::AttemptStarted { attempt } => {
                format!("attempt {} started, fatal cells are remembered", attempt)
            }
            StepEvent::AlreadyFinished => "attempt already finished".to_string(),
        }
    }
}

/// Everything outside the attempt that a step reads or mutates.
pub struct Turn<'a, W: World + ?Sized> {
    pub world: &'a mut W,
    pub planner: &'a mut StrategyPlanner,
    pub rng: &'a mut dyn RngCore,
    pub score: &'a mut dyn ScoreSink,
    pub rules: &'a ScoringRules,
    pub memory: &'a mut DangerMemory,
}

/// One run of the agent from the start cell to death, gold or giving up.
#[derive(Debug, Clone)]
pub struct Attempt {
    number: u32,
    status: AttemptStatus,
    position: Position,
    has_arrow: bool,
    steps: u32,
    knowledge: KnowledgeState,
}

impl Attempt {
    /// Places the agent on the start cell with one arrow and knowledge seeded
    /// from `memory`, then observes the start cell.
    pub fn begin<W: World + ?Sized>(number: u32, world: &W, memory: &DangerMemory) -> Self {
        let start = world.start();
        let mut attempt = Self {
            number,
            status: AttemptStatus::AtStart,
            position: start,
            has_arrow: true,
            steps: 0,
            knowledge: KnowledgeState::new(start, memory),
        };
        attempt.observe_here(world);
        attempt
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn status(&self) -> AttemptStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_arrow(&self) -> bool {
        self.has_arrow
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn knowledge(&self) -> &KnowledgeState {
        &self.knowledge
    }

    #[tracing::instrument(level = "debug", skip(self, turn), fields(attempt = self.number, pos = %self.position))]
    pub fn step<W: World + ?Sized>(&mut self, turn: &mut Turn<'_, W>) -> StepEvent {
        if self.status.is_terminal() {
            return StepEvent::AlreadyFinished;
        }
        self.status = AttemptStatus::Exploring;
        self.steps += 1;

        let neighbors = turn.world.neighbors(self.position);
        let action = turn.planner.choose_action(
            &self.knowledge,
            self.position,
            &neighbors,
            self.has_arrow,
            &mut *turn.rng,
        );
        debug!("Step {}: {}", self.steps, action);

        match action {
            Action::Attack(target) => self.shoot(turn, target),
            Action::Move(target) => self.advance(turn, target),
            Action::Impossible => {
                self.status = AttemptStatus::Impossible;
                turn.rules.award(&mut *turn.score, ScoreEvent::Impossible);
                info!("Attempt {} declared impossible at {}", self.number, self.position);
                StepEvent::DeclaredImpossible
            }
        }
    }

    fn shoot<W: World + ?Sized>(&mut self, turn: &mut Turn<'_, W>, target: Position) -> StepEvent {
        let outcome = resolve_attack(&mut *turn.world, self.position, target);
        self.has_arrow = false;

        turn.rules.award(&mut *turn.score, ScoreEvent::ArrowShot);
        if outcome.is_hit() {
            turn.rules.award(&mut *turn.score, ScoreEvent::WumpusKilled);
        }
        info!("Arrow shot from {} towards {}: {:?}", self.position, target, outcome);

        // The world changed under the agent: old stench evidence is stale.
        turn.world.recompute_stench();
        forget_stench(&mut self.knowledge);
        self.observe_here(&*turn.world);

        StepEvent::Shot { target, outcome }
    }

    fn advance<W: World + ?Sized>(&mut self, turn: &mut Turn<'_, W>, target: Position) -> StepEvent {
        self.knowledge.previous = Some(self.position);
        self.position = target;
        turn.rules.award(&mut *turn.score, ScoreEvent::Move);

        let contents = turn.world.cell(target);
        if let Some(cause) = contents.hazard() {
            self.status = AttemptStatus::Dead { cause, at: target };
            turn.rules.award(&mut *turn.score, ScoreEvent::Death);
            turn.memory.remember(target);
            self.knowledge.mark_dangerous(target);
            info!("Attempt {} died to a {} at {}", self.number, cause.as_str(), target);
            return StepEvent::Died { at: target, cause };
        }

        if contents.gold {
            self.status = AttemptStatus::GoalReached;
            turn.rules.award(&mut *turn.score, ScoreEvent::Gold);
            self.observe_here(&*turn.world);
            info!("Attempt {} found the gold at {}", self.number, target);
            return StepEvent::FoundGold { at: target };
        }

        let perception = self.observe_here(&*turn.world);
        StepEvent::Moved {
            to: target,
            perception,
        }
    }

    fn observe_here<W: World + ?Sized>(&mut self, world: &W) -> Perception {
        let perception = world.perception(self.position);
        let neighbors = world.neighbors(self.position);
        observe(&mut self.knowledge, self.position, perception, &neighbors);
        perception
    }
}
