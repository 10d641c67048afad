use rand::RngCore;
use tracing::debug;

use crate::infra::Position;
use crate::planners::strategies::*;
use crate::planners::{Action, RiskPolicy};
use crate::state::KnowledgeState;

/// Read-only view handed to every strategy for one decision.
pub struct DecisionContext<'a> {
    pub knowledge: &'a KnowledgeState,
    pub current: Position,
    pub neighbors: &'a [Position],
    pub has_arrow: bool,
    pub policy: &'a RiskPolicy,
}

impl<'a> DecisionContext<'a> {
    /// Neighbours not known to be deadly, in neighbour order.
    pub fn candidates(&self) -> Vec<Position> {
        self.neighbors
            .iter()
            .filter(|n| !self.knowledge.is_dangerous(n))
            .copied()
            .collect()
    }
}

pub trait SelectAction {
    fn name(&self) -> &'static str;

    /// Emergency strategies run before the candidate check, so they may fire
    /// even when the agent is boxed in.
    fn is_emergency(&self) -> bool {
        false
    }

    fn try_select(
        &mut self,
        ctx: &DecisionContext<'_>,
        candidates: &[Position],
        rng: &mut dyn RngCore,
    ) -> Option<Action>;
}

/// Ordered chain of strategies; the first one that selects an action wins.
pub struct StrategyPlanner {
    strategies: Vec<Box<dyn SelectAction>>,
    policy: RiskPolicy,
}

impl StrategyPlanner {
    pub fn new() -> Self {
        Self::with_policy(RiskPolicy::default())
    }

    pub fn with_policy(policy: RiskPolicy) -> Self {
        Self {
            strategies: vec![
                Box::new(shoot_suspect::ShootSuspectStrategy),
                Box::new(unexplored_safe::UnexploredSafeStrategy),
                Box::new(least_visited_safe::LeastVisitedSafeStrategy),
                Box::new(least_risk::LeastRiskStrategy),
            ],
            policy,
        }
    }

    #[tracing::instrument(level = "debug", skip(self, knowledge, neighbors, rng))]
    pub fn choose_action(
        &mut self,
        knowledge: &KnowledgeState,
        current: Position,
        neighbors: &[Position],
        has_arrow: bool,
        rng: &mut dyn RngCore,
    ) -> Action {
        let ctx = DecisionContext {
            knowledge,
            current,
            neighbors,
            has_arrow,
            policy: &self.policy,
        };
        let candidates = ctx.candidates();

        for strategy in self.strategies.iter_mut().filter(|s| s.is_emergency()) {
            if let Some(action) = strategy.try_select(&ctx, &candidates, rng) {
                debug!("{} selected {}", strategy.name(), action);
                return action;
            }
        }

        if candidates.is_empty() {
            debug!("No neighbour of {} is free of known danger", current);
            return Action::Impossible;
        }

        for strategy in self.strategies.iter_mut().filter(|s| !s.is_emergency()) {
            if let Some(action) = strategy.try_select(&ctx, &candidates, rng) {
                debug!("{} selected {}", strategy.name(), action);
                return action;
            }
        }

        Action::Impossible
    }
}

impl Default for StrategyPlanner {
    fn default() -> Self {
        Self::new()
    }
}
