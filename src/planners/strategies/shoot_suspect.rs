use rand::RngCore;
use tracing::debug;

use crate::infra::Position;
use crate::planners::Action;
use crate::planners::strategies::planner::{DecisionContext, SelectAction};

/// Spends the arrow only when exactly one neighbour is a wumpus suspect.
pub struct ShootSuspectStrategy;

impl SelectAction for ShootSuspectStrategy {
    fn name(&self) -> &'static str {
        "ShootSuspectStrategy"
    }

    fn is_emergency(&self) -> bool {
        true
    }

    fn try_select(
        &mut self,
        ctx: &DecisionContext<'_>,
        _candidates: &[Position],
        _rng: &mut dyn RngCore,
    ) -> Option<Action> {
        if !ctx.has_arrow {
            return None;
        }

        let targets: Vec<Position> = ctx
            .neighbors
            .iter()
            .filter(|n| ctx.knowledge.stench.is_suspect(n))
            .copied()
            .collect();

        match targets.as_slice() {
            [target] => Some(Action::Attack(*target)),
            [] => None,
            _ => {
                debug!("{} wumpus suspects next to {}, holding the arrow", targets.len(), ctx.current);
                None
            }
        }
    }
}
