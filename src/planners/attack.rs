use tracing::{debug, warn};

use crate::infra::{Direction, Position};
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit(Position),
    Miss,
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit(_))
    }
}

/// Fires the arrow from `current` through the adjacent `target` and onwards in
/// a straight line. The first wumpus on the line dies; the stench is not
/// recomputed here.
#[tracing::instrument(level = "debug", skip(world))]
pub fn resolve_attack<W: World + ?Sized>(
    world: &mut W,
    current: Position,
    target: Position,
) -> ShotOutcome {
    let Some(direction) = Direction::between(current, target) else {
        warn!("Arrow target {} is not adjacent to {}, shot wasted", target, current);
        return ShotOutcome::Miss;
    };

    let bounds = world.bounds();
    let mut pos = target;
    while bounds.contains(&pos) {
        if world.remove_wumpus(pos) {
            debug!("Arrow flying {:?} killed the wumpus at {}", direction, pos);
            return ShotOutcome::Hit(pos);
        }
        pos = pos.step(direction);
    }
    ShotOutcome::Miss
}
