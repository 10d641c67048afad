use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::infra::Position;
use crate::world::{GridWorld, Item, World};

pub const DEFAULT_GRID_SIZE: i32 = 10;
pub const MIN_GRID_SIZE: i32 = 4;
pub const MAX_GRID_SIZE: i32 = 20;
pub const DEFAULT_WUMPUS: u32 = 1;
pub const MAX_WUMPUS: u32 = 5;
pub const DEFAULT_PITS: u32 = 6;
pub const MAX_PITS: u32 = 8;

/// Parameters for generating a world. Always within bounds: the constructor clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldConfig {
    pub size: i32,
    pub wumpus_count: u32,
    pub pit_count: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            wumpus_count: DEFAULT_WUMPUS,
            pit_count: DEFAULT_PITS,
        }
    }
}

impl WorldConfig {
    pub fn new(size: i32, wumpus_count: i64, pit_count: i64) -> Self {
        let clamped = Self {
            size: size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
            wumpus_count: wumpus_count.clamp(0, MAX_WUMPUS as i64) as u32,
            pit_count: pit_count.clamp(0, MAX_PITS as i64) as u32,
        };
        if clamped.size != size
            || clamped.wumpus_count as i64 != wumpus_count
            || clamped.pit_count as i64 != pit_count
        {
            warn!(
                "World parameters clamped: size {} -> {}, wumpus {} -> {}, pits {} -> {}",
                size,
                clamped.size,
                wumpus_count,
                clamped.wumpus_count,
                pit_count,
                clamped.pit_count
            );
        }
        clamped
    }
}

impl GridWorld {
    /// Random world: one gold, then wumpuses, then pits, never overlapping each
    /// other and never inside the safe zone around the start cell.
    #[tracing::instrument(level = "debug", skip(rng))]
    pub fn generate<R: Rng + ?Sized>(config: &WorldConfig, rng: &mut R) -> Self {
        let mut world = GridWorld::empty(config.size);
        let safe_zone = world.safe_zone();

        let mut free: Vec<Position> = world
            .bounds()
            .positions()
            .filter(|pos| !safe_zone.contains(pos))
            .collect();
        free.shuffle(rng);
        let mut free = free.into_iter();

        if let Some(gold) = free.next() {
            world.place(gold, Item::Gold);
        }

        let placed_wumpus = world.place_many(&mut free, Item::Wumpus, config.wumpus_count);
        let placed_pits = world.place_many(&mut free, Item::Pit, config.pit_count);

        if placed_wumpus < config.wumpus_count || placed_pits < config.pit_count {
            warn!(
                "Grid {}x{} too small: placed {}/{} wumpus and {}/{} pits",
                config.size,
                config.size,
                placed_wumpus,
                config.wumpus_count,
                placed_pits,
                config.pit_count
            );
        }

        debug!(
            gold = ?world.gold_position(),
            wumpus = placed_wumpus,
            pits = placed_pits,
            "World generated"
        );
        world
    }

    fn place_many(
        &mut self,
        free: &mut impl Iterator<Item = Position>,
        item: Item,
        count: u32,
    ) -> u32 {
        let mut placed = 0;
        while placed < count {
            let Some(pos) = free.next() else {
                break;
            };
            if self.place(pos, item) {
                placed += 1;
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_config_clamps_out_of_range_values() {
        let config = WorldConfig::new(100, -3, 42);
        assert_eq!(config.size, MAX_GRID_SIZE);
        assert_eq!(config.wumpus_count, 0);
        assert_eq!(config.pit_count, MAX_PITS);

        let config = WorldConfig::new(1, 9, -1);
        assert_eq!(config.size, MIN_GRID_SIZE);
        assert_eq!(config.wumpus_count, MAX_WUMPUS);
        assert_eq!(config.pit_count, 0);
    }

    #[test]
    fn test_generated_world_respects_counts_and_safe_zone() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let config = WorldConfig::new(10, 3, 6);
            let world = GridWorld::generate(&config, &mut rng);
            assert_eq!(world.wumpus_positions().len(), 3);
            assert_eq!(world.pit_positions().len(), 6);
            assert!(world.gold_position().is_some());

            for pos in world.safe_zone() {
                assert!(world.cell(pos).is_empty(), "safe zone cell {} is occupied", pos);
            }
        }
    }

    #[test]
    fn test_small_grid_caps_placement() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = WorldConfig::new(4, 5, 8);
        let world = GridWorld::generate(&config, &mut rng);
        // 16 cells - 3 in the safe zone - 1 gold leaves 12 slots.
        assert_eq!(world.wumpus_positions().len(), 5);
        assert_eq!(world.pit_positions().len(), 7);
    }

    #[test]
    fn test_generation_is_reproducible_for_a_seed() {
        let config = WorldConfig::default();
        let a = GridWorld::generate(&config, &mut StdRng::seed_from_u64(99));
        let b = GridWorld::generate(&config, &mut StdRng::seed_from_u64(99));
        assert_eq!(a.wumpus_positions(), b.wumpus_positions());
        assert_eq!(a.pit_positions(), b.pit_positions());
        assert_eq!(a.gold_position(), b.gold_position());
    }
}
