use std::collections::HashSet;

use crate::infra::{Bounds, Position};
use crate::world::{CellContents, Perception, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Wumpus,
    Pit,
    Gold,
}

#[derive(Debug, Clone, Copy, Default)]
struct Tile {
    contents: CellContents,
    perception: Perception,
}

/// Row-major N×N grid holding the true placement of hazards and gold.
#[derive(Debug, Clone)]
pub struct GridWorld {
    bounds: Bounds,
    start: Position,
    tiles: Vec<Tile>,
}

impl GridWorld {
    /// Empty world with the agent starting in the bottom-left corner.
    pub fn empty(size: i32) -> Self {
        Self::with_start(size, Position::new(size - 1, 0))
    }

    pub fn with_start(size: i32, start: Position) -> Self {
        let bounds = Bounds::square(size);
        Self {
            bounds,
            start,
            tiles: vec![Tile::default(); bounds.area()],
        }
    }

    pub fn size(&self) -> i32 {
        self.bounds.size
    }

    fn index(&self, pos: &Position) -> Option<usize> {
        if self.bounds.contains(pos) {
            Some((pos.row * self.bounds.size + pos.col) as usize)
        } else {
            None
        }
    }

    /// Start cell plus its neighbours; nothing is ever generated there.
    pub fn safe_zone(&self) -> HashSet<Position> {
        let mut zone: HashSet<Position> = self.bounds.neighbors(self.start).into_iter().collect();
        zone.insert(self.start);
        zone
    }

    /// Places `item` at `pos` and refreshes perception. Returns false when `pos`
    /// is outside the grid or already occupied.
    pub fn place(&mut self, pos: Position, item: Item) -> bool {
        let Some(index) = self.index(&pos) else {
            return false;
        };
        let contents = &mut self.tiles[index].contents;
        if !contents.is_empty() {
            return false;
        }
        match item {
            Item::Wumpus => contents.wumpus = true,
            Item::Pit => contents.pit = true,
            Item::Gold => contents.gold = true,
        }
        self.recompute_perception();
        true
    }

    /// Builder-style `place` for hand-made layouts.
    pub fn with(mut self, pos: Position, item: Item) -> Self {
        self.place(pos, item);
        self
    }

    pub fn recompute_perception(&mut self) {
        self.recompute_stench();
        self.recompute_breeze();
    }

    fn recompute_breeze(&mut self) {
        for tile in &mut self.tiles {
            tile.perception.breeze = false;
        }
        for pos in self.positions_where(|c| c.pit) {
            for neighbor in self.bounds.neighbors(pos) {
                if let Some(index) = self.index(&neighbor) {
                    self.tiles[index].perception.breeze = true;
                }
            }
        }
    }

    fn positions_where(&self, predicate: impl Fn(&CellContents) -> bool) -> Vec<Position> {
        self.bounds
            .positions()
            .filter(|pos| {
                self.index(pos)
                    .is_some_and(|index| predicate(&self.tiles[index].contents))
            })
            .collect()
    }

    pub fn wumpus_positions(&self) -> Vec<Position> {
        self.positions_where(|c| c.wumpus)
    }

    pub fn pit_positions(&self) -> Vec<Position> {
        self.positions_where(|c| c.pit)
    }

    pub fn gold_position(&self) -> Option<Position> {
        self.positions_where(|c| c.gold).into_iter().next()
    }
}

impl World for GridWorld {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn start(&self) -> Position {
        self.start
    }

    fn cell(&self, pos: Position) -> CellContents {
        self.index(&pos)
            .map(|index| self.tiles[index].contents)
            .unwrap_or_default()
    }

    fn perception(&self, pos: Position) -> Perception {
        self.index(&pos)
            .map(|index| self.tiles[index].perception)
            .unwrap_or_default()
    }

    fn remove_wumpus(&mut self, pos: Position) -> bool {
        match self.index(&pos) {
            Some(index) if self.tiles[index].contents.wumpus => {
                self.tiles[index].contents.wumpus = false;
                true
            }
            _ => false,
        }
    }

    fn recompute_stench(&mut self) {
        for tile in &mut self.tiles {
            tile.perception.stench = false;
        }
        for pos in self.wumpus_positions() {
            for neighbor in self.bounds.neighbors(pos) {
                if let Some(index) = self.index(&neighbor) {
                    self.tiles[index].perception.stench = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_derives_perception() {
        let world = GridWorld::empty(5)
            .with(Position::new(1, 1), Item::Wumpus)
            .with(Position::new(3, 3), Item::Pit);

        assert!(world.perception(Position::new(0, 1)).stench);
        assert!(world.perception(Position::new(1, 2)).stench);
        assert!(!world.perception(Position::new(1, 1)).stench);
        assert!(world.perception(Position::new(2, 3)).breeze);
        assert!(world.perception(Position::new(3, 4)).breeze);
        assert!(world.perception(Position::new(4, 0)).is_quiet());
    }

    #[test]
    fn test_place_rejects_overlap_and_out_of_bounds() {
        let mut world = GridWorld::empty(4);
        assert!(world.place(Position::new(0, 0), Item::Gold));
        assert!(!world.place(Position::new(0, 0), Item::Pit));
        assert!(!world.place(Position::new(4, 0), Item::Pit));
        assert_eq!(world.gold_position(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_remove_wumpus_then_recompute_clears_stench() {
        let mut world = GridWorld::empty(5).with(Position::new(2, 2), Item::Wumpus);
        assert!(world.perception(Position::new(2, 1)).stench);

        assert!(world.remove_wumpus(Position::new(2, 2)));
        // Stale until recomputed.
        assert!(world.perception(Position::new(2, 1)).stench);

        world.recompute_stench();
        assert!(!world.perception(Position::new(2, 1)).stench);
        assert!(!world.remove_wumpus(Position::new(2, 2)));
    }

    #[test]
    fn test_safe_zone_is_start_and_neighbors() {
        let world = GridWorld::empty(6);
        let zone = world.safe_zone();
        assert_eq!(zone.len(), 3);
        assert!(zone.contains(&Position::new(5, 0)));
        assert!(zone.contains(&Position::new(4, 0)));
        assert!(zone.contains(&Position::new(5, 1)));
    }

    #[test]
    fn test_out_of_grid_queries_are_empty() {
        let world = GridWorld::empty(4).with(Position::new(0, 0), Item::Pit);
        assert!(world.cell(Position::new(-1, 0)).is_empty());
        assert!(world.perception(Position::new(0, -1)).is_quiet());
    }
}
