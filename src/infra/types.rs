use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Unbounded 4-neighbourhood, in North, South, West, East order.
    pub fn neighbors(&self) -> [Position; 4] {
        [
            self.step(Direction::North),
            self.step(Direction::South),
            self.step(Direction::West),
            self.step(Direction::East),
        ]
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }

    /// Unit direction leading from `from` to an adjacent `to`.
    /// Returns `None` when the two cells are not 4-adjacent.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let delta = (to.row - from.row, to.col - from.col);
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }
}

/// Square grid extent, `0..size` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub size: i32,
}

impl Bounds {
    pub fn square(size: i32) -> Self {
        Self { size }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.row >= 0 && pos.row < self.size && pos.col >= 0 && pos.col < self.size
    }

    /// In-grid neighbours of `pos`, preserving the North, South, West, East order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors()
            .into_iter()
            .filter(|n| self.contains(n))
            .collect()
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    pub fn area(&self) -> usize {
        (self.size.max(0) as usize).pow(2)
    }
}
