use std::hash::{Hash, Hasher};

/// A single grid cell. Identity is the arena index assigned by the grid;
/// coordinates are fixed at construction. Cells start as walls and are
/// carved to passages when the maze is built.
#[derive(Debug, Clone)]
pub struct Cell {
    pub id: usize,
    pub row: i32,
    pub col: i32,
    pub is_wall: bool,
}

impl Cell {
    pub fn new(id: usize, row: i32, col: i32) -> Self {
        Cell {
            id,
            row,
            col,
            is_wall: true,
        }
    }

    /// Turn this cell into a passage.
    pub fn carve(&mut self) {
        self.is_wall = false;
    }
}

/// Equality and hashing go by identity only, never coordinates.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A weighted directed connection between two cells, stored as arena ids.
/// Undirected graph semantics come from storing a link and its `flip()` in
/// the adjacency lists of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

impl Link {
    pub fn new(from: usize, to: usize, weight: u32) -> Self {
        Link { from, to, weight }
    }

    /// The mirror link with swapped endpoints and the same weight.
    pub fn flip(&self) -> Link {
        Link::new(self.to, self.from, self.weight)
    }

    /// Whether two links connect the same unordered cell pair, in either
    /// direction. Weight is not part of the comparison.
    pub fn joins_same_pair(&self, other: &Link) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}
