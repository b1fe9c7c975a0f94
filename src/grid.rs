use crate::cell::Cell;
use crate::error::{MazeError, Result};

/// Smallest grid that can hold at least one room cell plus its boundary.
pub const MIN_DIMENSION: i32 = 3;

/// Cell arena: a single owned array of cells with row-major sequential ids.
/// All other structures refer to cells by id, never by reference.
#[derive(Debug, Clone)]
pub struct Grid {
    pub height: i32,
    pub width: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of all-wall cells. Rejects dimensions below
    /// [`MIN_DIMENSION`] before allocating anything.
    pub fn new(height: i32, width: i32) -> Result<Self> {
        if height < MIN_DIMENSION || width < MIN_DIMENSION {
            return Err(MazeError::InvalidDimensions { height, width });
        }
        let mut cells = Vec::with_capacity((height * width) as usize);
        let mut id = 0;
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::new(id, row, col));
                id += 1;
            }
        }
        Ok(Grid {
            height,
            width,
            cells,
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert (row, col) coordinates to a cell id. Coordinates must be in
    /// bounds; use [`Grid::in_bounds`] first when they come from arithmetic.
    pub fn get_id(&self, row: i32, col: i32) -> usize {
        (row * self.width + col) as usize
    }

    /// Convert a cell id back to (row, col) coordinates.
    pub fn get_coords(&self, id: usize) -> (i32, i32) {
        let id = id as i32;
        (id / self.width, id % self.width)
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width
    }

    pub fn cell(&self, id: usize) -> &Cell {
        &self.cells[id]
    }

    /// Out-of-bounds ids read as walls.
    pub fn is_wall(&self, id: usize) -> bool {
        self.cells.get(id).map(|c| c.is_wall).unwrap_or(true)
    }

    pub fn carve(&mut self, id: usize) {
        if let Some(cell) = self.cells.get_mut(id) {
            cell.carve();
        }
    }

    /// Room cells sit at odd row and column inside the boundary band and are
    /// the only spanning-tree candidates during graph construction.
    pub fn is_room_cell(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col)
            && row % 2 == 1
            && col % 2 == 1
            && row < self.height - 1
            && col < self.width - 1
    }

    /// The wall cell physically between two cells exactly 2 grid-units apart
    /// horizontally or vertically, if the pair has one.
    pub fn midpoint_between(&self, a: usize, b: usize) -> Option<usize> {
        let (ar, ac) = self.get_coords(a);
        let (br, bc) = self.get_coords(b);
        if ac == bc && (ar - br).abs() == 2 {
            Some(self.get_id((ar + br) / 2, ac))
        } else if ar == br && (ac - bc).abs() == 2 {
            Some(self.get_id(ar, (ac + bc) / 2))
        } else {
            None
        }
    }
}
