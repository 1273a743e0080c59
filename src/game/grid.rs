//! Square grid of cell flags
//!
//! The grid is a render-facing view: `is_snake` flags are rewritten from the
//! snake on every change, and `is_food` is set through the cached food
//! coordinate so at most one cell carries food.

use tracing::warn;

use super::error::ConfigError;
use super::state::Position;

/// Flags of a single grid location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCell {
    pub is_food: bool,
    pub is_snake: bool,
}

/// `size x size` matrix of cells, indexed `[x][y]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<GridCell>>,
    food: Option<Position>,
}

impl Grid {
    /// Create a grid with every flag cleared
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::InvalidGridSize(size));
        }

        Ok(Self {
            size,
            cells: vec![vec![GridCell::default(); size]; size],
            food: None,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.size * self.size
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.to_index(self.size).is_some()
    }

    pub fn cell(&self, pos: Position) -> Option<&GridCell> {
        let (x, y) = pos.to_index(self.size)?;
        Some(&self.cells[x][y])
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut GridCell> {
        let (x, y) = pos.to_index(self.size)?;
        Some(&mut self.cells[x][y])
    }

    /// Columns of cells, outer index `x`
    pub fn columns(&self) -> &[Vec<GridCell>] {
        &self.cells
    }

    /// Cached coordinate of the cell currently holding food
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Clear every flag and forget the food coordinate
    pub fn clear(&mut self) {
        for column in &mut self.cells {
            column.fill(GridCell::default());
        }
        self.food = None;
    }

    /// Replace the snake occupancy with exactly `positions`.
    ///
    /// Full rewrite: every `is_snake` flag is cleared first.
    pub fn set_snake_cells<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Position>,
    {
        for column in &mut self.cells {
            for cell in column.iter_mut() {
                cell.is_snake = false;
            }
        }

        for pos in positions {
            match self.cell_mut(pos) {
                Some(cell) => cell.is_snake = true,
                None => warn!(x = pos.x, y = pos.y, "ignoring snake cell outside the grid"),
            }
        }
    }

    /// Move the food flag to `food`, or clear it when `None`
    pub fn set_food(&mut self, food: Option<Position>) {
        if let Some(old) = self.food.take() {
            if let Some(cell) = self.cell_mut(old) {
                cell.is_food = false;
            }
        }

        let Some(pos) = food else {
            return;
        };

        match self.cell_mut(pos) {
            Some(cell) => {
                cell.is_food = true;
                self.food = Some(pos);
            }
            None => warn!(x = pos.x, y = pos.y, "ignoring food outside the grid"),
        }
    }

    /// Coordinates whose `is_snake` flag is set
    pub fn snake_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell.is_snake)
    }

    /// Coordinates whose `is_food` flag is set
    pub fn food_positions(&self) -> Vec<Position> {
        self.positions_where(|cell| cell.is_food)
    }

    fn positions_where(&self, pred: impl Fn(&GridCell) -> bool) -> Vec<Position> {
        let mut out = Vec::new();
        for (x, column) in self.cells.iter().enumerate() {
            for (y, cell) in column.iter().enumerate() {
                if pred(cell) {
                    out.push(Position::new(x as i32, y as i32));
                }
            }
        }
        out
    }
}
