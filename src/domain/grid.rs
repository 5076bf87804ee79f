use super::Cell;
use rayon::prelude::*;
use thiserror::Error;

/// Error raised when a grid cannot be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Grid manages the 2D cellular automaton state.
/// Generations are immutable: stepping returns a fresh grid computed
/// entirely from the previous one, so neighbor counts never mix states
/// from two generations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Empty dimensions are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.index(x, y)])
    }

    /// Set cell at position; out-of-range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip a single cell; out-of-range coordinates are ignored.
    /// Callers must not toggle while a step is in flight.
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Count live neighbors among the up to 8 adjacent cells.
    /// Positions outside the grid count as dead; the edges do not wrap.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width as i64, self.height as i64);

        (-1i64..=1)
            .flat_map(|dy| (-1i64..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| (x as i64 + dx, y as i64 + dy))
            .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && nx < w && ny < h)
            .filter(|&(nx, ny)| {
                self.get(nx as usize, ny as usize)
                    .is_some_and(Cell::is_alive)
            })
            .count() as u8
    }

    /// Advance one generation (serial). All neighbor counts are taken from
    /// the current grid before any cell of the successor is produced.
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                self.cells[self.index(x, y)].next_state(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel step using rayon. Same result as `step`; only worth it
    /// for grids far larger than the interactive sizes.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map(|y| (0..self.width).into_par_iter().map(move |x| (x, y)))
            .map(|(x, y)| {
                self.cells[self.index(x, y)].next_state(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Randomize the grid, each cell independently alive with probability 0.5
    pub fn randomize(mut self) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.5) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x, y)]))
    }
}
