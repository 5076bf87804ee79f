use super::{Cell, Grid};

/// A named arrangement of live cells that can be stamped onto a grid.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a pattern from alive cell coordinates; the bounding box is derived
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            width,
            height,
            cells,
        }
    }

    /// Stamp the pattern's live cells onto the grid at the given offset
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive);
        }
    }
}

/// Reference patterns from the Life literature
pub mod presets {
    use super::*;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, a row of three
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_is_derived_from_cells() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));

        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 1));
    }

    #[test]
    fn place_on_applies_offset() {
        let mut grid = Grid::new(6, 6).unwrap();
        presets::block().place_on(&mut grid, 3, 2);

        assert_eq!(grid.get(3, 2), Some(Cell::Alive));
        assert_eq!(grid.get(4, 3), Some(Cell::Alive));
        assert_eq!(grid.get(2, 2), Some(Cell::Dead));
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn place_on_ignores_cells_past_the_edge() {
        let mut grid = Grid::new(5, 5).unwrap();
        presets::glider().place_on(&mut grid, 3, 3);
        // Only the glider's (1,0) cell lands inside the 5x5 grid
        assert_eq!(grid.population(), 1);
    }
}
