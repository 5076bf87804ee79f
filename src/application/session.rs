use crate::domain::{Grid, GridError};
use tracing::{debug, info};

/// Wall-clock cadence of the simulation, in seconds per generation.
pub const STEP_INTERVAL: f32 = 0.5;

/// Session owns the state of one simulation run: the current grid, the
/// pause flag and the generation counter. Created when the setup screen
/// hands off, dropped when the user stops.
pub struct Session {
    pub grid: Grid,
    pub paused: bool,
    pub generation: u64,
    step_timer: f32,
}

impl Session {
    /// Start a run on a randomly seeded grid of the given dimensions.
    /// The simulation is live immediately.
    pub fn start(width: usize, height: usize) -> Result<Self, GridError> {
        let grid = Grid::new(width, height)?.randomize();
        info!(width, height, population = grid.population(), "simulation started");

        Ok(Self {
            grid,
            paused: false,
            generation: 0,
            step_timer: 0.0,
        })
    }

    /// Toggle play/pause
    pub fn toggle_paused(mut self) -> Self {
        self.paused = !self.paused;
        info!(paused = self.paused, generation = self.generation, "pause toggled");
        self
    }

    /// Flip a cell under user editing. Ignored while the simulation is
    /// running, so an edit never interleaves with a step.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.paused {
            self.grid.toggle(x, y);
        }
    }

    /// Advance the session by one frame's worth of wall-clock time.
    /// A generation is stepped each time the accumulator crosses the
    /// interval; the frame rate itself is irrelevant.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.paused {
            return self;
        }

        self.step_timer += delta_time;
        if self.step_timer >= STEP_INTERVAL {
            self.grid = self.grid.step();
            self.generation += 1;
            self.step_timer = 0.0;
            debug!(
                generation = self.generation,
                population = self.grid.population(),
                "generation advanced"
            );
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn start_seeds_requested_dimensions() {
        let session = Session::start(8, 6).unwrap();
        assert_eq!(session.grid.dimensions(), (8, 6));
        assert!(!session.paused);
        assert_eq!(session.generation, 0);
    }

    #[test]
    fn start_rejects_empty_grid() {
        assert!(Session::start(0, 10).is_err());
        assert!(Session::start(10, 0).is_err());
    }

    #[test]
    fn tick_advances_on_the_interval() {
        let mut session = Session::start(8, 8).unwrap();

        session = session.tick(STEP_INTERVAL / 2.0);
        assert_eq!(session.generation, 0);

        session = session.tick(STEP_INTERVAL / 2.0);
        assert_eq!(session.generation, 1);

        session = session.tick(STEP_INTERVAL);
        assert_eq!(session.generation, 2);
    }

    #[test]
    fn paused_sessions_do_not_advance() {
        let mut session = Session::start(8, 8).unwrap().toggle_paused();
        session = session.tick(STEP_INTERVAL * 4.0);
        assert_eq!(session.generation, 0);
    }

    #[test]
    fn toggle_paused_flips_back_and_forth() {
        let session = Session::start(8, 8).unwrap();
        assert!(!session.paused);
        let session = session.toggle_paused();
        assert!(session.paused);
        let session = session.toggle_paused();
        assert!(!session.paused);
    }

    #[test]
    fn cell_edits_only_apply_while_paused() {
        let mut session = Session::start(8, 8).unwrap();
        let before = session.grid.get(0, 0);

        session.toggle_cell(0, 0);
        assert_eq!(session.grid.get(0, 0), before);

        session = session.toggle_paused();
        session.toggle_cell(0, 0);
        assert_eq!(session.grid.get(0, 0), before.map(Cell::toggle));
    }
}
