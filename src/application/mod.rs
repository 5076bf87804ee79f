mod session;
mod setup;

pub use session::{STEP_INTERVAL, Session};
pub use setup::{MAX_GRID_DIM, MIN_GRID_DIM, SetupError, SetupForm};
