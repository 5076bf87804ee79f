// Domain layer - the Game of Life engine
pub mod domain;

// Application layer - session state and setup validation
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Session, SetupError, SetupForm};
pub use domain::{Cell, Grid, GridError, Pattern, presets};
