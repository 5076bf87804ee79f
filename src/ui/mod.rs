mod button;
mod text_field;

pub use button::Button;
pub use text_field::TextField;

use macroquad::prelude::{screen_height, screen_width};

pub const TOOLBAR_HEIGHT: f32 = 48.0;
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 32.0;

/// Width of the area the grid is drawn in
pub fn grid_area_width() -> f32 {
    screen_width()
}

/// Height of the area below the toolbar
pub fn grid_area_height() -> f32 {
    screen_height() - TOOLBAR_HEIGHT
}

/// Edge length of a (square) cell so the whole grid fits the window.
/// Recomputed every frame, so window resizes track automatically.
pub fn cell_size(grid_width: usize, grid_height: usize) -> f32 {
    (grid_area_width() / grid_width as f32).min(grid_area_height() / grid_height as f32)
}

/// Toolbar buttons for the simulation screen; the pause label follows state
pub fn toolbar_buttons(paused: bool) -> Vec<Button> {
    vec![
        Button::new(
            8.0,
            8.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            if paused { "Resume" } else { "Pause" },
        ),
        Button::new(116.0, 8.0, BUTTON_WIDTH, BUTTON_HEIGHT, "Stop"),
    ]
}

/// Centered Start button for the setup screen
pub fn start_button() -> Button {
    Button::new(
        screen_width() / 2.0 - 60.0,
        screen_height() / 2.0 + 90.0,
        120.0,
        BUTTON_HEIGHT + 8.0,
        "Start",
    )
}

/// Centered positions of the width and height fields on the setup screen
pub fn setup_field_positions() -> ((f32, f32), (f32, f32)) {
    let x = screen_width() / 2.0 - 60.0;
    let y = screen_height() / 2.0 - 60.0;
    ((x, y), (x, y + 70.0))
}
