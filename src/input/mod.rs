use macroquad::prelude::*;

use crate::application::Session;
use crate::domain::Grid;
use crate::ui::{self, Button};

/// High-level command resolved from toolbar clicks or keyboard shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    Stop,
}

/// Resolve a toolbar click into an action
pub fn toolbar_action(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Action> {
    buttons.iter().enumerate().find_map(|(idx, button)| {
        button.is_clicked(mouse_pos).then(|| match idx {
            0 => Action::TogglePause,
            _ => Action::Stop,
        })
    })
}

/// Keyboard shortcuts mirroring the toolbar
pub fn keyboard_action() -> Option<Action> {
    if is_key_pressed(KeyCode::Space) {
        Some(Action::TogglePause)
    } else if is_key_pressed(KeyCode::Escape) {
        Some(Action::Stop)
    } else {
        None
    }
}

/// Map a screen position to the grid cell under it, if any
pub fn screen_to_cell(grid: &Grid, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    let (grid_width, grid_height) = grid.dimensions();
    let cell = ui::cell_size(grid_width, grid_height);

    let gx = (mouse_pos.0 / cell).floor() as i64;
    let gy = ((mouse_pos.1 - ui::TOOLBAR_HEIGHT) / cell).floor() as i64;

    (gx >= 0 && gy >= 0 && gx < grid_width as i64 && gy < grid_height as i64)
        .then(|| (gx as usize, gy as usize))
}

/// Route a left click to a cell toggle. All per-cell input goes through
/// this one mapping; the session ignores edits while running.
pub fn handle_cell_toggle(session: &mut Session, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.1 < ui::TOOLBAR_HEIGHT {
        return;
    }
    if let Some((x, y)) = screen_to_cell(&session.grid, mouse_pos) {
        session.toggle_cell(x, y);
    }
}
