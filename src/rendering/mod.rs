use macroquad::prelude::*;

use crate::application::{Session, SetupForm};
use crate::domain::Grid;
use crate::ui::{self, Button};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const RUNNING_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const PAUSED_COLOR: Color = Color::new(1.0, 0.65, 0.0, 1.0);

/// Draw the grid below the toolbar, sized so it always fits the window
pub fn draw_grid(grid: &Grid) {
    let (grid_width, grid_height) = grid.dimensions();
    let cell = ui::cell_size(grid_width, grid_height);

    for (x, y, state) in grid.iter_cells() {
        let screen_x = x as f32 * cell;
        let screen_y = ui::TOOLBAR_HEIGHT + y as f32 * cell;

        let fill = if state.is_alive() {
            ALIVE_COLOR
        } else {
            DEAD_COLOR
        };
        draw_rectangle(screen_x, screen_y, cell, cell, fill);
        draw_rectangle_lines(screen_x, screen_y, cell, cell, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw the toolbar strip with its buttons and the status readout
pub fn draw_toolbar(session: &Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, screen_width(), ui::TOOLBAR_HEIGHT, PANEL_COLOR);
    buttons.iter().for_each(|button| button.draw(mouse_pos));

    let labels = [
        (format!("Generation: {}", session.generation), 240.0, WHITE),
        (format!("Alive: {}", session.grid.population()), 420.0, GRAY),
    ];
    for (text, x, color) in &labels {
        draw_text(text, *x, 30.0, 18.0, *color);
    }

    let (status, status_color) = if session.paused {
        ("Paused", PAUSED_COLOR)
    } else {
        ("Running", RUNNING_COLOR)
    };
    draw_text(status, 560.0, 30.0, 18.0, status_color);
}

/// Draw the setup screen: title, dimension fields, Start button and the
/// last validation error if there is one
pub fn draw_setup(form: &SetupForm, start: &Button, mouse_pos: (f32, f32)) {
    let center_x = screen_width() / 2.0;

    let title = "Welcome to the Game of Life";
    let title_size = measure_text(title, None, 32, 1.0);
    draw_text(
        title,
        center_x - title_size.width / 2.0,
        screen_height() / 4.0,
        32.0,
        WHITE,
    );

    form.width_field.draw(mouse_pos);
    form.height_field.draw(mouse_pos);
    start.draw(mouse_pos);

    if let Some(message) = form.error() {
        let message_size = measure_text(message, None, 18, 1.0);
        draw_text(
            message,
            center_x - message_size.width / 2.0,
            screen_height() / 2.0 + 160.0,
            18.0,
            RED,
        );
    }
}
