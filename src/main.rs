use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use conway_life::{
    application::{Session, SetupForm},
    input::{self, Action},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 640,
        window_height: 520,
        window_resizable: true,
        ..Default::default()
    }
}

/// Top-level screen the app is currently showing
enum Screen {
    Setup(SetupForm),
    Simulation(Session),
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut screen = Screen::Setup(SetupForm::new());

    loop {
        let mouse_pos = mouse_position();
        clear_background(BLACK);

        screen = match screen {
            Screen::Setup(mut form) => {
                let ((width_x, width_y), (height_x, height_y)) = ui::setup_field_positions();
                form.width_field.set_position(width_x, width_y);
                form.height_field.set_position(height_x, height_y);
                form.width_field.update(mouse_pos);
                form.height_field.update(mouse_pos);

                let start = ui::start_button();
                rendering::draw_setup(&form, &start, mouse_pos);

                if start.is_clicked(mouse_pos) {
                    match form.submit() {
                        Some(session) => Screen::Simulation(session),
                        None => Screen::Setup(form),
                    }
                } else {
                    Screen::Setup(form)
                }
            }
            Screen::Simulation(mut session) => {
                let buttons = ui::toolbar_buttons(session.paused);
                let action =
                    input::toolbar_action(&buttons, mouse_pos).or_else(input::keyboard_action);

                if action == Some(Action::Stop) {
                    info!(generation = session.generation, "simulation stopped");
                    Screen::Setup(SetupForm::new())
                } else {
                    if action == Some(Action::TogglePause) {
                        session = session.toggle_paused();
                    }
                    input::handle_cell_toggle(&mut session, mouse_pos);
                    session = session.tick(get_frame_time());

                    rendering::draw_grid(&session.grid);
                    let buttons = ui::toolbar_buttons(session.paused);
                    rendering::draw_toolbar(&session, &buttons, mouse_pos);
                    Screen::Simulation(session)
                }
            }
        };

        next_frame().await;
    }
}
