use macroquad::prelude::*;

const MAX_INPUT_LEN: usize = 6;
const BOX_FILL: Color = Color::new(0.09, 0.09, 0.09, 1.0);
const TEXT_SIZE: u16 = 20;

/// Single-line text input box. Click to focus; typed characters are
/// appended and Backspace deletes. No validation happens here, entries
/// are checked when the form is submitted.
pub struct TextField {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    value: String,
    focused: bool,
}

impl TextField {
    pub fn new(label: impl Into<String>, initial: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 120.0,
            height: 32.0,
            label: label.into(),
            value: initial.into(),
            focused: false,
        }
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Current entered text
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Handle focus clicks and typed input for this frame.
    /// Only the focused field drains the character queue.
    pub fn update(&mut self, mouse_pos: (f32, f32)) {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.focused = self.is_hovered(mouse_pos);
        }
        if !self.focused {
            return;
        }

        while let Some(character) = get_char_pressed() {
            if !character.is_control() && self.value.len() < MAX_INPUT_LEN {
                self.value.push(character);
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.value.pop();
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 8.0, 16.0, GRAY);

        draw_rectangle(self.x, self.y, self.width, self.height, BOX_FILL);
        let border = if self.focused {
            WHITE
        } else if self.is_hovered(mouse_pos) {
            LIGHTGRAY
        } else {
            GRAY
        };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, border);

        draw_text(
            &self.value,
            self.x + 6.0,
            self.y + 22.0,
            f32::from(TEXT_SIZE),
            WHITE,
        );

        if self.focused {
            let text_width = measure_text(&self.value, None, TEXT_SIZE, 1.0).width;
            draw_rectangle(self.x + 8.0 + text_width, self.y + 8.0, 2.0, 16.0, WHITE);
        }
    }
}
