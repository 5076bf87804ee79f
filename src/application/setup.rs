use super::Session;
use crate::domain::GridError;
use crate::ui::TextField;
use thiserror::Error;
use tracing::warn;

/// Accepted grid dimension range for the interactive app.
/// The engine itself takes any positive size.
pub const MIN_GRID_DIM: usize = 5;
pub const MAX_GRID_DIM: usize = 30;

/// Validation failure for the setup form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("grid dimensions must be integers")]
    NotAnInteger,
    #[error("grid dimensions must be between 5 and 30")]
    OutOfRange,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// SetupForm collects grid dimensions before a run begins.
/// It owns the two text fields and the last validation error so the
/// setup screen can display it.
pub struct SetupForm {
    pub width_field: TextField,
    pub height_field: TextField,
    error: Option<String>,
}

impl SetupForm {
    pub fn new() -> Self {
        Self {
            width_field: TextField::new("Width", "10"),
            height_field: TextField::new("Height", "10"),
            error: None,
        }
    }

    /// Message of the last rejected submission, for on-screen display
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Parse and validate the entered dimensions as (width, height)
    pub fn parse_dimensions(&self) -> Result<(usize, usize), SetupError> {
        let width = parse_dimension(self.width_field.value())?;
        let height = parse_dimension(self.height_field.value())?;
        Ok((width, height))
    }

    /// Validate the form and start a session. On rejection the message is
    /// recorded for the next draw and no engine state is created.
    pub fn submit(&mut self) -> Option<Session> {
        match self.try_start() {
            Ok(session) => {
                self.error = None;
                Some(session)
            }
            Err(err) => {
                warn!(
                    %err,
                    width = self.width_field.value(),
                    height = self.height_field.value(),
                    "rejected grid dimensions"
                );
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn try_start(&self) -> Result<Session, SetupError> {
        let (width, height) = self.parse_dimensions()?;
        Ok(Session::start(width, height)?)
    }
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::new()
    }
}

// Parsed as a signed integer first so "-3" is an out-of-range value,
// not a parse failure.
fn parse_dimension(input: &str) -> Result<usize, SetupError> {
    let value: i64 = input.trim().parse().map_err(|_| SetupError::NotAnInteger)?;
    if !(MIN_GRID_DIM as i64..=MAX_GRID_DIM as i64).contains(&value) {
        return Err(SetupError::OutOfRange);
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(width: &str, height: &str) -> SetupForm {
        SetupForm {
            width_field: TextField::new("Width", width),
            height_field: TextField::new("Height", height),
            error: None,
        }
    }

    #[test]
    fn accepts_the_defaults() {
        assert_eq!(SetupForm::new().parse_dimensions(), Ok((10, 10)));
    }

    #[test]
    fn accepts_the_range_bounds() {
        assert_eq!(form_with("5", "30").parse_dimensions(), Ok((5, 30)));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(form_with(" 12 ", "5").parse_dimensions(), Ok((12, 5)));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            form_with("abc", "10").parse_dimensions(),
            Err(SetupError::NotAnInteger)
        );
        assert_eq!(
            form_with("10", "7.5").parse_dimensions(),
            Err(SetupError::NotAnInteger)
        );
        assert_eq!(
            form_with("", "10").parse_dimensions(),
            Err(SetupError::NotAnInteger)
        );
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            form_with("4", "10").parse_dimensions(),
            Err(SetupError::OutOfRange)
        );
        assert_eq!(
            form_with("10", "31").parse_dimensions(),
            Err(SetupError::OutOfRange)
        );
        assert_eq!(
            form_with("-3", "10").parse_dimensions(),
            Err(SetupError::OutOfRange)
        );
    }

    #[test]
    fn submit_records_the_error_message() {
        let mut form = form_with("4", "10");
        assert!(form.submit().is_none());
        assert_eq!(form.error(), Some("grid dimensions must be between 5 and 30"));
    }

    #[test]
    fn submit_starts_a_session_on_valid_input() {
        let mut form = form_with("5", "30");
        let session = form.submit().expect("valid dimensions start a session");
        assert_eq!(session.grid.dimensions(), (5, 30));
        assert!(form.error().is_none());
    }
}
