use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightError {
    #[error("Color '{name}' not recognized. Available: {}", .available.join(", "))]
    UnknownColorName {
        name: String,
        available: Vec<&'static str>,
    },

    #[error("Invalid command '{0}'. Please enter On or Off.")]
    InvalidSwitchCommand(String),

    #[error("Invalid {field}. Please enter a number between {min} and {max} (got {value}).")]
    OutOfRangeValue {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Invalid {field}. '{input}' is not a whole number.")]
    InvalidNumber { field: &'static str, input: String },

    #[error("Invalid choice '{0}'")]
    InvalidChoice(String),

    #[error("input closed")]
    InputClosed,

    #[error("Request failed: {0}")]
    TransportFailure(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LightError {
    /// Whether the interactive loop can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LightError::InputClosed | LightError::Io(_))
    }
}

pub(crate) fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, LightError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(LightError::OutOfRangeValue {
            field,
            value,
            min,
            max,
        })
    }
}
