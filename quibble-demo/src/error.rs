use std::fmt::Display;

/// Errors raised by the dispatch table itself, after the tokenizer has
/// already classified an argument.
#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    #[error("unrecognized option {0:?}")]
    Unrecognized(String),

    #[error("option {0:?} requires a value")]
    NeedsValue(String),

    #[error("invalid value {value:?} for option {option:?}: {message}")]
    Invalid {
        option: String,
        value: String,
        message: String,
    },
}

impl OptionError {
    pub fn needs_value(option: &str) -> Self {
        Self::NeedsValue(option.to_owned())
    }

    pub fn invalid(option: &str, value: &str, message: impl Display) -> Self {
        Self::Invalid {
            option: option.to_owned(),
            value: value.to_owned(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("expected \"auto\", \"always\", or \"never\"")]
pub struct ColorModeError;
