//! Console error taxonomy
//!
//! Every failure a command can produce, from argument parsing through
//! collaborator calls. None of them is fatal: the dispatch engine reports
//! the error and returns to the prompt.

/// Errors reported by the parser, the validators, the handlers and the
/// board collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A numeric argument is outside the range accepted by the command.
    #[error("argument out of range")]
    ArgumentOutOfRange,

    /// An argument is not a numeral in the console radix.
    #[error("argument not a valid integer")]
    ArgumentFormat,

    /// The line ended before all arguments were read.
    #[error("not enough arguments")]
    MissingArguments,

    /// A numeral does not fit into a signed 32-bit value.
    #[error("numeral does not fit into 32 bits")]
    NumberOverflow,

    /// More arguments were requested than an argument vector can hold.
    #[error("too many arguments requested")]
    TooManyArguments,

    /// There is no stored configuration in flash.
    #[error("no configuration in flash")]
    ConfigNotFound,

    /// Flash programming failed while saving.
    #[error("writing to flash failed")]
    FlashWriteFailed,

    /// The configuration is not in a state that may be persisted.
    #[error("invalid configuration state")]
    ConfigInvalid,

    /// Any other flash failure.
    #[error("internal flash error")]
    Flash,

    /// A collaborator (PWM controller, etc.) failed in an unspecified way.
    #[error("collaborator error")]
    Collaborator,

    /// Calibration produced a matrix without an inverse.
    #[error("calibration matrix is singular")]
    SingularMatrix,

    /// A command file was pasted deeper than the configured limit.
    #[error("paste files nested too deeply")]
    NestingTooDeep,
}

impl Error {
    /// Operator-facing text for the errors that get a dedicated message.
    ///
    /// Everything else is only reported with the generic failure line.
    pub const fn diagnostic(self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound => Some("No configuration in flash"),
            Self::FlashWriteFailed => Some("Writing to flash failed."),
            Self::ConfigInvalid => Some("Invalid configuration state."),
            Self::Flash => Some("Internal flash error"),
            _ => None,
        }
    }
}
