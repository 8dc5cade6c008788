use std::fmt;

use kiswitch_keycap::KeycapError;
use kiswitch_switch::SwitchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The command line itself is wrong: bad flags, or a switch / keycap
    /// family name that does not exist.
    Usage = 1,
    /// A footprint could not be described: a parameter failed coercion or
    /// its allowed set, a keycap size is unknown, a flag combination is
    /// unsupported, or the manifest is unreadable.
    Input = 2,
    /// Footprints were described but not all produced: offset geometry
    /// failed, a file could not be written, or library jobs were skipped.
    Processing = 3,
}

/// A failure reported to the shell as `Error: <message>` with `code` as the
/// exit status.
#[derive(Debug)]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Usage, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Input, message)
    }

    pub fn processing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Processing, message)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<SwitchError> for CliError {
    fn from(e: SwitchError) -> Self {
        let message = e.to_string();
        match e {
            SwitchError::UnknownFamily(_) | SwitchError::Keycap(KeycapError::UnknownFamily(_)) => {
                CliError::usage(message)
            }
            SwitchError::Geometry(_) => CliError::processing(message),
            _ => CliError::input(message),
        }
    }
}

impl From<KeycapError> for CliError {
    fn from(e: KeycapError) -> Self {
        SwitchError::from(e).into()
    }
}
