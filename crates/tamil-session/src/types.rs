use std::io;
use std::path::PathBuf;

/// Whether typed text is converted (Tamil) or left as typed (English).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Tamil,
    English,
}

impl Mode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Mode::Tamil
        } else {
            Mode::English
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Mode::Tamil
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Tamil => Mode::English,
            Mode::English => Mode::Tamil,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Tamil => "Tamil",
            Mode::English => "English",
        }
    }

    pub(crate) fn status_text(self) -> String {
        format!("Mode: {}", self.label())
    }
}

/// Snapshot returned after every session operation, for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub output: String,
    pub status: String,
    pub mode: Mode,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no Tamil text to save")]
    EmptyOutput,
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
