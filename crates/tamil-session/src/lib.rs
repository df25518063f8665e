//! Editing session around the transliteration core.
//!
//! `PhoneticSession` owns what a host editor shows: the typed input, the
//! converted output, the Tamil/English mode and a one-line status. Every
//! operation returns a [`SessionResponse`] snapshot; nothing is global.

mod types;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, debug_span};

use tamil_core::convert::convert_text;
use tamil_core::mapping::MappingTable;
use tamil_core::settings::settings;
use tamil_core::translit::ScanEvent;

pub use types::{Mode, SessionError, SessionResponse};

pub struct PhoneticSession {
    table: Arc<MappingTable>,
    mode: Mode,
    input: String,
    output: String,
    status: String,
}

impl PhoneticSession {
    /// New empty session; the starting mode comes from `[mode] start_enabled`.
    pub fn new(table: Arc<MappingTable>) -> Self {
        let mode = Mode::from_enabled(settings().mode.start_enabled);
        Self {
            table,
            mode,
            input: String::new(),
            output: String::new(),
            status: mode.status_text(),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self.status = mode.status_text();
        self.refresh();
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Replace the input and re-convert it.
    ///
    /// In Tamil mode the status becomes the conversion's event (or empty);
    /// in English mode it is left as it was.
    pub fn set_input(&mut self, text: &str) -> SessionResponse {
        let _span = debug_span!("set_input", len = text.len()).entered();
        self.input = text.to_string();
        let event = self.refresh();
        if self.mode.is_enabled() {
            self.status = event.map(|e| e.to_string()).unwrap_or_default();
        }
        self.response()
    }

    pub fn toggle_mode(&mut self) -> SessionResponse {
        let _span = debug_span!("toggle_mode", from = self.mode.label()).entered();
        self.mode = self.mode.toggled();
        self.status = self.mode.status_text();
        self.refresh();
        self.response()
    }

    /// Empty the output. The input is kept, so the next edit restores it.
    pub fn clear(&mut self) -> SessionResponse {
        self.output.clear();
        self.status = "Output cleared".to_string();
        self.response()
    }

    /// Text to hand to the clipboard, if there is any.
    pub fn copy_text(&self) -> Option<&str> {
        let text = self.output.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Write the output as UTF-8 to `path`, appending the configured default
    /// extension when `path` has none. Returns the path written.
    pub fn save_to(&mut self, path: &Path) -> Result<PathBuf, SessionError> {
        let _span = debug_span!("save_to", path = %path.display()).entered();
        let Some(text) = self.copy_text() else {
            return Err(SessionError::EmptyOutput);
        };

        let path = if path.extension().is_none() {
            path.with_extension(&settings().output.default_extension)
        } else {
            path.to_path_buf()
        };
        fs::write(&path, text).map_err(|source| SessionError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(bytes = text.len(), "saved");
        self.status = format!("File saved: {}", path.display());
        Ok(path)
    }

    fn refresh(&mut self) -> Option<ScanEvent> {
        let conversion = convert_text(&self.table, self.input.trim(), self.mode.is_enabled());
        self.output = conversion.text;
        conversion.status
    }

    fn response(&self) -> SessionResponse {
        SessionResponse {
            output: self.output.clone(),
            status: self.status.clone(),
            mode: self.mode,
        }
    }
}
