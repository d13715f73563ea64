//! Terminal output utilities.
//!
//! Status messages go to stderr; JSON documents go to stdout.

use std::io::Write;

use console::{Style, Term};
use serde::Serialize;

use crate::error::CliError;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            red: Style::new().red(),
        }
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

/// Write `value` as JSON followed by a newline.
///
/// Pretty-printed unless `compact` is set.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    compact: bool,
) -> Result<(), CliError> {
    if compact {
        serde_json::to_writer(&mut writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, value)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
