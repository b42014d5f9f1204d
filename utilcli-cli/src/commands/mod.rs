//! Command handlers
//!
//! Each handler runs one client operation and prints its envelope through
//! [`Output`]. A failed envelope is printed and reported as
//! [`Outcome::Failed`]; local validation and transport errors bubble up as
//! `anyhow` errors.

pub mod lyrics;
pub mod porkbun;
pub mod shlink;

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use utilcli_provider::Envelope;

use crate::util::Clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Failed,
}

/// Where results go: human text or JSON, plus the clipboard.
pub struct Output<W> {
    out: W,
    json: bool,
    clipboard: Option<Box<dyn Clipboard>>,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, json: bool, clipboard: Option<Box<dyn Clipboard>>) -> Self {
        Self {
            out,
            json,
            clipboard,
        }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the envelope (whole, in JSON mode; only a failure's message otherwise).
    ///
    /// Returns the payload of a successful envelope.
    pub fn envelope<T: Serialize>(&mut self, envelope: Envelope<T>) -> Result<Option<T>> {
        if self.json {
            serde_json::to_writer_pretty(&mut self.out, &envelope)?;
            writeln!(self.out)?;
        } else if !envelope.is_ok() {
            writeln!(self.out, "{}", envelope.message().unwrap_or("Request failed"))?;
        }

        if envelope.is_ok() {
            Ok(envelope.into_data())
        } else {
            tracing::debug!(
                "Failed envelope (status: {:?}, type: {:?})",
                envelope.status_code(),
                envelope.error_type()
            );
            Ok(None)
        }
    }

    /// A line of human output; silent in JSON mode.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        if !self.json {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Copy to the clipboard when enabled. A clipboard failure never fails the command.
    pub fn copy(&self, text: &str) {
        let Some(clipboard) = &self.clipboard else {
            return;
        };
        match clipboard.copy(text) {
            Ok(()) => tracing::debug!("Copied to clipboard: {text}"),
            Err(e) => tracing::warn!("Could not copy to clipboard: {e}"),
        }
    }
}
