//! Diagnostic aggregation.
//!
//! Collects diagnostics across a run and renders them, one line per
//! diagnostic. The aggregate pass flag is independent of how the process
//! maps it to an exit status.

use crate::shared::models::Diagnostic;
use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// Overall success: zero diagnostics across the whole run.
    pub fn success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// `<path>:<line>: <message>` lines, in collection order.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(out, "{diagnostic}")?;
        }
        Ok(())
    }

    /// JSON array of structured diagnostics.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.diagnostics)?;
        writeln!(out)
    }
}
