//! Command handlers
//!
//! [`Wizard`] wires the history store and generator together the way the
//! front end uses them: submit records first, then generates. History is
//! best-effort; a failing store is logged and never blocks generation.

use anyhow::{bail, Context, Result};
use pw_content::{Category, Generator, ProjectOutline, ProjectRequest};
use pw_history::{Clock, HistoryEntry, HistoryStore, StorageBackend, SystemClock};
use serde::Serialize;
use std::io::Write;

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Front end over a history store and a generator
#[derive(Debug)]
pub struct Wizard<B, C = SystemClock> {
    history: HistoryStore<B, C>,
    generator: Generator,
}

impl<B: StorageBackend, C: Clock> Wizard<B, C> {
    /// Create wizard
    #[inline]
    #[must_use]
    pub fn new(history: HistoryStore<B, C>, generator: Generator) -> Self {
        Self { history, generator }
    }

    /// History store
    #[inline]
    #[must_use]
    pub fn history(&self) -> &HistoryStore<B, C> {
        &self.history
    }

    /// Record the request in history, then generate and print its outline
    ///
    /// # Errors
    /// Fails only if writing to `out` fails; history failures are logged.
    pub async fn generate<W: Write>(
        &self,
        request: &ProjectRequest,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<ProjectOutline> {
        if let Err(e) = self.history.record(request.topic(), request.category()) {
            tracing::warn!(error = %e, "could not record submission in history, continuing");
        }

        let outline = self.generator.generate(request).await;

        match format {
            OutputFormat::Text => writeln!(out, "{}", outline.render_text())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &outline)?;
                writeln!(out)?;
            }
        }
        Ok(outline)
    }

    /// Print recent submissions, most recent first, numbered from 1
    ///
    /// # Errors
    /// Fails if the history cannot be read or `out` cannot be written.
    pub fn list_history<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        let entries = self.history.list().context("failed to read history")?;

        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &entries)?;
                writeln!(out)?;
            }
            OutputFormat::Text if entries.is_empty() => writeln!(out, "No recent projects yet")?,
            OutputFormat::Text => {
                writeln!(out, "Your Recent Projects")?;
                for (i, entry) in entries.iter().enumerate() {
                    writeln!(out, "{:>2}. {}", i + 1, entry.summary().replace('\n', "\n   "))?;
                }
            }
        }
        Ok(())
    }

    /// Look up entry `number` (1-based, as listed) and print a ready-to-run request
    ///
    /// # Errors
    /// Fails if `number` is 0 or past the end of the history, or on a read
    /// or write failure.
    pub fn load_history<W: Write>(&self, number: usize, out: &mut W) -> Result<HistoryEntry> {
        let Some(index) = number.checked_sub(1) else {
            bail!("history entries are numbered from 1");
        };
        let Some(entry) = self.history.get(index).context("failed to read history")? else {
            bail!("no history entry #{number}");
        };

        writeln!(out, "topic:    {}", entry.topic)?;
        writeln!(out, "category: {}", entry.category)?;
        writeln!(
            out,
            "\nprojectwizard generate --topic {} --category {}",
            shell_quote(&entry.topic),
            shell_quote(&entry.category)
        )?;
        Ok(entry)
    }

    /// Delete all history
    ///
    /// # Errors
    /// Fails if the store rejects the removal or `out` cannot be written.
    pub fn clear_history<W: Write>(&self, out: &mut W) -> Result<()> {
        self.history.clear().context("failed to clear history")?;
        writeln!(out, "History cleared")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct CategoryRow {
    key: &'static str,
    label: &'static str,
}

/// Print the selectable fields of study
///
/// # Errors
/// Fails if `out` cannot be written.
pub fn list_categories<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for category in Category::SELECTABLE {
                writeln!(out, "{:<12} {}", category.key(), category.label())?;
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = Category::SELECTABLE
                .iter()
                .map(|c| CategoryRow {
                    key: c.key(),
                    label: c.label(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
