use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::error;

/// One timestamped message about a single input item.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub at: DateTime<Utc>,
    /// Zero-based position in the input collection.
    pub item: usize,
    pub message: String,
    pub excerpt: Option<String>,
}

impl Diagnostic {
    pub fn for_item(index: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            at: Utc::now(),
            item: index,
            message: message.into(),
            excerpt: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: String) -> Self {
        self.excerpt = Some(excerpt);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.at.to_rfc3339_opts(SecondsFormat::Secs, true))?;
        write!(f, "item {}: {}", self.item + 1, self.message)?;
        if let Some(excerpt) = &self.excerpt {
            write!(f, "\n    content: {:?}", excerpt)?;
        }
        Ok(())
    }
}

/// Append-only destination for diagnostics.
pub trait DiagnosticsSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub entries: Vec<Diagnostic>,
}

#[cfg(test)]
impl DiagnosticsSink for MemorySink {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

/// Appends one entry per diagnostic to a log file.
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    written: usize,
}

impl FileSink {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening error log {}", path.display()))?;
        Ok(FileSink {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("flushing error log {}", self.path.display()))
    }
}

impl DiagnosticsSink for FileSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        match writeln!(self.writer, "{}", diagnostic) {
            Ok(()) => self.written += 1,
            Err(e) => error!(path = %self.path.display(), "Failed to write diagnostic: {}", e),
        }
    }
}

/// First `max` characters of `s`, with "..." when cut.
pub fn excerpt(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
