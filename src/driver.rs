//! Presentation driver: units in, rendered text out.
//!
//! Splits batch input into units, renders each through
//! [`display`](crate::display::display), and writes results or reports to a
//! writer. Also hosts the interactive prompt loop and terminal-width probing
//! via crossterm. A failing unit is reported in place and never stops the
//! batch.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::LazyLock;

use crossterm::terminal;
use regex::Regex;
use tracing::{info, warn};

use crate::config::RenderConfig;
use crate::display::display;

/// Width used when the terminal size cannot be read.
pub const FALLBACK_WIDTH: usize = 60;

/// Prompt banner of the interactive session.
pub const INTERACTIVE_BANNER: &str =
    "Enter input string (Press enter with no input to exit; for other input methods see --help):";

/// Errors that end a driver run. Per-unit failures are reported, not raised.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// Where batch output goes; decides unit spacing and wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Interactive terminal: each unit is preceded by a blank line and units
    /// are separated by two more.
    Terminal,
    /// Output file: each unit is followed by two blank lines.
    File,
}

impl Sink {
    /// Wrapping width for this sink. Files are never wrapped.
    pub fn wrap_width(self, no_wrap: bool) -> Option<usize> {
        match self {
            Sink::Terminal if !no_wrap => Some(terminal_width()),
            _ => None,
        }
    }
}

/// Counts of units rendered and reported as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub rendered: usize,
    pub failed: usize,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current terminal width in columns, or [`FALLBACK_WIDTH`].
pub fn terminal_width() -> usize {
    match terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        Ok(_) => FALLBACK_WIDTH,
        Err(err) => {
            warn!(error = %err, fallback = FALLBACK_WIDTH, "could not read terminal size");
            FALLBACK_WIDTH
        }
    }
}

static UNIT_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\r?\n){2,}").expect("BUG: invalid UNIT_SEPARATOR_RE regex literal")
});

/// Split batch input on runs of two or more newlines, skipping blank units.
pub fn split_units(data: &str) -> Vec<&str> {
    UNIT_SEPARATOR_RE
        .split(data)
        .filter(|unit| !unit.trim().is_empty())
        .collect()
}

/// Open an output file, truncating it unless `append` is set.
pub fn open_output(path: &Path, append: bool) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
}

/// Render one unit, or its report on failure.
fn render_unit(unit: &str, config: &RenderConfig, summary: &mut BatchSummary) -> String {
    match display(unit, config) {
        Ok(output) => {
            summary.rendered += 1;
            output
        }
        Err(err) => {
            summary.failed += 1;
            warn!(error = %err, unit = unit.trim(), "unit failed");
            err.report(unit, config.detail)
        }
    }
}

// ---------------------------------------------------------------------------
// Batch and interactive runs
// ---------------------------------------------------------------------------

/// Render every unit of `data` to `out`.
pub fn render_batch<W: Write>(
    out: &mut W,
    data: &str,
    config: &RenderConfig,
    sink: Sink,
) -> Result<BatchSummary, DriverError> {
    let mut summary = BatchSummary::default();

    for (i, unit) in split_units(data).into_iter().enumerate() {
        let body = render_unit(unit, config, &mut summary);
        match sink {
            Sink::Terminal => {
                if i > 0 {
                    write!(out, "\n\n\n")?;
                }
                write!(out, "\n{body}\n")?;
            }
            Sink::File => write!(out, "{body}\n\n\n\n")?,
        }
    }

    out.flush()?;
    info!(rendered = summary.rendered, failed = summary.failed, "batch finished");
    Ok(summary)
}

/// Render `input` as exactly one unit, blank or not.
pub fn render_single<W: Write>(
    out: &mut W,
    input: &str,
    config: &RenderConfig,
) -> Result<BatchSummary, DriverError> {
    let mut summary = BatchSummary::default();
    let body = render_unit(input, config, &mut summary);
    write!(out, "\n{body}\n")?;
    out.flush()?;
    Ok(summary)
}

/// Prompt for units on `input` until an empty line or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &RenderConfig,
) -> Result<BatchSummary, DriverError> {
    let mut summary = BatchSummary::default();
    let mut lines = input.lines();

    writeln!(out, "{INTERACTIVE_BANNER}")?;
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        let body = render_unit(&line, config, &mut summary);
        write!(out, "\n{body}\n")?;
    }

    out.flush()?;
    Ok(summary)
}

// ===========================================================================
// Tests
// ===========================================================================
