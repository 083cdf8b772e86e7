//! Plain-text diagnostics for a terminal, colored when asked to.
//!
//! ```text
//! error[E1001]: duplicate variant `on` in `Flags`
//!   --> 8..10: declared again here
//!       0..2: first declared here
//!   = note: ...
//! ```
//!
//! Locations are byte ranges into the scanned source file. Labels without
//! a location print the message alone.

use std::io::{self, Write};

use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI styles used by the emitter.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Style {
    Error,
    Warning,
    Note,
    Help,
    Code,
    Secondary,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Note => "\x1b[1;36m",
            Style::Help => "\x1b[1;32m",
            Style::Code => "\x1b[1m",
            Style::Secondary => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
            Severity::Note => Style::Note,
            Severity::Help => Style::Help,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// When to color output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics as text. Write errors are ignored: there is nowhere
/// left to report them.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn paint(&mut self, text: &str, style: Style) {
        let _ = if self.colors {
            write!(self.writer, "{}{text}{RESET}", style.ansi())
        } else {
            write!(self.writer, "{text}")
        };
    }

    fn label(&mut self, label: &Label) {
        let (marker, style) = if label.is_primary {
            ("-->", Style::Error)
        } else {
            ("   ", Style::Secondary)
        };
        let _ = write!(self.writer, "  {marker} ");
        if !label.span.is_dummy() {
            let _ = write!(self.writer, "{}: ", label.span);
        }
        self.paint(&label.message, style);
        let _ = writeln!(self.writer);
    }

    fn trailer(&mut self, tag: &str, style: Style, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.paint(tag, style);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.paint(
            &diagnostic.severity.to_string(),
            Style::for_severity(diagnostic.severity),
        );
        self.paint(&format!("[{}]", diagnostic.code), Style::Code);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.label(label);
        }
        for note in &diagnostic.notes {
            self.trailer("note", Style::Code, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.trailer("help", Style::Help, suggestion);
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// `error: generation failed (2 errors, 1 warning)` or
    /// `warning: 3 warnings`. Prints nothing for a clean run.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let count = |n: usize, what: &str| {
            if n == 1 {
                format!("1 {what}")
            } else {
                format!("{n} {what}s")
            }
        };
        if error_count > 0 {
            self.paint("error", Style::Error);
            let mut detail = count(error_count, "error");
            if warning_count > 0 {
                detail = format!("{detail}, {}", count(warning_count, "warning"));
            }
            let _ = writeln!(self.writer, ": generation failed ({detail})");
        } else if warning_count > 0 {
            self.paint("warning", Style::Warning);
            let _ = writeln!(self.writer, ": {}", count(warning_count, "warning"));
        }
    }
}
