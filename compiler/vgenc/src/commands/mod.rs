//! Command handlers for the vgen CLI.
//!
//! Each submodule implements one command. Shared pieces (argument parsing,
//! reading files, loading marked catalogs) live here in the module root.

use vgen_codegen::{catalogs_in_file, GenConfig, MarkedDecl};
use vgen_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use vgen_diagnostic::{Diagnostic, ErrorCode};
use vgen_ir::ExclusionSet;
use vgen_lexer::LexMode;

mod dispatch;
mod explain;
mod fields;
mod generate;
mod project;

pub use dispatch::dispatch_variation;
pub use explain::explain_error;
pub use fields::show_fields;
pub use generate::{generate_files, FileReport};
pub use project::project_file;

/// Flags shared by the commands, plus the positional arguments left over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--exclude=a,b`: replaces each catalog's exclusion set.
    pub exclude: Option<ExclusionSet>,
    /// `--structural`: use the nesting-aware field lexer.
    pub structural: bool,
    /// `--json`: machine-readable output where supported.
    pub json: bool,
    pub color: ColorMode,
    pub positional: Vec<String>,
}

impl CliOptions {
    /// Parse everything after the command name.
    ///
    /// Arguments starting with `--` are flags; everything else is
    /// positional, in order. `--exclude=` with nothing after it excludes
    /// nothing.
    pub fn parse(args: &[String]) -> Result<Self, Diagnostic> {
        let mut options = CliOptions::default();
        for arg in args {
            if let Some(list) = arg.strip_prefix("--exclude=") {
                options.exclude = Some(ExclusionSet::new(
                    list.split(',').map(str::trim).filter(|n| !n.is_empty()),
                ));
            } else if arg == "--structural" {
                options.structural = true;
            } else if arg == "--json" {
                options.json = true;
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                options.color = match mode {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    _ => {
                        return Err(option_error(format!("unknown color mode '{mode}'"))
                            .with_note("expected one of: auto, always, never"))
                    }
                };
            } else if arg.starts_with("--") {
                return Err(option_error(format!("unknown option '{arg}'")));
            } else {
                options.positional.push(arg.clone());
            }
        }
        Ok(options)
    }

    /// The lexer the flags ask for, if they ask for one.
    pub fn lex_mode(&self) -> Option<LexMode> {
        self.structural.then_some(LexMode::Structural)
    }

    /// Apply the flag overrides to a catalog's own configuration.
    pub fn apply(&self, config: &GenConfig) -> GenConfig {
        let mut config = config.clone();
        if let Some(exclude) = &self.exclude {
            config.exclude = exclude.clone();
        }
        if let Some(mode) = self.lex_mode() {
            config.lex_mode = mode;
        }
        config
    }
}

/// `E0003` for a bad command-line argument; there is no declaration to point at.
pub fn option_error(message: impl Into<String>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0003).with_message(message)
}

/// A terminal emitter on stderr.
pub fn stderr_emitter(color: ColorMode) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    TerminalEmitter::stderr(color, is_tty)
}

/// Report `diagnostic` and exit with status 1.
pub fn fail(diagnostic: &Diagnostic, color: ColorMode) -> ! {
    let mut emitter = stderr_emitter(color);
    emitter.emit(diagnostic);
    emitter.flush();
    std::process::exit(1);
}

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Marked catalogs of a source file, plus the diagnostics for marked items
/// that could not be used.
///
/// A file that does not parse yields a single `E0002` and no catalogs.
pub(crate) fn load_catalogs(source: &str) -> (Vec<MarkedDecl>, Vec<Diagnostic>) {
    match catalogs_in_file(source) {
        Ok(found) => found,
        Err(diag) => (Vec::new(), vec![diag]),
    }
}

/// `E0004` for a catalog name the file does not mark.
pub(crate) fn catalog_not_found(path: &str, name: &str, known: &[MarkedDecl]) -> Diagnostic {
    let mut diag = Diagnostic::error(ErrorCode::E0004)
        .with_message(format!("no catalog named `{name}` in '{path}'"));
    if known.is_empty() {
        diag = diag.with_note("the file has no `#[consumable_experiment]` enums");
    } else {
        let names: Vec<&str> = known.iter().map(|m| m.decl.name.as_str()).collect();
        diag = diag.with_note(format!("marked catalogs: {}", names.join(", ")));
    }
    diag
}
