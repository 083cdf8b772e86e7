//! The `generate` command: print the generated code for every marked enum.

use rayon::prelude::*;
use vgen_codegen::generate;
use vgen_diagnostic::emitter::DiagnosticEmitter;
use vgen_diagnostic::{has_errors, Diagnostic};

use super::{load_catalogs, read_file, stderr_emitter, CliOptions};

/// Generation results for one source file.
#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: String,
    /// `(catalog name, formatted source)` in file order.
    pub outputs: Vec<(String, String)>,
    /// Errors for catalogs that produced nothing, and warnings.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }
}

/// Run the pass over every marked enum of one file.
pub fn generate_source(path: &str, source: &str, options: &CliOptions) -> FileReport {
    let span = tracing::debug_span!("file", path);
    let _guard = span.enter();

    let (marked, mut diagnostics) = load_catalogs(source);
    let mut outputs = Vec::with_capacity(marked.len());
    for item in &marked {
        match generate(&item.decl, &options.apply(&item.config)) {
            Ok(generated) => {
                diagnostics.extend(generated.warnings);
                outputs.push((item.decl.name.clone(), generated.artifact.to_source()));
            }
            Err(errors) => diagnostics.extend(errors),
        }
    }
    FileReport {
        path: path.to_string(),
        outputs,
        diagnostics,
    }
}

/// Generate for every file, in parallel, and print the results in argument
/// order. Exits with status 1 if any catalog failed.
pub fn generate_files(paths: &[String], options: &CliOptions) {
    let sources: Vec<(String, String)> = paths
        .iter()
        .map(|path| (path.clone(), read_file(path)))
        .collect();

    let reports: Vec<FileReport> = sources
        .par_iter()
        .map(|(path, source)| generate_source(path, source, options))
        .collect();

    let mut emitter = stderr_emitter(options.color);
    let mut errors = 0;
    let mut warnings = 0;
    for report in &reports {
        for (catalog, source) in &report.outputs {
            println!("// {catalog} ({})", report.path);
            println!("{source}");
        }
        for diag in &report.diagnostics {
            if diag.is_error() {
                errors += 1;
            } else {
                warnings += 1;
            }
            emitter.emit(diag);
        }
    }
    emitter.emit_summary(errors, warnings);
    emitter.flush();

    if errors > 0 {
        std::process::exit(1);
    }
}
