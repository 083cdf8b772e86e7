//! The `project` command: show each catalog after projection.

use vgen_codegen::project;
use vgen_diagnostic::emitter::DiagnosticEmitter;

use super::{load_catalogs, read_file, stderr_emitter, CliOptions};

/// Print every marked catalog of `path` with its excluded variants removed.
///
/// Lexing follows each catalog's own configuration unless `--structural`
/// is given; `--exclude` replaces the exclusion set.
pub fn project_file(path: &str, options: &CliOptions) {
    let source = read_file(path);
    let (marked, mut diagnostics) = load_catalogs(&source);

    for item in &marked {
        let config = options.apply(&item.config);
        let catalog = item.decl.catalog(config.lex_mode);
        match project(&catalog, &config.exclude) {
            Ok(projected) => {
                println!("{projected}");
                if !projected.removed().is_empty() {
                    println!("  removed: {}", projected.removed().join(", "));
                }
                diagnostics.extend(vgen_codegen::shadow_warnings(&projected));
            }
            Err(diag) => diagnostics.push(diag),
        }
    }

    let mut emitter = stderr_emitter(options.color);
    emitter.emit_all(&diagnostics);
    emitter.flush();
    if vgen_diagnostic::has_errors(&diagnostics) {
        std::process::exit(1);
    }
}
