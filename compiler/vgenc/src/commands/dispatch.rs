//! The `dispatch` command: run the dispatcher of one catalog.

use vgen_codegen::{project, Dispatcher};
use vgen_diagnostic::Diagnostic;
use vgen_ir::{ConstructedValue, VariableMap};

use super::{catalog_not_found, fail, load_catalogs, option_error, read_file, CliOptions};

/// Parse `label=value` arguments into a variable map.
///
/// The value is everything after the first `=`, so it may itself contain
/// `=`. Later labels overwrite earlier ones.
pub fn parse_variables(pairs: &[String]) -> Result<VariableMap, Diagnostic> {
    let mut vars = VariableMap::default();
    for pair in pairs {
        let Some((label, value)) = pair.split_once('=') else {
            return Err(option_error(format!("expected `label=value`, found '{pair}'")));
        };
        if label.is_empty() {
            return Err(option_error(format!("missing label in '{pair}'")));
        }
        vars.insert(label.to_string(), value.to_string());
    }
    Ok(vars)
}

/// Project the catalog named `catalog` in `path` and dispatch `variation`.
///
/// Returns `Ok(None)` when nothing matches; that is not an error.
pub fn dispatch_in_source(
    path: &str,
    source: &str,
    catalog: &str,
    variation: &str,
    vars: &VariableMap,
    options: &CliOptions,
) -> Result<Option<ConstructedValue>, Diagnostic> {
    let (marked, _) = load_catalogs(source);
    let Some(item) = marked.iter().find(|m| m.decl.name == catalog) else {
        return Err(catalog_not_found(path, catalog, &marked));
    };
    let config = options.apply(&item.config);
    let projected = project(&item.decl.catalog(config.lex_mode), &config.exclude)?;
    let dispatcher = Dispatcher::synthesize(&projected);
    Ok(dispatcher.dispatch(variation, vars))
}

/// `vgen dispatch <file> <catalog> <variation> [label=value...]`
pub fn dispatch_variation(
    path: &str,
    catalog: &str,
    variation: &str,
    pairs: &[String],
    options: &CliOptions,
) {
    let vars = parse_variables(pairs).unwrap_or_else(|diag| fail(&diag, options.color));
    let source = read_file(path);
    let value = dispatch_in_source(path, &source, catalog, variation, &vars, options)
        .unwrap_or_else(|diag| fail(&diag, options.color));

    if options.json {
        match serde_json::to_string_pretty(&value) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error serializing result: {e}");
                std::process::exit(1);
            }
        }
        return;
    }
    match value {
        Some(value) => println!("{value}"),
        None => println!("no match for '{variation}' in {catalog}"),
    }
}
