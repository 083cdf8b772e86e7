//! vgen CLI
//!
//! Inspect and run the generation pass outside a build.

use vgen_diagnostic::emitter::ColorMode;
use vgenc::commands::{
    dispatch_variation, explain_error, fail, generate_files, project_file, show_fields,
    CliOptions,
};

fn main() {
    vgenc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" | "gen" => {
            let options = parse_options(&args[2..]);
            if options.positional.is_empty() {
                eprintln!("Usage: vgen generate <file.rs>... [--exclude=a,b] [--structural]");
                std::process::exit(1);
            }
            generate_files(&options.positional, &options);
        }
        "project" => {
            let options = parse_options(&args[2..]);
            let [path] = options.positional.as_slice() else {
                eprintln!("Usage: vgen project <file.rs> [--exclude=a,b] [--structural]");
                std::process::exit(1);
            };
            project_file(path, &options);
        }
        "dispatch" => {
            let options = parse_options(&args[2..]);
            let [path, catalog, variation, pairs @ ..] = options.positional.as_slice() else {
                eprintln!("Usage: vgen dispatch <file.rs> <Catalog> <variation> [label=value]...");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --exclude=a,b    Replace the catalog's exclusion set");
                eprintln!("  --structural     Use the nesting-aware field lexer");
                eprintln!("  --json           Print the result as JSON (null on no match)");
                std::process::exit(1);
            };
            dispatch_variation(path, catalog, variation, pairs, &options);
        }
        "fields" => {
            let options = parse_options(&args[2..]);
            let [clause] = options.positional.as_slice() else {
                eprintln!("Usage: vgen fields \"(label: Type, ...)\" [--structural]");
                std::process::exit(1);
            };
            show_fields(clause, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("vgen {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: vgen --explain <ERROR_CODE>");
                eprintln!("Example: vgen --explain E1001");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_options(args: &[String]) -> CliOptions {
    CliOptions::parse(args).unwrap_or_else(|diag| fail(&diag, ColorMode::Auto))
}

fn print_usage() {
    println!("vgen: consumable enums and variation dispatchers");
    println!();
    println!("Usage: vgen <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <file.rs>...           Print the generated code for each marked enum");
    println!("  project <file.rs>               Show each marked enum after exclusion");
    println!("  dispatch <file.rs> <Catalog> <variation> [label=value]...");
    println!("                                  Select and build a variant by name");
    println!("  fields <clause>                 Show how a field list is split");
    println!("  --explain <code>                Explain an error code (e.g., E1001)");
    println!("  help                            Show this help message");
    println!("  version                         Show version information");
    println!();
    println!("Options:");
    println!("  --exclude=a,b       Replace each catalog's exclusion set");
    println!("  --structural        Use the nesting-aware field lexer");
    println!("  --json              JSON output (dispatch only)");
    println!("  --color=<mode>      Diagnostic colors: auto, always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable tracing output (e.g. RUST_LOG=vgen_codegen=debug)");
    println!("  VGEN_LOG_TREE       Render tracing spans as a tree");
    println!();
    println!("Examples:");
    println!("  vgen generate src/experiments.rs");
    println!("  vgen dispatch src/experiments.rs FeatureXExperiment variantB headerMessage=Hi");
    println!("  vgen fields \"(counts: HashMap<String, u32>)\" --structural");
    println!("  vgen --explain E2002");
}
