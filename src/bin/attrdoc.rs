//! Command-line interface for attrdoc
//!
//! Usage:
//!   attrdoc inspect `<path>` [--format `<format>`]   - Print the parsed tree
//!   attrdoc render `<path>` [--output `<file>`]      - Render HTML documentation
//!   attrdoc check `<path>`                           - Report parse diagnostics
//!   attrdoc list-formats                           - List the inspect formats
//!
//! Global options: `--config <file>` layers a TOML file over the built-in
//! defaults, `--verbose` enables debug logging (`RUST_LOG` also works).

use attrdoc::attrdoc::config::{AttrdocConfig, Loader};
use attrdoc::attrdoc::formats::FormatRegistry;
use attrdoc::attrdoc::parsing::{parse_with_diagnostics, Diagnostic};
use attrdoc::attrdoc::render::render_document;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fmt::Display;
use std::path::Path;

fn main() {
    let matches = Command::new("attrdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, inspect and render attrdoc documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats); defaults to inspect.format"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render HTML documentation")
                .arg(path_arg())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Write to a file instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report lines that parse in a degraded way")
                .arg(path_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available inspect formats"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));
    let format = matches
        .subcommand_matches("inspect")
        .and_then(|sub| sub.get_one::<String>("format"));
    let config = load_config(matches.get_one::<String>("config"), format);

    match matches.subcommand() {
        Some(("inspect", sub)) => {
            handle_inspect_command(required(sub, "path"), &config.inspect.format);
        }
        Some(("render", sub)) => {
            let output = sub.get_one::<String>("output").map(String::as_str);
            handle_render_command(required(sub, "path"), output, &config);
        }
        Some(("check", sub)) => {
            handle_check_command(required(sub, "path"));
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the attrdoc file")
        .required(true)
        .index(1)
}

/// Value of an argument clap already enforces as required
fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_else(|| fail(format!("missing argument '{name}'")))
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Defaults, then `--config`, then command-line flags
fn load_config(path: Option<&String>, format: Option<&String>) -> AttrdocConfig {
    let mut loader = Loader::new();
    if let Some(path) = path {
        log::debug!("loading config from {path}");
        loader = loader.with_file(path);
    }
    if let Some(format) = format {
        loader = loader
            .set_override("inspect.format", format.as_str())
            .unwrap_or_else(|e| fail(format!("invalid --format: {e}")));
    }
    loader.build().unwrap_or_else(|e| fail(format!("invalid configuration: {e}")))
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("cannot read {path}: {e}")))
}

fn report(path: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}:{}", path, diagnostic);
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, format: &str) {
    let source = read_source(path);
    let outcome = parse_with_diagnostics(&source);
    let registry = FormatRegistry::default();
    let output = registry
        .serialize(&outcome.root, format)
        .unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

/// Handle the render command
fn handle_render_command(path: &str, output: Option<&str>, config: &AttrdocConfig) {
    let source = read_source(path);
    let outcome = parse_with_diagnostics(&source);
    if config.check.strict && !outcome.diagnostics.is_empty() {
        report(path, &outcome.diagnostics);
        fail(format!(
            "{} has {} diagnostic(s); not rendering in strict mode",
            path,
            outcome.diagnostics.len()
        ));
    }

    let html = render_document(&outcome.root, &config.render).unwrap_or_else(|e| fail(e));
    match output {
        Some(file) => {
            std::fs::write(Path::new(file), html)
                .unwrap_or_else(|e| fail(format!("cannot write {file}: {e}")));
            log::debug!("wrote {file}");
        }
        None => println!("{}", html),
    }
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = read_source(path);
    let diagnostics = parse_with_diagnostics(&source).diagnostics;
    if diagnostics.is_empty() {
        println!("{}: ok", path);
        return;
    }
    report(path, &diagnostics);
    fail(format!("{} diagnostic(s) in {}", diagnostics.len(), path));
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for (name, description) in registry.list_formats() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
