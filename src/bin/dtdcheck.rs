//! Command-line interface for dtdcheck
//! Checks DTD internal subsets for grammatical errors, or lists the tokens the lexer sees.
//!
//! Usage:
//!   dtdcheck check `<path>` [--format `<format>`] [--verbose] [--no-substitution] [--config `<yaml>`]
//!   dtdcheck tokens `<path>` [--format `<format>`]
//!   dtdcheck list-formats
//!
//! `<path>` may be `-` to read standard input. Set RUST_LOG=debug to follow recovery and
//! skipped declarations on stderr.

use clap::{Arg, ArgAction, Command};
use dtdcheck::dtd::formats::OutputFormat;
use dtdcheck::dtd::{check, tokens, CheckOptions};
use std::io::Read;

fn main() {
    env_logger::init();

    let format_arg = || {
        Arg::new("format")
            .long("format")
            .short('f')
            .help("Output format ('simple' or 'json')")
            .default_value("simple")
    };
    let path_arg = || {
        Arg::new("path")
            .help("Path to the DTD file, or - for stdin")
            .required(true)
            .index(1)
    };

    let matches = Command::new("dtdcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A grammar checker for DTD internal subsets")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Check a DTD and report errors")
                .arg(path_arg())
                .arg(format_arg())
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Print every token as it is consumed")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-substitution")
                        .long("no-substitution")
                        .help("Do not expand parameter entity references")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("YAML file with check options"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("List the tokens of a DTD without parsing it")
                .arg(path_arg())
                .arg(format_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let format = parse_format(check_matches.get_one::<String>("format").unwrap());
            let mut options = match check_matches.get_one::<String>("config") {
                Some(config) => CheckOptions::load(config).unwrap_or_else(|e| fail(e)),
                None => CheckOptions::default(),
            };
            if check_matches.get_flag("verbose") {
                options.verbose = true;
            }
            if check_matches.get_flag("no-substitution") {
                options.substitute_parameter_entities = false;
            }
            handle_check_command(path, format, &options);
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = parse_format(tokens_matches.get_one::<String>("format").unwrap());
            handle_tokens_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the check command; exits with 1 if the DTD has errors
fn handle_check_command(path: &str, format: OutputFormat, options: &CheckOptions) {
    let source = read_source(path);
    let report = check(&source, options);
    let output = format.render_report(&report).unwrap_or_else(|e| fail(e));
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
    if !report.is_well_formed() {
        std::process::exit(1);
    }
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: OutputFormat) {
    let source = read_source(path);
    let listed = tokens(&source);
    let output = format.render_tokens(&listed).unwrap_or_else(|e| fail(e));
    print!("{}", output);
    if format == OutputFormat::Json {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for name in OutputFormat::NAMES {
        println!("  {}", name);
    }
}

fn parse_format(name: &str) -> OutputFormat {
    name.parse().unwrap_or_else(|e| fail(e))
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| fail(format!("reading stdin: {}", e)));
        return source;
    }
    std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("reading {}: {}", path, e)))
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}
