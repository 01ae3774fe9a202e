//! Command-line interface for exdata
//! This binary parses exdata literal documents and prints them as a tagged tree (or one of the
//! debugging views).
//!
//! Usage:
//!   exdata [`<path>`] [--format `<format>`] [--indent `<n>`] [--config `<file>`]
//!   exdata --list-formats
//!
//! Without a path (or with `-`) the document is read from stdin.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use exdata_config::{ConfigError, ExdataConfig, Loader};
use exdata_parser::{OutputFormat, Pipeline};
use std::io;
use std::process;

fn build_cli() -> Command {
    Command::new("exdata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse exdata literal documents into a tagged tree")
        .arg(
            Arg::new("path")
                .help("Path to the exdata file (reads stdin when absent or '-')")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: json)")
                .value_parser(PossibleValuesParser::new(
                    OutputFormat::ALL.map(OutputFormat::name),
                )),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Spaces per nesting level for indented JSON (0 renders one line)")
                .value_parser(clap::value_parser!(i64).range(0..)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    env_logger::init();
    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    let path = matches.get_one::<String>("path").map(String::as_str);
    handle_execute_command(path, &config);
}

/// Layer `--config` and the flag overrides over the embedded defaults.
fn load_config(matches: &ArgMatches) -> Result<ExdataConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(indent) = matches.get_one::<i64>("indent") {
        loader = loader.set_override("output.indent", *indent)?;
    }
    loader.build()
}

/// Handle the execute command
fn handle_execute_command(path: Option<&str>, config: &ExdataConfig) {
    let format: OutputFormat = config.output.format.parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path.unwrap_or("stdin"), e);
        process::exit(1);
    });

    let pipeline = Pipeline::new(format).with_indent(config.output.indent);
    match pipeline.execute(&source) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            log::debug!("pipeline failed: {:?}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn read_source(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => io::read_to_string(io::stdin()),
        Some(path) => std::fs::read_to_string(path),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
