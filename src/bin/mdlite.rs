//! Command-line interface for mdlite
//! Reads markup from a file (or standard input) and prints it in the requested format.
//!
//! Usage:
//!   mdlite [`<path>`] [--format `<format>`] [--config `<file>`]   - Render a document
//!   mdlite --list-formats                                        - List available formats

use clap::{Arg, ArgAction, Command};
use mdlite::mdlite::config::{Loader, MdliteConfig};
use mdlite::mdlite::processor::Processor;
use std::io::Read;

fn main() {
    let matches = Command::new("mdlite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render emphasis/bold markup to the terminal")
        .arg(
            Arg::new("path")
                .help("Path to the markup file (reads standard input when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'console', 'treeviz', 'json', 'yaml')"),
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
        .get_matches();

    let config = load_config(matches.get_one::<String>("config"));
    let processor = Processor::new(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&processor);
        return;
    }

    let source = read_source(matches.get_one::<String>("path"));
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());

    match processor.process(&source, &format) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&String>) -> MdliteConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

fn read_source(path: Option<&String>) -> String {
    let result = match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
        }
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    })
}

/// Handle the list-formats command
fn handle_list_formats_command(processor: &Processor) {
    println!("Available formats:\n");
    let registry = processor.registry();
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}
