//! `monkey` CLI (§10.3): with no script argument it starts the REPL of
//! §6.1; given a path, it parses and evaluates the file once against a
//! fresh environment and prints the same output the REPL would have
//! printed for that text, then exits.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use monkey_object::Environment;

/// A tree-walking interpreter for the Monkey programming language.
#[derive(Parser, Debug)]
#[command(name = "monkey", version, about)]
struct Cli {
    /// Path to a `.monkey` script. Omit to start the interactive REPL.
    script: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn install_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_script(path: &PathBuf) -> Result<()> {
    let source = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let env = Environment::new();
    match monkey::eval(&source, &env) {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(errors) => {
            for message in errors {
                eprintln!("\t{message}");
            }
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    match &cli.script {
        Some(path) => run_script(path),
        None => monkey::repl::run().context("REPL I/O failure"),
    }
}
