//! `tdlc`: a thin CLI front-end over [`tdl_engine::analyze`]/[`tdl_engine::tokenize`].
//! Not part of the engine's own scope (spec.md §1 places the editor host out
//! of scope) but the ambient tooling a shippable crate carries regardless.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use tdl_engine::diagnostic::Severity;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lex, parse, and validate TDL topology documents")]
struct Cli {
    /// Source file to analyze, or `-` to read from stdin.
    file: PathBuf,

    /// Emit diagnostics (and the AST, if requested) as JSON.
    #[arg(long)]
    json: bool,

    /// Print the token stream instead of running the full analysis.
    #[arg(long)]
    tokens: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug)]
enum CliError {
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Read { path, source } => {
                write!(f, "failed to read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {}

fn read_source(path: &PathBuf) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read { path: path.clone(), source })?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read { path: path.clone(), source })
    }
}

fn print_report(result: &tdl_engine::AnalysisResult, path: &PathBuf) {
    let display_path = path.display();
    for diagnostic in &result.diagnostics {
        println!("{display_path}:{diagnostic}");
    }
    println!(
        "{} network(s), {} diagnostic(s)",
        result.ast.networks.len(),
        result.diagnostics.len()
    );
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.verbose {
        simple_logger::SimpleLogger::new()
            .with_level(log::LevelFilter::Debug)
            .init()
            .ok();
    }

    let source = read_source(&cli.file)?;

    if cli.tokens {
        let tokens = tdl_engine::tokenize(&source);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            for token in &tokens {
                println!("{:?} {:?} {}", token.span, token.kind, token.lexeme);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let result = tdl_engine::analyze(&source);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, &cli.file);
    }

    let worst = tdl_engine::diagnostic::worst_severity(&result.diagnostics);
    if worst == Some(Severity::Error) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}: {err}", "tdlc".red().bold());
            ExitCode::FAILURE
        }
    }
}
