use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser};
use frontend::{
    ast::printer::print_source, display_error, parser::parser::parse,
    token_tree::tree::tokenize,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tokenizes and parses a source file, then prints its syntax tree.
#[derive(Debug, Parser)]
#[command(name = "frontend", version, about)]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let contents = match read_to_string(&cli.file) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", cli.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.to_string_lossy().into_owned());

    let start = Instant::now();
    let stream = match tokenize(&file_name, &contents) {
        Ok(stream) => stream,
        Err(error) => {
            display_error(&error, &contents);
            return ExitCode::FAILURE;
        }
    };
    info!("tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let source = match parse(stream) {
        Ok(source) => source,
        Err(error) => {
            display_error(&error, &contents);
            return ExitCode::FAILURE;
        }
    };
    info!("parsed in {:?}", parse_start.elapsed());

    println!("{}", print_source(&source));
    ExitCode::SUCCESS
}

fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
