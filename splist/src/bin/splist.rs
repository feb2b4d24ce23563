//! Command-line calculator over sparse matrix files
//!
//! ```text
//! splist <MATRIX1> <MATRIX2> <OPERATION>
//! ```

use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{info, LevelFilter};
use splist::{MatrixFile, Operation, SparseEntryList, SparseMatrix};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract or multiply two sparse matrices stored in text files")]
struct Cli {
    /// Path to the left-hand matrix file
    matrix1: PathBuf,

    /// Path to the right-hand matrix file
    matrix2: PathBuf,

    /// One of: add, subtract, multiply
    operation: String,

    /// Print the result as JSON instead of one entry per line
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("{}", Cli::command().render_usage());
            return Ok(());
        }
    };

    init_logging(cli.verbose);

    match run(&cli.matrix1, &cli.matrix2, &cli.operation) {
        Ok(result) => print_result(&result, cli.json)?,
        Err(err) => println!("{err}"),
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(matrix1: &Path, matrix2: &Path, operation: &str) -> splist::Result<SparseEntryList> {
    let lhs = MatrixFile::read(matrix1)?;
    let rhs = MatrixFile::read(matrix2)?;
    let operation: Operation = operation.parse()?;

    let start_time = std::time::Instant::now();
    let result = operation.apply(&lhs, &rhs)?;
    info!(
        "{operation} produced {} entries (density {:.6}) in {:.2?}",
        result.nnz(),
        result.density(),
        start_time.elapsed()
    );

    Ok(result)
}

fn print_result(result: &SparseEntryList, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        for entry in result {
            println!("{entry}");
        }
    }
    Ok(())
}
