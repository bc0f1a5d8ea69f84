use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use wordsearch::errors::{ErrorClass, LoadError};
use wordsearch::loader::Puzzle;
use wordsearch::report::Report;
use wordsearch::search;

/// Find every word of a list in a letter grid, in all eight directions
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Puzzle file to read; `-` or no argument reads standard input
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Log timings and counts to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point of the wordsearch CLI.
///
/// Delegates to [`try_main`]. Every failure comes back through this one path,
/// which prints it to stderr and picks the exit status: 2 for malformed or
/// oversized input, 1 for everything else.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
            // nothing sensible to do if stderr itself is gone
            let _ = e.print();
            return code;
        }
    };

    let debug_enabled = std::env::var(wordsearch::log::DEBUG_ENV_VAR).is_ok();
    wordsearch::log::init_logger(wordsearch::log::default_level(cli.verbose, debug_enabled));

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let class = if let Some(load_err) = e.downcast_ref::<LoadError>() {
                eprintln!("Error: {}", load_err.display_detailed());
                load_err.class()
            } else {
                eprintln!("Error: {e}");
                ErrorClass::Failure
            };
            ExitCode::from(class.exit_code())
        }
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Load the puzzle from the file or stdin (the input is closed once loaded).
/// 2. Search it, writing each match to stdout as it is found.
/// 3. Write the per-word counts.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load
    let t_load = Instant::now();
    let puzzle = if cli.input.as_os_str() == "-" {
        Puzzle::load_from_reader(io::stdin().lock(), "standard input")?
    } else {
        Puzzle::load_from_path(&cli.input)?
    };
    log::info!(
        "Loaded {}x{} grid and {} words in {:.3}s",
        puzzle.grid.width(),
        puzzle.grid.height(),
        puzzle.words.len(),
        t_load.elapsed().as_secs_f64()
    );

    // 2. Search, reporting as we go
    let mut report = Report::new(BufWriter::new(io::stdout().lock()));
    report.begin()?;
    let tally = search::search(&puzzle, |m| report.record(m))?;

    // 3. Stats
    report.finish(&tally)?;

    Ok(())
}
