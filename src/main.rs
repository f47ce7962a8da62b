use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use quipsolve::errors::PuzzleError;
use quipsolve::hint::Hint;
use quipsolve::solver::{Puzzle, SolveStatus};
use quipsolve::word_list::WordList;

/// Quipper's original test puzzle, used when no cyphertext is given.
/// Solves to "When I see thunderstorms I reach for an umbrella".
const DEMO_CYPHERTEXT: &str = "Fict O ncc bivteclnbklzn O lcpji ukl pt vzglcddp";
const DEMO_HINT: &str = "b=t";

/// Quipsolve cryptoquip solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The cyphertext phrase to solve (defaults to a built-in demo puzzle)
    #[arg(requires = "hint")]
    cyphertext: Option<String>,

    /// The known letter pair, as cypher=plain (e.g. "b=t")
    hint: Option<Hint>,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Maximum search time in seconds (unbounded if omitted)
    #[arg(short = 't', long)]
    time_budget: Option<u64>,
}

/// Entry point of the quipsolve CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("QUIPSOLVE_DEBUG").is_ok();
    quipsolve::log::init_logger(debug_enabled);

    log::info!("Starting Quipsolve");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the quipsolve CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Run the word-block attack on the cyphertext.
/// 4. Print each solution on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed hint, missing
/// word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Fall back to the demo puzzle when no cyphertext was given
    let (cyphertext, hint) = match (cli.cyphertext, cli.hint) {
        (Some(ct), Some(h)) => (ct, h),
        _ => {
            log::info!("No cyphertext given; solving the demo puzzle");
            (DEMO_CYPHERTEXT.to_string(), DEMO_HINT.parse::<Hint>()?)
        }
    };

    // 1. Load the word list from disk
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // Build a Vec<&str> of word references for the solver
    let words_ref: Vec<_> = word_list.words.iter().map(String::as_str).collect();

    // 2. Run the attack
    log::info!("Solving puzzle: '{cyphertext}' where {hint}");
    let t_solve = Instant::now();
    let mut puzzle = Puzzle::new(&cyphertext, hint);
    let result =
        puzzle.attempt_word_block_attack(&words_ref, cli.time_budget.map(Duration::from_secs));
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print each solution on stdout
    for solution in &result.solutions {
        println!("{solution}");
    }

    match result.status {
        SolveStatus::TimedOut { elapsed } => {
            eprintln!(
                "⚠️  Timed out after {:.1}s; some solutions may not have been found",
                elapsed.as_secs_f64()
            );
        }
        SolveStatus::SearchExhausted => {
            if result.solutions.is_empty() {
                eprintln!("✗ No solution found");
            } else {
                eprintln!("✓ Search exhausted ({} solution(s))", result.solutions.len());
            }
        }
    }

    // 4. Print diagnostics (word-list size, timings, number of results) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; solved in {:.3}s ({} solution(s)).",
        word_list.words.len(),
        load_secs,
        solve_secs,
        result.solutions.len()
    );

    Ok(())
}
