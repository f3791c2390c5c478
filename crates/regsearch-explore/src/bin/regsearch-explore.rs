//! CLI binary for the register-machine state-space explorer.
//!
//! # Usage
//!
//! ```bash
//! # Solve the built-in water-jug puzzle (3 and 5 unit jugs, reach 4)
//! regsearch-explore jugs --small 3 --big 5 --goal 4
//!
//! # Solve a puzzle file, stopping after one million states
//! regsearch-explore run --puzzle puzzles/water_jugs.json --max-states 1000000
//!
//! # Machine-readable report
//! regsearch-explore run --puzzle puzzles/water_jugs.json --json
//!
//! # Print the built-in puzzle as a starting point for new puzzle files
//! regsearch-explore template --small 4 --big 9 --goal 6 > jugs.json
//! ```
//!
//! Exit status is 0 when the target is reached, 2 when it is unreachable or
//! the state budget ran out, and 1 on invalid input.

use clap::{Args, Parser, Subcommand};
use regsearch_explore::explorer::{ExplorationReport, Explorer, ExplorerConfig, SearchOutcome};
use regsearch_explore::puzzle::{load_puzzle, water_jugs, Puzzle};
use regsearch_explore::report::format_report;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regsearch-explore")]
#[command(about = "Breadth-first reachability search over register machines")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the built-in two-jug puzzle.
    Jugs {
        #[command(flatten)]
        jugs: JugArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Solve a puzzle file.
    Run {
        /// Path to a JSON puzzle file.
        #[arg(short, long)]
        puzzle: PathBuf,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Print the built-in two-jug puzzle as JSON.
    Template {
        #[command(flatten)]
        jugs: JugArgs,
    },
}

#[derive(Args)]
struct JugArgs {
    /// Capacity of the small jug.
    #[arg(long, default_value = "3")]
    small: i64,

    /// Capacity of the big jug.
    #[arg(long, default_value = "5")]
    big: i64,

    /// Amount the big jug must end up holding.
    #[arg(long, default_value = "4")]
    goal: i64,
}

#[derive(Args)]
struct SearchArgs {
    /// Stop after discovering this many distinct states.
    #[arg(long)]
    max_states: Option<usize>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Jugs { jugs, search } => {
            cmd_search(water_jugs(jugs.small, jugs.big, jugs.goal), search)
        }
        Commands::Run { puzzle, search } => {
            let puzzle = match load_puzzle(&puzzle) {
                Ok(puzzle) => puzzle,
                Err(e) => {
                    eprintln!("Error: failed to load puzzle: {}", error_chain(&e));
                    std::process::exit(1);
                }
            };
            cmd_search(puzzle, search)
        }
        Commands::Template { jugs } => cmd_template(jugs),
    }
}

fn cmd_search(puzzle: Puzzle, args: SearchArgs) {
    let (search, target) = match puzzle.build() {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Error: invalid puzzle '{}': {}", puzzle.name, error_chain(&e));
            std::process::exit(1);
        }
    };

    let config = ExplorerConfig {
        max_states: args.max_states,
        ..Default::default()
    };

    if !args.json {
        eprintln!("═══════════════════════════════════════════════════════════════════════");
        eprintln!("  Register Search");
        eprintln!("═══════════════════════════════════════════════════════════════════════");
        eprintln!();
        eprintln!("Configuration:");
        eprintln!("  Puzzle:         {}", puzzle.name);
        eprintln!("  Registers:      {}", search.register_names().join(", "));
        eprintln!("  Initial:        {}", search.initial());
        eprintln!("  Actions:        {}", search.actions().len());
        eprintln!("  Target:         {}", target);
        match args.max_states {
            Some(max) => eprintln!("  Max states:     {}", max),
            None => eprintln!("  Max states:     unlimited"),
        }
        eprintln!();
    }

    let mut explorer = match Explorer::new(search, target, config) {
        Ok(explorer) => explorer,
        Err(e) => {
            eprintln!("Error: {}", error_chain(&e));
            std::process::exit(1);
        }
    };

    let outcome = match explorer.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: search failed: {}", error_chain(&e));
            std::process::exit(1);
        }
    };

    let code = exit_code(&outcome);
    let report = explorer.report(puzzle.name, outcome);
    print_report(&report, args.json);
    std::process::exit(code);
}

fn cmd_template(jugs: JugArgs) {
    match water_jugs(jugs.small, jugs.big, jugs.goal).to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", error_chain(&e));
            std::process::exit(1);
        }
    }
}

fn print_report(report: &ExplorationReport, json: bool) {
    if !json {
        println!("{}", format_report(report));
        return;
    }
    match serde_json::to_string_pretty(report) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}

fn exit_code(outcome: &SearchOutcome) -> i32 {
    match outcome {
        SearchOutcome::Found(_) => 0,
        SearchOutcome::Exhausted | SearchOutcome::Truncated => 2,
    }
}

/// Render an error followed by its `source()` chain.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}
