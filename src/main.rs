//! Wordle Hints - CLI
//!
//! Interactive and one-shot front ends for the hint engine.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::debug;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wordle_hints::{
    commands::{parse_history, run_interactive, run_openers, simulate_words},
    output::{write_feedback, write_hints, write_history, write_openers},
    solver::{Assistant, RankConfig, RankingPolicy},
    wordlists::{
        GUESSES, SOLUTIONS, Vocabulary,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Filters Wordle answers by feedback and suggests next guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-delimited list of possible answers (default: bundled list)
    #[arg(long, global = true, env = "WORDLE_HINTS_SOLUTIONS")]
    solutions: Option<PathBuf>,

    /// Newline-delimited list of allowed guesses (default: bundled list)
    #[arg(long, global = true, env = "WORDLE_HINTS_GUESSES")]
    guesses: Option<PathBuf>,

    /// Maximum number of suggestions
    #[arg(short, long, global = true, default_value_t = 8)]
    limit: usize,

    /// How much larger a suggestion's worst case may be than the best one
    #[arg(long, global = true, default_value_t = 3)]
    max_size_deviation: usize,

    /// How many fewer unused letters a suggestion may have than the best one
    #[arg(long, global = true, default_value_t = 0)]
    unused_deviation: usize,

    /// Ranking policy
    #[arg(short, long, global = true, value_enum, default_value_t = PolicyArg::Minimax)]
    policy: PolicyArg,

    /// Candidates sampled by the diversity policy
    #[arg(long, global = true, default_value_t = 100)]
    sample: usize,

    /// Number of candidates to list before "and N more"
    #[arg(long, global = true, default_value_t = 20)]
    show: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Smallest worst-case group of remaining answers
    Minimax,
    /// Most distinct feedbacks over a sample of answers
    Diversity,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter guesses and feedback one at a time (default)
    Interactive {
        /// Compute first-guess suggestions before the first prompt
        #[arg(long)]
        openers: bool,
    },

    /// Show candidates and suggestions for a history
    Hint {
        /// Records such as crane=GY--- (G correct, Y present, - absent)
        #[arg(required = true)]
        records: Vec<String>,
    },

    /// Show the feedback a guess receives against a target
    Simulate {
        guess: String,
        target: String,
    },

    /// Rank first guesses against every answer (slow)
    Openers,
}

impl Cli {
    fn rank_config(&self) -> RankConfig {
        let policy = match self.policy {
            PolicyArg::Minimax => RankingPolicy::Minimax,
            PolicyArg::Diversity => RankingPolicy::Diversity {
                sample: self.sample.max(1),
            },
        };
        RankConfig {
            limit: self.limit,
            max_solution_size_deviation: self.max_size_deviation,
            unused_deviation: self.unused_deviation,
            policy,
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Load word lists from the given paths, falling back to the bundled lists
fn load_vocabulary(solutions: Option<&Path>, guesses: Option<&Path>) -> Result<Vocabulary> {
    let vocabulary = match (solutions, guesses) {
        (None, None) => Vocabulary::embedded(),
        (Some(solutions), Some(guesses)) => Vocabulary::from_files(solutions, guesses)?,
        (solutions, guesses) => {
            let solutions = match solutions {
                Some(path) => load_from_file(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => words_from_slice(SOLUTIONS),
            };
            let guesses = match guesses {
                Some(path) => load_from_file(path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => words_from_slice(GUESSES),
            };
            Vocabulary::new(solutions, guesses)?
        }
    };

    debug!(
        "using {} solutions and {} guesses",
        vocabulary.solutions().len(),
        vocabulary.guesses().len()
    );
    Ok(vocabulary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocabulary = load_vocabulary(cli.solutions.as_deref(), cli.guesses.as_deref())?;
    let assistant = Assistant::new(&vocabulary, cli.rank_config());
    debug!("ranking with {:?}", assistant.config());
    let show = cli.show;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive { openers: false }) {
        Commands::Interactive { openers } => {
            let opening = if openers {
                run_openers(&assistant)
            } else {
                Vec::new()
            };
            run_interactive(&assistant, &opening, io::stdin().lock(), &mut out, show)?;
        }
        Commands::Hint { records } => {
            let history = parse_history(&records).context("invalid history")?;
            let hints = assistant.hints(&history);
            write_history(&mut out, &history)?;
            writeln!(out)?;
            write_hints(&mut out, &hints, show)?;
        }
        Commands::Simulate { guess, target } => {
            let (guess, _, feedback) = simulate_words(&guess, &target)?;
            write_feedback(&mut out, &guess, feedback)?;
        }
        Commands::Openers => {
            let openers = run_openers(&assistant);
            write_openers(&mut out, &openers)?;
        }
    }

    Ok(())
}
