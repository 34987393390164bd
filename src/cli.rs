use crate::error::{Result, ScorerError};
use crate::evaluation::{DEFAULT_CLOSE_THRESHOLD, EvaluationConfig, GuessVerdict};
use crate::game_state::{
    DEFAULT_ROUND_SECONDS, GameInterface, GameSummary, RoundInfo, UserAction, game_loop,
};
use crate::round::{GuessOutcome, PlayerId, RoundConfig};
use crate::scoring::{
    DEFAULT_BASE_POINTS, DEFAULT_FIRST_BONUS_MULTIPLIER, ScoringConfig, ScoringContext,
    points_for_correct_guess,
};
use crate::wordbank::{EMBEDDED_WORDBANK, load_wordbank_from_file, load_wordbank_from_str};
use crate::{distance::word_distance, normalizer::normalize_guess};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::io::BufRead;

/// Guess normalization, edit distance and scoring for drawing-guessing rounds
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// 0 = quiet, 1 = default, higher is chattier.
    #[must_use]
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the normalized form of a guess
    Normalize { text: String },

    /// Print the edit distance between two guesses
    Distance {
        a: String,
        b: String,
        /// Compare the strings as given, without normalizing
        #[arg(long)]
        raw: bool,
    },

    /// Print the points for a correct guess
    Score(ScoreArgs),

    /// Play rounds on stdin: `player: guess`, `next` or `exit`
    Play(PlayArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ScoringArgs {
    #[arg(long, default_value_t = DEFAULT_BASE_POINTS)]
    pub base_points: u32,

    #[arg(long, default_value_t = DEFAULT_FIRST_BONUS_MULTIPLIER)]
    pub multiplier: f64,
}

impl ScoringArgs {
    pub fn to_config(&self) -> Result<ScoringConfig> {
        ScoringConfig::new(self.base_points, self.multiplier)
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// Players who already guessed correctly this round
    #[arg(long, default_value_t = 0)]
    pub guesses_so_far: u32,

    /// Seconds left on the round timer
    #[arg(long, allow_negative_numbers = true)]
    pub time_left: f64,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PlayArgs {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    #[arg(long, default_value_t = DEFAULT_ROUND_SECONDS)]
    pub round_seconds: u32,

    /// Largest edit distance reported as a close guess
    #[arg(long, default_value_t = DEFAULT_CLOSE_THRESHOLD)]
    pub close_threshold: usize,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

impl PlayArgs {
    pub fn round_config(&self) -> Result<RoundConfig> {
        Ok(RoundConfig {
            scoring: self.scoring.to_config()?,
            evaluation: EvaluationConfig {
                close_threshold: self.close_threshold,
            },
        })
    }

    pub fn load_wordbank(&self) -> Result<Vec<String>> {
        match &self.wordbank_path {
            Some(path) => load_wordbank_from_file(path),
            None => Ok(load_wordbank_from_str(EMBEDDED_WORDBANK)),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs a one-shot subcommand, or the interactive loop on stdin for `play`.
pub fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Normalize { text } => println!("{}", normalize_guess(text)),
        Command::Distance { a, b, raw } => {
            let distance = if *raw {
                word_distance(a, b)
            } else {
                word_distance(&normalize_guess(a), &normalize_guess(b))
            };
            println!("{distance}");
        }
        Command::Score(args) => {
            let context = ScoringContext::new(args.guesses_so_far, args.time_left)
                .with_config(args.scoring.to_config()?);
            println!("{}", points_for_correct_guess(&context));
        }
        Command::Play(args) => {
            let config = args.round_config()?;
            let wordbank = args.load_wordbank()?;
            log::info!("loaded {} words", wordbank.len());
            let stdin = std::io::stdin();
            let mut interface = CliInterface::new(stdin.lock());
            game_loop(&wordbank, &mut interface, &config, args.round_seconds)?;
        }
    }
    Ok(())
}

// UI Input/Output functions

/// Parses one line of play input. `None` for lines that are neither a
/// command nor `player: guess`.
#[must_use]
pub fn parse_action(line: &str) -> Option<UserAction> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "exit" | "quit" => return Some(UserAction::Exit),
        "next" => return Some(UserAction::NextRound),
        _ => {}
    }

    let (player, guess) = line.split_once(':')?;
    let player = player.trim();
    if player.is_empty() {
        return None;
    }
    Some(UserAction::Guess {
        player: player.to_string(),
        guess: guess.trim().to_string(),
    })
}

fn format_standings(standings: &[(PlayerId, u32)]) -> String {
    standings
        .iter()
        .enumerate()
        .map(|(i, (player, points))| format!("{}. {player} - {points}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// CLI implementation of the GameInterface trait, reading from any BufRead.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // end of input ends the session
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => {
                let action = parse_action(&input);
                if action.is_none() {
                    println!("Enter 'player: guess', 'next' or 'exit'.");
                }
                action
            }
            Err(e) => {
                log::warn!("failed to read input: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }

    fn display_round_start(&mut self, info: &RoundInfo) {
        println!(
            "\nRound {} ({}s): {}",
            info.number, info.seconds, info.hint
        );
    }

    fn display_outcome(&mut self, player: &str, outcome: &GuessOutcome) {
        match (outcome.verdict, outcome.rank) {
            (GuessVerdict::Correct, Some(rank)) => {
                println!("{player} guessed the word (#{rank}) +{}", outcome.points);
            }
            (GuessVerdict::Correct, None) => println!("{player} guessed the word"),
            (GuessVerdict::Close { .. }, _) => println!("{player} is close!"),
            (GuessVerdict::Incorrect, _) => {}
        }
    }

    fn display_rejected(&mut self, player: &str, error: &ScorerError) {
        println!("{player}: {error}");
    }

    fn display_round_over(&mut self, target: &str, standings: &[(PlayerId, u32)]) {
        println!("The word was: {target}");
        if !standings.is_empty() {
            println!("{}", format_standings(standings));
        }
    }

    fn display_final_standings(&mut self, summary: &GameSummary) {
        println!("\nFinal standings after {} round(s):", summary.rounds_played);
        if summary.standings.is_empty() {
            println!("Nobody scored.");
        } else {
            println!("{}", format_standings(&summary.standings));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_score() {
        let cli = Cli::try_parse_from([
            "guess-scorer",
            "score",
            "--guesses-so-far",
            "1",
            "--time-left",
            "12.5",
        ])
        .unwrap();
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.guesses_so_far, 1);
                assert_eq!(args.time_left, 12.5);
                assert_eq!(args.scoring.base_points, 100);
                assert_eq!(args.scoring.multiplier, 2.0);
            }
            other => panic!("Expected Score, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_cli_negative_time_left() {
        let cli =
            Cli::try_parse_from(["guess-scorer", "score", "--time-left", "-5"]).unwrap();
        match cli.command {
            Command::Score(args) => assert_eq!(args.time_left, -5.0),
            other => panic!("Expected Score, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_cli_play_defaults() {
        let cli = Cli::try_parse_from(["guess-scorer", "play"]).unwrap();
        match cli.command {
            Command::Play(args) => {
                assert_eq!(args.wordbank_path, None);
                assert_eq!(args.round_seconds, DEFAULT_ROUND_SECONDS);
                assert_eq!(args.close_threshold, 1);
                assert_eq!(args.round_config().unwrap(), RoundConfig::default());
            }
            other => panic!("Expected Play, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_cli_play_invalid_multiplier() {
        let cli =
            Cli::try_parse_from(["guess-scorer", "play", "--multiplier", "0"]).unwrap();
        match cli.command {
            Command::Play(args) => assert!(matches!(
                args.round_config(),
                Err(ScorerError::InvalidMultiplier(_))
            )),
            other => panic!("Expected Play, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["guess-scorer", "normalize", "x"]).unwrap();
        assert_eq!(cli.verbosity(), 1);
        let cli = Cli::try_parse_from(["guess-scorer", "-vv", "normalize", "x"]).unwrap();
        assert_eq!(cli.verbosity(), 3);
        let cli = Cli::try_parse_from(["guess-scorer", "normalize", "x", "-q"]).unwrap();
        assert_eq!(cli.verbosity(), 0);
        assert!(Cli::try_parse_from(["guess-scorer", "-q", "-v", "normalize", "x"]).is_err());
    }

    #[test]
    fn test_execute_one_shot_commands() {
        for args in [
            vec!["guess-scorer", "normalize", "Hello, World!"],
            vec!["guess-scorer", "distance", "apple", "banana"],
            vec!["guess-scorer", "distance", "--raw", "A", "a"],
            vec!["guess-scorer", "score", "--time-left", "10"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(execute_command(&cli).is_ok());
        }
    }

    #[test]
    fn test_execute_score_rejects_zero_base() {
        let cli = Cli::try_parse_from([
            "guess-scorer",
            "score",
            "--time-left",
            "10",
            "--base-points",
            "0",
        ])
        .unwrap();
        assert!(matches!(
            execute_command(&cli),
            Err(ScorerError::InvalidBasePoints)
        ));
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("exit\n"), Some(UserAction::Exit));
        assert_eq!(parse_action("  EXIT "), Some(UserAction::Exit));
        assert_eq!(parse_action("next"), Some(UserAction::NextRound));
        assert_eq!(
            parse_action("alice: Hot Dog!\n"),
            Some(UserAction::Guess {
                player: "alice".to_string(),
                guess: "Hot Dog!".to_string(),
            })
        );
        // only the first colon splits
        assert_eq!(
            parse_action("bob: 10:30"),
            Some(UserAction::Guess {
                player: "bob".to_string(),
                guess: "10:30".to_string(),
            })
        );
        assert_eq!(parse_action("no colon here"), None);
        assert_eq!(parse_action(": orphan guess"), None);
        assert_eq!(parse_action(""), None);
    }

    #[test]
    fn test_cli_interface_reads_until_eof() {
        let mut interface = CliInterface::new(Cursor::new("alice: cat\ngarbage\nnext\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Guess {
                player: "alice".to_string(),
                guess: "cat".to_string(),
            })
        );
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(UserAction::NextRound));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_format_standings() {
        let standings = vec![("bob".to_string(), 340), ("alice".to_string(), 75)];
        assert_eq!(format_standings(&standings), "1. bob - 340\n2. alice - 75");
    }
}
