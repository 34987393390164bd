// Library interface for guess-scorer
// Integration tests and the binary reach the modules through here

pub mod cli;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod game_state;
pub mod logging;
pub mod normalizer;
pub mod round;
pub mod scoring;
pub mod wordbank;

// Re-export the scoring core for callers that only need the primitives
pub use distance::{is_within_distance, word_distance};
pub use error::ScorerError;
pub use evaluation::{EvaluationConfig, GuessVerdict, evaluate_guess};
pub use game_state::{GameInterface, GameSummary, UserAction, game_loop};
pub use normalizer::normalize_guess;
pub use round::{GuessOutcome, Round, RoundConfig};
pub use scoring::{ScoringConfig, ScoringContext, points_for_correct_guess};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
