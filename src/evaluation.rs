use crate::debug_log;
use crate::distance::word_distance;
use crate::normalizer::normalize_guess;

pub const DEFAULT_CLOSE_THRESHOLD: usize = 1;

/// How a guess compares to the target word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessVerdict {
    Correct,
    /// Not equal, but within the close threshold.
    Close { distance: usize },
    Incorrect,
}

impl GuessVerdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Largest edit distance still reported as close. Zero disables hints.
    pub close_threshold: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
        }
    }
}

/// Normalizes both sides and classifies the guess.
///
/// A guess that normalizes to nothing is always incorrect, even against an
/// empty target.
#[must_use]
pub fn evaluate_guess(raw_guess: &str, target: &str, config: &EvaluationConfig) -> GuessVerdict {
    let guess = normalize_guess(raw_guess);
    if guess.is_empty() {
        return GuessVerdict::Incorrect;
    }

    let target = normalize_guess(target);
    if guess == target {
        return GuessVerdict::Correct;
    }

    let distance = word_distance(&guess, &target);
    debug_log!("guess {guess:?} is {distance} edits from the target");
    if distance <= config.close_threshold {
        GuessVerdict::Close { distance }
    } else {
        GuessVerdict::Incorrect
    }
}
