use crate::error::{Result, ScorerError};

pub const DEFAULT_BASE_POINTS: u32 = 100;
pub const DEFAULT_FIRST_BONUS_MULTIPLIER: f64 = 2.0;
pub const POINTS_DROP_PER_CORRECT_GUESS: u32 = 25;
pub const MIN_FOLLOW_UP_POINTS: u32 = 50;

/// Tunable part of the scoring policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub base_points: u32,
    pub first_bonus_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: DEFAULT_BASE_POINTS,
            first_bonus_multiplier: DEFAULT_FIRST_BONUS_MULTIPLIER,
        }
    }
}

impl ScoringConfig {
    pub fn new(base_points: u32, first_bonus_multiplier: f64) -> Result<Self> {
        let config = Self {
            base_points,
            first_bonus_multiplier,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_points == 0 {
            return Err(ScorerError::InvalidBasePoints);
        }
        if !self.first_bonus_multiplier.is_finite() || self.first_bonus_multiplier <= 0.0 {
            return Err(ScorerError::InvalidMultiplier(self.first_bonus_multiplier));
        }
        Ok(())
    }
}

/// Round state needed to price a single correct guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringContext {
    /// Players who already guessed correctly this round.
    pub guesses_so_far: u32,
    /// Seconds left on the round timer.
    pub time_left: f64,
    pub config: ScoringConfig,
}

impl ScoringContext {
    #[must_use]
    pub fn new(guesses_so_far: u32, time_left: f64) -> Self {
        Self {
            guesses_so_far,
            time_left,
            config: ScoringConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScoringConfig) -> Self {
        self.config = config;
        self
    }

    /// `time_left` with negative, NaN and infinite values mapped to zero.
    #[must_use]
    pub fn clamped_time_left(&self) -> f64 {
        if self.time_left.is_finite() && self.time_left > 0.0 {
            self.time_left
        } else {
            0.0
        }
    }
}

/// Points awarded for a correct guess.
///
/// The first correct guesser earns `floor((base + time_left) * multiplier)`,
/// so answering early pays more. Everyone after that earns
/// `base - 25 * guesses_so_far`, never less than 50.
#[must_use]
pub fn points_for_correct_guess(context: &ScoringContext) -> u32 {
    let config = &context.config;

    if context.guesses_so_far == 0 {
        let raw = (f64::from(config.base_points) + context.clamped_time_left())
            * config.first_bonus_multiplier;
        // float to int casts saturate, NaN becomes 0
        return raw.floor() as u32;
    }

    let drop = POINTS_DROP_PER_CORRECT_GUESS.saturating_mul(context.guesses_so_far);
    config
        .base_points
        .saturating_sub(drop)
        .max(MIN_FOLLOW_UP_POINTS)
}
