use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::error::{Result, ScorerError};
use crate::evaluation::{EvaluationConfig, GuessVerdict, evaluate_guess};
use crate::normalizer::normalize_guess;
use crate::scoring::{ScoringConfig, ScoringContext, points_for_correct_guess};
use crate::{debug_log, info_log};

pub type PlayerId = String;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoundConfig {
    pub scoring: ScoringConfig,
    pub evaluation: EvaluationConfig,
}

/// Result of one accepted guess submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub verdict: GuessVerdict,
    /// Points awarded; zero unless the verdict is `Correct`.
    pub points: u32,
    /// 1-based position among correct guessers, for correct guesses.
    pub rank: Option<usize>,
}

/// One drawing round: a target word, a timer and the order in which
/// players found the word.
#[derive(Debug, Clone)]
pub struct Round {
    target: String,
    started_at: DateTime<Utc>,
    deadline: DateTime<Utc>,
    duration_secs: u32,
    config: RoundConfig,
    correct_guessers: Vec<PlayerId>,
    totals: HashMap<PlayerId, u32>,
}

impl Round {
    pub fn new(
        target: &str,
        duration_secs: u32,
        started_at: DateTime<Utc>,
        config: RoundConfig,
    ) -> Result<Self> {
        if duration_secs == 0 {
            return Err(ScorerError::InvalidRoundDuration);
        }
        config.scoring.validate()?;

        let target = normalize_guess(target);
        info_log!("starting {duration_secs}s round for {target:?}");
        Ok(Self {
            target,
            started_at,
            deadline: started_at + Duration::seconds(i64::from(duration_secs)),
            duration_secs,
            config,
            correct_guessers: Vec::new(),
            totals: HashMap::new(),
        })
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Seconds left at `now`, clamped to `[0, duration]`, millisecond precision.
    #[must_use]
    pub fn time_left_at(&self, now: DateTime<Utc>) -> f64 {
        let millis = (self.deadline - now).num_milliseconds();
        let max_millis = i64::from(self.duration_secs) * 1000;
        millis.clamp(0, max_millis) as f64 / 1000.0
    }

    #[must_use]
    pub fn is_over_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    pub fn submit_guess(
        &mut self,
        player: &str,
        raw_guess: &str,
        now: DateTime<Utc>,
    ) -> Result<GuessOutcome> {
        if self.is_over_at(now) {
            return Err(ScorerError::RoundOver);
        }
        if self.has_guessed(player) {
            return Err(ScorerError::AlreadyGuessed(player.to_string()));
        }

        let verdict = evaluate_guess(raw_guess, &self.target, &self.config.evaluation);
        if !verdict.is_correct() {
            debug_log!("{player} guessed {raw_guess:?}: {verdict:?}");
            return Ok(GuessOutcome {
                verdict,
                points: 0,
                rank: None,
            });
        }

        let context = ScoringContext {
            guesses_so_far: u32::try_from(self.correct_guessers.len()).unwrap_or(u32::MAX),
            time_left: self.time_left_at(now),
            config: self.config.scoring,
        };
        let points = points_for_correct_guess(&context);

        self.correct_guessers.push(player.to_string());
        let total = self.totals.entry(player.to_string()).or_insert(0);
        *total = total.saturating_add(points);

        let rank = self.correct_guessers.len();
        info_log!("{player} found the word (rank {rank}) for {points} points");
        Ok(GuessOutcome {
            verdict,
            points,
            rank: Some(rank),
        })
    }

    #[must_use]
    pub fn has_guessed(&self, player: &str) -> bool {
        self.correct_guessers.iter().any(|p| p == player)
    }

    /// Players who found the word, in the order they found it.
    #[must_use]
    pub fn correct_guessers(&self) -> &[PlayerId] {
        &self.correct_guessers
    }

    #[must_use]
    pub fn total_for(&self, player: &str) -> u32 {
        self.totals.get(player).copied().unwrap_or(0)
    }

    /// Points earned this round, highest first, ties broken by name.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u32)> {
        rank_players(&self.totals)
    }
}

/// Sorts point totals highest first, ties broken by player name.
#[must_use]
pub fn rank_players(totals: &HashMap<PlayerId, u32>) -> Vec<(PlayerId, u32)> {
    let mut standings: Vec<(PlayerId, u32)> = totals
        .iter()
        .map(|(player, points)| (player.clone(), *points))
        .collect();
    standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    standings
}
