use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{Result, ScorerError};
use crate::info_log;
use crate::round::{GuessOutcome, PlayerId, Round, RoundConfig, rank_players};

pub const DEFAULT_ROUND_SECONDS: u32 = 80;

/// What a player or the host asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess { player: String, guess: String },
    NextRound,
    Exit,
}

/// What a new round shows before anyone guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInfo {
    pub number: usize,
    pub hint: String,
    pub seconds: u32,
}

/// Totals across every round of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSummary {
    pub rounds_played: usize,
    pub standings: Vec<(PlayerId, u32)>,
}

/// Input/output and clock seam between the round logic and a front end.
pub trait GameInterface {
    /// `None` means the input was unusable and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn now(&mut self) -> DateTime<Utc>;
    fn display_round_start(&mut self, info: &RoundInfo);
    fn display_outcome(&mut self, player: &str, outcome: &GuessOutcome);
    fn display_rejected(&mut self, player: &str, error: &ScorerError);
    fn display_round_over(&mut self, target: &str, standings: &[(PlayerId, u32)]);
    fn display_final_standings(&mut self, summary: &GameSummary);
}

/// Letters hidden behind underscores; spaces and other symbols stay visible.
#[must_use]
pub fn word_hint(target: &str) -> String {
    target
        .chars()
        .map(|c| if c.is_alphanumeric() { '_' } else { c })
        .collect()
}

/// Plays rounds over `wordbank` in order, wrapping around, until the
/// interface asks to exit.
pub fn game_loop<I: GameInterface>(
    wordbank: &[String],
    interface: &mut I,
    config: &RoundConfig,
    round_secs: u32,
) -> Result<GameSummary> {
    if wordbank.is_empty() {
        return Err(ScorerError::EmptyWordbank);
    }

    let mut totals: HashMap<PlayerId, u32> = HashMap::new();
    let mut rounds_played = 0;

    'game: loop {
        let target = &wordbank[rounds_played % wordbank.len()];
        let mut round = Round::new(target, round_secs, interface.now(), *config)?;
        rounds_played += 1;
        interface.display_round_start(&RoundInfo {
            number: rounds_played,
            hint: word_hint(round.target()),
            seconds: round_secs,
        });

        let exit = loop {
            let Some(action) = interface.read_action() else {
                continue;
            };
            match action {
                UserAction::Exit => break true,
                UserAction::NextRound => break false,
                UserAction::Guess { player, guess } => {
                    let now = interface.now();
                    match round.submit_guess(&player, &guess, now) {
                        Ok(outcome) => interface.display_outcome(&player, &outcome),
                        Err(ScorerError::RoundOver) => {
                            info_log!("round {rounds_played} timed out");
                            break false;
                        }
                        Err(err @ ScorerError::AlreadyGuessed(_)) => {
                            interface.display_rejected(&player, &err);
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
        };

        finish_round(&round, &mut totals, interface);
        if exit {
            break 'game;
        }
    }

    let summary = GameSummary {
        rounds_played,
        standings: rank_players(&totals),
    };
    interface.display_final_standings(&summary);
    Ok(summary)
}

fn finish_round<I: GameInterface>(
    round: &Round,
    totals: &mut HashMap<PlayerId, u32>,
    interface: &mut I,
) {
    let standings = round.standings();
    for (player, points) in &standings {
        let total = totals.entry(player.clone()).or_insert(0);
        *total = total.saturating_add(*points);
    }
    interface.display_round_over(round.target(), &standings);
}
