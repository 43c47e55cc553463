use coinflip::RoundOutcome;
use common::div_or_zero;
use serde::{Deserialize, Serialize};

use crate::MatchStats;

/// Running totals of resolved rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub p1_wins: u64,
    pub p2_wins: u64,
    pub ties: u64,
    pub rounds: u64,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record(mut self, outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Player1Wins => self.p1_wins += 1,
            RoundOutcome::Player2Wins => self.p2_wins += 1,
            RoundOutcome::Tie => self.ties += 1,
        }

        self.rounds += 1;
        self
    }

    /// Converts the counts into fractions of the rounds played.
    ///
    /// When no rounds were played every percentage is `0.0`.
    pub fn finalize(self, p1_name: impl Into<String>, p2_name: impl Into<String>) -> MatchStats {
        let rounds = self.rounds as f64;

        MatchStats {
            p1_name: p1_name.into(),
            p2_name: p2_name.into(),
            p1_wins: self.p1_wins,
            p2_wins: self.p2_wins,
            ties: self.ties,
            rounds: self.rounds,
            p1_win_pct: div_or_zero(self.p1_wins as f64, rounds),
            p2_win_pct: div_or_zero(self.p2_wins as f64, rounds),
            tie_pct: div_or_zero(self.ties as f64, rounds),
        }
    }
}

impl FromIterator<RoundOutcome> for MatchTally {
    fn from_iter<I: IntoIterator<Item = RoundOutcome>>(iter: I) -> Self {
        iter.into_iter().fold(MatchTally::new(), MatchTally::record)
    }
}
