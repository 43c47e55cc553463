use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Player1Wins,
    Player2Wins,
    Tie,
}

impl RoundOutcome {
    /// Resolves a tick given whether each player's window matched their target.
    ///
    /// Returns `None` while the round is undecided. A simultaneous match is always a tie.
    pub fn from_matches(p1_matched: bool, p2_matched: bool) -> Option<Self> {
        match (p1_matched, p2_matched) {
            (true, true) => Some(RoundOutcome::Tie),
            (true, false) => Some(RoundOutcome::Player1Wins),
            (false, true) => Some(RoundOutcome::Player2Wins),
            (false, false) => None,
        }
    }
}

impl engine::Value for RoundOutcome {
    fn get_value_for_player(&self, player: usize) -> f32 {
        match (self, player) {
            (RoundOutcome::Tie, _) => 0.5,
            (RoundOutcome::Player1Wins, 1) | (RoundOutcome::Player2Wins, 2) => 1.0,
            _ => 0.0,
        }
    }
}

impl Display for RoundOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::Player1Wins => write!(f, "Player 1 Wins"),
            RoundOutcome::Player2Wins => write!(f, "Player 2 Wins"),
            RoundOutcome::Tie => write!(f, "Tie"),
        }
    }
}
