use engine::GameEngine;

use super::{Flips, GameConfig, GameState, RoundOutcome, Sequence};

/// Rules of a single round: both players race their own coin towards their own target.
#[derive(Clone, Debug)]
pub struct Engine {
    p1_target: Sequence,
    p2_target: Sequence,
}

impl Engine {
    pub fn new(p1_target: Sequence, p2_target: Sequence) -> Self {
        Self {
            p1_target,
            p2_target,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.p1_sequence().clone(), config.p2_sequence().clone())
    }
}

impl GameEngine for Engine {
    type Action = Flips;
    type State = GameState;
    type Value = RoundOutcome;

    fn initial_state(&self) -> Self::State {
        GameState::new(self.p1_target.len(), self.p2_target.len())
    }

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        game_state.flip(action)
    }

    fn get_move_number(&self, game_state: &Self::State) -> usize {
        game_state.tick
    }

    fn is_terminal_state(&self, game_state: &Self::State) -> Option<Self::Value> {
        RoundOutcome::from_matches(
            game_state.p1_window.matches(&self.p1_target),
            game_state.p2_window.matches(&self.p2_target),
        )
    }
}
