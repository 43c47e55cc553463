use coinflip::{CoinSource, Engine, Flips, RoundOutcome};
use engine::GameEngine;
use log::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    pub ticks: usize,
}

/// Flips both coins until at least one player's window matches their target.
///
/// There is no cap on the number of ticks. With a fair coin every window position has a
/// non-zero chance of matching, so the round ends with probability 1.
pub fn play_round<C: CoinSource + ?Sized>(engine: &Engine, coin: &mut C) -> RoundResult {
    let mut state = engine.initial_state();

    loop {
        let flips = Flips::draw(coin);
        state = engine.take_action(&state, &flips);

        trace!("{}", state);

        if let Some(outcome) = engine.is_terminal_state(&state) {
            return RoundResult {
                outcome,
                ticks: engine.get_move_number(&state),
            };
        }
    }
}

pub fn run_round<C: CoinSource + ?Sized>(engine: &Engine, coin: &mut C) -> RoundOutcome {
    play_round(engine, coin).outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinflip::Face::{self, *};
    use coinflip::{ScriptedCoin, Sequence};

    fn engine(p1: &[Face], p2: &[Face]) -> Engine {
        Engine::new(
            Sequence::new(p1.to_vec()).unwrap(),
            Sequence::new(p2.to_vec()).unwrap(),
        )
    }

    #[test]
    fn test_single_flip_targets_can_resolve_on_first_tick() {
        let engine = engine(&[Heads], &[Heads]);
        let mut coin = ScriptedCoin::from_players(&[Heads], &[Tails]);

        let result = play_round(&engine, &mut coin);

        assert_eq!(result.outcome, RoundOutcome::Player1Wins);
        assert_eq!(result.ticks, 1);
    }

    #[test]
    fn test_round_stops_drawing_once_decided() {
        let engine = engine(&[Tails], &[Tails]);
        let mut coin = ScriptedCoin::from_players(&[Heads, Heads, Tails, Heads], &[Heads; 4]);

        let result = play_round(&engine, &mut coin);

        assert_eq!(
            result,
            RoundResult {
                outcome: RoundOutcome::Player1Wins,
                ticks: 3,
            }
        );
        assert_eq!(coin.drawn(), 6);
        assert_eq!(coin.remaining(), 2);
    }

    #[test]
    fn test_run_round_returns_outcome() {
        let engine = engine(&[Heads, Heads], &[Tails, Tails]);
        let mut coin = ScriptedCoin::from_players(&[Tails, Heads, Tails], &[Heads, Tails, Tails]);

        assert_eq!(run_round(&engine, &mut coin), RoundOutcome::Player2Wins);
    }
}
