/// Score of a finished game from the perspective of a single player.
///
/// Players are 1-indexed. A win is worth `1.0`, a loss `0.0` and a draw is split evenly.
pub trait Value: Clone {
    fn get_value_for_player(&self, player: usize) -> f32;
}
