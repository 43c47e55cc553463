use std::time::Instant;

use coinflip::{CoinSource, Engine, GameConfig};
use log::{debug, info};

use super::{play_round, MatchStats, MatchTally, DEFAULT_PROGRESS_INTERVAL};

/// Plays `config.runs()` independent rounds and reduces their outcomes into final stats.
pub fn aggregate<C: CoinSource + ?Sized>(config: &GameConfig, coin: &mut C) -> MatchStats {
    aggregate_with_progress(config, coin, DEFAULT_PROGRESS_INTERVAL)
}

/// Same as [`aggregate`], logging progress every `progress_interval` rounds. An interval of `0`
/// disables progress logging.
pub fn aggregate_with_progress<C: CoinSource + ?Sized>(
    config: &GameConfig,
    coin: &mut C,
    progress_interval: u64,
) -> MatchStats {
    let engine = Engine::from_config(config);
    let starting_time = Instant::now();

    info!(
        "Starting {} rounds. {}: {}, {}: {}",
        config.runs(),
        config.p1_name(),
        config.p1_sequence(),
        config.p2_name(),
        config.p2_sequence()
    );

    let mut tally = MatchTally::new();
    let mut total_ticks: u64 = 0;

    for round in 1..=config.runs() {
        let result = play_round(&engine, coin);

        debug!(
            "Round {}: {} after {} ticks",
            round, result.outcome, result.ticks
        );

        tally = tally.record(result.outcome);
        total_ticks += result.ticks as u64;

        if progress_interval != 0 && round % progress_interval == 0 {
            info!(
                "Rounds Played: {}, Time Elapsed: {:.2}s, Tally: {:?}",
                round,
                starting_time.elapsed().as_secs_f32(),
                tally
            );
        }
    }

    let stats = tally.finalize(config.p1_name(), config.p2_name());

    info!(
        "Finished {} rounds in {:.2}s. Average Ticks: {:.2}",
        stats.rounds,
        starting_time.elapsed().as_secs_f32(),
        common::div_or_zero(total_ticks as f64, stats.rounds as f64)
    );

    stats
}
