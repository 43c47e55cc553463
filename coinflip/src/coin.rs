use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::Rng;

use crate::Face;

/// Source of coin flips for a simulation.
pub trait CoinSource {
    fn next_flip(&mut self) -> Face;
}

impl<C: CoinSource + ?Sized> CoinSource for &mut C {
    fn next_flip(&mut self) -> Face {
        (**self).next_flip()
    }
}

/// An unbiased coin driven by any random number generator.
pub struct FairCoin<R> {
    rng: R,
}

impl<R: Rng> FairCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FairCoin<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(common::create_rng(Some(seed)))
    }

    /// Seeds from `seed` when given, otherwise from system entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self::new(common::create_rng(seed))
    }
}

impl<R: Rng> CoinSource for FairCoin<R> {
    fn next_flip(&mut self) -> Face {
        self.rng.gen()
    }
}

/// Replays a fixed stream of flips in the order they will be drawn.
///
/// Panics once the stream is exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedCoin {
    flips: VecDeque<Face>,
    drawn: usize,
}

impl ScriptedCoin {
    pub fn new(flips: impl IntoIterator<Item = Face>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Interleaves two per-player streams into tick order, player 1 first.
    pub fn from_players(p1: &[Face], p2: &[Face]) -> Self {
        assert_eq!(
            p1.len(),
            p2.len(),
            "Both players must be scripted for the same number of ticks"
        );

        Self::new(p1.iter().zip(p2).flat_map(|(p1, p2)| [*p1, *p2]))
    }

    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn remaining(&self) -> usize {
        self.flips.len()
    }
}

impl CoinSource for ScriptedCoin {
    fn next_flip(&mut self) -> Face {
        match self.flips.pop_front() {
            Some(face) => {
                self.drawn += 1;
                face
            }
            None => panic!("Scripted coin ran out after {} flips", self.drawn),
        }
    }
}
