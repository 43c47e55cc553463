use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use crate::{CoinSource, Face};

/// The pair of flips made on a single tick, one coin per player.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Flips {
    pub p1: Face,
    pub p2: Face,
}

impl Flips {
    pub fn new(p1: Face, p2: Face) -> Self {
        Self { p1, p2 }
    }

    /// Draws player 1's flip before player 2's so seeded sources replay identically.
    pub fn draw<C: CoinSource + ?Sized>(coin: &mut C) -> Self {
        let p1 = coin.next_flip();
        let p2 = coin.next_flip();

        Self { p1, p2 }
    }
}

impl Display for Flips {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.p1, self.p2)
    }
}
