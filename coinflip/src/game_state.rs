use std::fmt::{self, Display, Formatter};

use crate::{Flips, RollingWindow};

/// Both players' rolling windows part way through a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub p1_window: RollingWindow,
    pub p2_window: RollingWindow,
    pub tick: usize,
}

impl GameState {
    pub fn new(p1_len: usize, p2_len: usize) -> Self {
        Self {
            p1_window: RollingWindow::new(p1_len),
            p2_window: RollingWindow::new(p2_len),
            tick: 0,
        }
    }

    pub fn flip(&self, flips: &Flips) -> Self {
        let mut p1_window = self.p1_window.clone();
        let mut p2_window = self.p2_window.clone();

        p1_window.push(flips.p1);
        p2_window.push(flips.p2);

        Self {
            p1_window,
            p2_window,
            tick: self.tick + 1,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tick: {}", self.tick)?;
        writeln!(f, "  P1: {}", self.p1_window)?;
        write!(f, "  P2: {}", self.p2_window)
    }
}
