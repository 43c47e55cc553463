use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use crate::{Face, Sequence};

/// Fixed capacity FIFO of a player's most recent flips.
///
/// Pushing onto a full window evicts the oldest flip, so the window always holds the last
/// `capacity` flips of the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingWindow {
    flips: VecDeque<Face>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            flips: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, face: Face) {
        self.flips.push_back(face);

        while self.flips.len() > self.capacity {
            self.flips.pop_front();
        }
    }

    /// Exact, position by position comparison of the whole window against the target.
    pub fn matches(&self, target: &Sequence) -> bool {
        self.flips.len() == target.len() && self.flips.iter().eq(target.iter())
    }

    pub fn clear(&mut self) {
        self.flips.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.flips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.flips.len() == self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Face> {
        self.flips.iter()
    }
}

impl Display for RollingWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, face) in self.flips.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", face)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Face::*;

    fn sequence(faces: &[Face]) -> Sequence {
        Sequence::new(faces.to_vec()).unwrap()
    }

    #[test]
    fn test_new_window_is_empty() {
        let window = RollingWindow::new(3);

        assert!(window.is_empty());
        assert!(!window.is_full());
        assert_eq!(window.capacity(), 3);
    }

    #[test]
    fn test_push_evicts_oldest_when_full() {
        let mut window = RollingWindow::new(2);
        window.push(Heads);
        window.push(Tails);
        window.push(Tails);

        assert_eq!(window.len(), 2);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![Tails, Tails]);
    }

    #[test]
    fn test_partial_window_never_matches() {
        let mut window = RollingWindow::new(2);
        window.push(Heads);

        assert!(!window.matches(&sequence(&[Heads, Tails])));
        assert!(!window.matches(&sequence(&[Heads])));
    }

    #[test]
    fn test_matches_requires_order() {
        let mut window = RollingWindow::new(3);
        window.push(Heads);
        window.push(Tails);
        window.push(Tails);

        assert!(window.matches(&sequence(&[Heads, Tails, Tails])));
        assert!(!window.matches(&sequence(&[Tails, Heads, Tails])));
        assert!(!window.matches(&sequence(&[Tails, Tails, Heads])));
    }

    #[test]
    fn test_matches_after_sliding() {
        let mut window = RollingWindow::new(2);
        let target = sequence(&[Tails, Heads]);

        window.push(Heads);
        window.push(Tails);
        assert!(!window.matches(&target));

        window.push(Heads);
        assert!(window.matches(&target));
    }

    #[test]
    fn test_clear() {
        let mut window = RollingWindow::new(1);
        window.push(Tails);
        window.clear();

        assert!(window.is_empty());
        assert!(!window.matches(&sequence(&[Tails])));
    }

    #[test]
    fn test_display() {
        let mut window = RollingWindow::new(2);
        assert_eq!(window.to_string(), "[]");

        window.push(Heads);
        window.push(Tails);
        assert_eq!(window.to_string(), "[heads, tails]");
    }
}
