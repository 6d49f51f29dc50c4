use crate::board::SIZE;
use serde::{Deserialize, Serialize};

/// Orientation of a word on the board. Horizontal runs toward increasing x,
/// Vertical toward increasing y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn orthogonal(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// The next cell along this direction, or `None` at the board edge.
    pub(crate) fn advance(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Horizontal => (x + 1 < SIZE).then(|| (x + 1, y)),
            Direction::Vertical => (y + 1 < SIZE).then(|| (x, y + 1)),
        }
    }

    /// The previous cell along this direction, or `None` at the board edge.
    pub(crate) fn retreat(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Horizontal => (x > 0).then(|| (x - 1, y)),
            Direction::Vertical => (y > 0).then(|| (x, y - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal_flips() {
        assert_eq!(Direction::Horizontal.orthogonal(), Direction::Vertical);
        assert_eq!(Direction::Vertical.orthogonal(), Direction::Horizontal);
    }

    #[test]
    fn test_advance_stops_at_edge() {
        assert_eq!(Direction::Horizontal.advance(13, 4), Some((14, 4)));
        assert_eq!(Direction::Horizontal.advance(14, 4), None);
        assert_eq!(Direction::Vertical.advance(4, 14), None);
    }

    #[test]
    fn test_retreat_stops_at_edge() {
        assert_eq!(Direction::Vertical.retreat(3, 1), Some((3, 0)));
        assert_eq!(Direction::Vertical.retreat(3, 0), None);
        assert_eq!(Direction::Horizontal.retreat(0, 3), None);
    }
}
