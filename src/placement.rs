use crate::board::Board;
use crate::direction::Direction;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// One legal way to play tiles on a specific board.
///
/// `(x, y)` is the anchor: the cell of the first *newly placed* tile. `tiles`
/// holds only the newly placed tiles, in play order; cells the word reuses
/// from the board are not repeated here. A placement is produced with respect
/// to one board; interpreting it against any other board is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub dir: Direction,
    pub tiles: Vec<Tile>,
    pub score: i32,
}

impl Placement {
    /// The newly placed tiles in text form: uppercase for normal letters,
    /// lowercase where a blank supplies the letter (e.g. `CATeS`).
    pub fn letters(&self) -> String {
        self.tiles.iter().map(|t| t.to_char()).collect()
    }

    /// Reconstruct the complete main word this placement forms, including
    /// board tiles before, between and after the new ones. Uppercase.
    pub fn full_word(&self, board: &Board) -> String {
        let (mut sx, mut sy) = (self.x, self.y);
        while let Some((px, py)) = self.dir.retreat(sx, sy) {
            if board.is_empty(px, py) {
                break;
            }
            (sx, sy) = (px, py);
        }

        let mut word = String::new();
        let mut fresh = self.tiles.iter();
        let mut pending = fresh.next();
        let (mut cx, mut cy) = (sx, sy);
        loop {
            if let Some(letter) = board.letter_at(cx, cy) {
                word.push(letter as char);
            } else if let Some(tile) = pending {
                if let Some(letter) = tile.letter() {
                    word.push(letter as char);
                }
                pending = fresh.next();
            } else {
                break;
            }
            match self.dir.advance(cx, cy) {
                Some(next) => (cx, cy) = next,
                None => break,
            }
        }
        word
    }

    /// Deduplication key: anchor, direction, and the placed letters folded to
    /// uppercase. The fold intentionally collapses a blank-as-L with a normal
    /// L at the same position; both draw the same word on the board, and the
    /// generator records the non-blank (higher-scoring) variant first.
    pub(crate) fn key(&self) -> PlacementKey {
        PlacementKey {
            x: self.x,
            y: self.y,
            dir: self.dir,
            letters: self.tiles.iter().map(|t| t.letter().unwrap_or(0)).collect(),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.dir {
            Direction::Horizontal => 'H',
            Direction::Vertical => 'V',
        };
        write!(f, "{} at ({},{}) {} for {} points", self.letters(), self.x, self.y, dir, self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PlacementKey {
    x: usize,
    y: usize,
    dir: Direction,
    letters: SmallVec<[u8; 7]>,
}
