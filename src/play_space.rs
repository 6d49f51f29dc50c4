//! Play-space extraction: for an anchor and a direction, the bounded run of
//! cells a word could occupy, plus the cross-word context of each empty cell.

use crate::board::Board;
use crate::direction::Direction;

/// The orthogonal neighbors of an empty cell, split around the hole the new
/// tile would fill. Present only when at least one neighbor exists, i.e. the
/// cross run would have length >= 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossContext {
    /// Contiguous occupied letters before the hole, in board order.
    pub prefix: Vec<u8>,
    /// Contiguous occupied letters after the hole, in board order.
    pub suffix: Vec<u8>,
}

impl CrossContext {
    /// Scan the direction orthogonal to `main_dir` around an empty cell.
    pub(crate) fn scan(
        board: &Board,
        x: usize,
        y: usize,
        main_dir: Direction,
    ) -> Option<CrossContext> {
        let ortho = main_dir.orthogonal();

        let mut prefix = Vec::new();
        let (mut cx, mut cy) = (x, y);
        while let Some((px, py)) = ortho.retreat(cx, cy) {
            match board.letter_at(px, py) {
                Some(letter) => {
                    prefix.push(letter);
                    (cx, cy) = (px, py);
                }
                None => break,
            }
        }
        prefix.reverse();

        let mut suffix = Vec::new();
        let (mut cx, mut cy) = (x, y);
        while let Some((nx, ny)) = ortho.advance(cx, cy) {
            match board.letter_at(nx, ny) {
                Some(letter) => {
                    suffix.push(letter);
                    (cx, cy) = (nx, ny);
                }
                None => break,
            }
        }

        if prefix.is_empty() && suffix.is_empty() {
            None
        } else {
            Some(CrossContext { prefix, suffix })
        }
    }

    /// The letters of the cross-word formed by dropping `letter` in the hole.
    pub(crate) fn word_with(&self, letter: u8) -> impl Iterator<Item = u8> + '_ {
        self.prefix
            .iter()
            .copied()
            .chain(std::iter::once(letter))
            .chain(self.suffix.iter().copied())
    }
}

/// The run of cells reachable from an anchor in a chosen direction.
#[derive(Debug, Clone)]
pub struct PlaySpace {
    /// Effective starting cell: the anchor backed up through any existing
    /// tiles in the reverse direction.
    pub start: (usize, usize),
    /// Cell contents from `start` to the board edge: the word-forming letter
    /// for occupied cells, `None` for empty ones.
    pub play: Vec<Option<u8>>,
    /// Cross-word context for each cell; `Some` only at empty cells with at
    /// least one orthogonal neighbor.
    pub cross: Vec<Option<CrossContext>>,
    /// Number of empty cells in `play`.
    pub room: usize,
}

/// Compute the play-space for `(x, y)` in `dir`. Never mutates the board.
pub fn extract(board: &Board, x: usize, y: usize, dir: Direction) -> PlaySpace {
    let (mut sx, mut sy) = (x, y);
    while let Some((px, py)) = dir.retreat(sx, sy) {
        if board.is_empty(px, py) {
            break;
        }
        (sx, sy) = (px, py);
    }

    let mut play = Vec::new();
    let mut cross = Vec::new();
    let mut room = 0;
    let (mut cx, mut cy) = (sx, sy);
    loop {
        let letter = board.letter_at(cx, cy);
        play.push(letter);
        if letter.is_none() {
            room += 1;
            cross.push(CrossContext::scan(board, cx, cy, dir));
        } else {
            cross.push(None);
        }
        match dir.advance(cx, cy) {
            Some(next) => (cx, cy) = next,
            None => break,
        }
    }

    PlaySpace { start: (sx, sy), play, cross, room }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    fn board_with(tiles: &[(usize, usize, u8)]) -> Board {
        let mut board = Board::new();
        for &(x, y, letter) in tiles {
            board.set(x, y, Tile::Letter(letter));
        }
        board
    }

    #[test]
    fn test_extract_on_empty_board() {
        let board = Board::new();
        let space = extract(&board, 3, 7, Direction::Horizontal);
        assert_eq!(space.start, (3, 7));
        assert_eq!(space.play.len(), 12); // columns 3..=14
        assert_eq!(space.room, 12);
        assert!(space.play.iter().all(Option::is_none));
        assert!(space.cross.iter().all(Option::is_none));
    }

    #[test]
    fn test_extract_backs_up_through_existing_tiles() {
        // T E A at (5..=7, 7); anchor just past the word.
        let board = board_with(&[(5, 7, b'T'), (6, 7, b'E'), (7, 7, b'A')]);
        let space = extract(&board, 8, 7, Direction::Horizontal);
        assert_eq!(space.start, (5, 7));
        assert_eq!(space.play[..4], [Some(b'T'), Some(b'E'), Some(b'A'), None]);
        assert_eq!(space.room, 7); // columns 8..=14
    }

    #[test]
    fn test_extract_records_cross_context() {
        // Vertical Q above and X below the empty cell (7,7).
        let board = board_with(&[(7, 6, b'Q'), (7, 8, b'X')]);
        let space = extract(&board, 5, 7, Direction::Horizontal);
        let ctx = space.cross[2].as_ref().unwrap(); // (7,7) is index 2 from (5,7)
        assert_eq!(ctx.prefix, b"Q");
        assert_eq!(ctx.suffix, b"X");
        assert_eq!(ctx.word_with(b'I').collect::<Vec<_>>(), b"QIX");
        // Neighboring empty cells have no orthogonal context.
        assert!(space.cross[1].is_none());
    }

    #[test]
    fn test_cross_context_absent_without_neighbors() {
        let board = Board::new();
        assert!(CrossContext::scan(&board, 7, 7, Direction::Horizontal).is_none());
    }

    #[test]
    fn test_cross_context_one_sided() {
        let board = board_with(&[(4, 6, b'O'), (4, 5, b'S')]);
        // Placing horizontally at (4,7): the vertical cross run is S O _ .
        let ctx = CrossContext::scan(&board, 4, 7, Direction::Horizontal).unwrap();
        assert_eq!(ctx.prefix, b"SO");
        assert!(ctx.suffix.is_empty());
        assert_eq!(ctx.word_with(b'N').collect::<Vec<_>>(), b"SON");
    }

    #[test]
    fn test_blanks_contribute_their_letter_to_cross_context() {
        let mut board = Board::new();
        board.set(7, 6, Tile::Blank(b'Q'));
        let ctx = CrossContext::scan(&board, 7, 7, Direction::Horizontal).unwrap();
        assert_eq!(ctx.prefix, b"Q");
    }
}
