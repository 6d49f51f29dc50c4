//! Placement scoring: the main word plus every cross-word a newly placed tile
//! forms. Premium squares count only under newly placed tiles; squares whose
//! tiles were already on the board were spent on the turn that covered them.

use crate::board::{cti, Board, CELLS};
use crate::direction::Direction;
use crate::ruleset::{Premium, Ruleset};
use crate::tile::Tile;

/// Score a prospective placement of `placed` tiles starting at the anchor
/// `(x, y)` in `dir`, against the board as it currently stands. The bingo
/// bonus is not included here; the generator adds it when a full rack is
/// used.
pub fn score_placement(
    board: &Board,
    ruleset: &Ruleset,
    x: usize,
    y: usize,
    dir: Direction,
    placed: &[Tile],
) -> i32 {
    // Overlay of this turn's tiles, keyed by flat cell index. Letting the
    // word scorer see board and overlay as one surface keeps the back-up and
    // walk logic identical for main word and cross-words.
    let mut overlay = [Tile::Empty; CELLS];
    let mut cross_total = 0;

    let (mut cx, mut cy) = (x, y);
    for &tile in placed {
        while !board.is_empty(cx, cy) {
            match dir.advance(cx, cy) {
                Some(next) => (cx, cy) = next,
                None => return cross_total,
            }
        }
        overlay[cti(cx, cy)] = tile;
        cross_total += score_word_at(board, ruleset, &overlay, cx, cy, dir.orthogonal());
        match dir.advance(cx, cy) {
            Some(next) => (cx, cy) = next,
            None => break,
        }
    }

    cross_total + score_word_at(board, ruleset, &overlay, x, y, dir)
}

/// Score the contiguous run through `(x, y)` in `dir`, reading tiles from the
/// board and the overlay together. Runs of length 1 score 0.
fn score_word_at(
    board: &Board,
    ruleset: &Ruleset,
    overlay: &[Tile; CELLS],
    x: usize,
    y: usize,
    dir: Direction,
) -> i32 {
    let occupied = |x: usize, y: usize| !board.is_empty(x, y) || !overlay[cti(x, y)].is_empty();

    let (mut sx, mut sy) = (x, y);
    while let Some((px, py)) = dir.retreat(sx, sy) {
        if !occupied(px, py) {
            break;
        }
        (sx, sy) = (px, py);
    }

    let mut points = 0;
    let mut word_multiplier = 1;
    let mut length = 0;
    let (mut cx, mut cy) = (sx, sy);
    loop {
        let board_tile = board.at(cx, cy);
        let overlay_tile = overlay[cti(cx, cy)];
        if !board_tile.is_empty() {
            length += 1;
            points += ruleset.tile_value(board_tile);
        } else if !overlay_tile.is_empty() {
            length += 1;
            let value = ruleset.tile_value(overlay_tile);
            points += value;
            match ruleset.premium(cx, cy) {
                Premium::DoubleWord => word_multiplier *= 2,
                Premium::TripleWord => word_multiplier *= 3,
                Premium::DoubleLetter => points += value,
                Premium::TripleLetter => points += value * 2,
                Premium::None => {}
            }
        } else {
            break;
        }
        match dir.advance(cx, cy) {
            Some(next) => (cx, cy) = next,
            None => break,
        }
    }

    if length <= 1 {
        0
    } else {
        points * word_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<Tile> {
        word.bytes().map(Tile::Letter).collect()
    }

    #[test]
    fn test_plain_word_sums_letter_values() {
        let board = Board::new();
        let rs = Ruleset::standard();
        // QAT at (1,1): (1,1) is DW in the standard layout.
        let score =
            score_placement(&board, &rs, 1, 1, Direction::Horizontal, &letters("QAT"));
        assert_eq!(score, (10 + 1 + 1) * 2);
    }

    #[test]
    fn test_letter_premiums_add_extra_copies() {
        let board = Board::new();
        let rs = Ruleset::standard();
        // ZA at (5,5)-(6,5): (5,5) is TL, so Z counts three times.
        let score = score_placement(&board, &rs, 5, 5, Direction::Horizontal, &letters("ZA"));
        assert_eq!(score, 10 * 3 + 1);
    }

    #[test]
    fn test_premiums_ignored_under_existing_tiles() {
        let mut board = Board::new();
        let rs = Ruleset::standard();
        // An old Q sits on the (5,5) TL; extending it pays face value only.
        board.set(5, 5, Tile::Letter(b'Q'));
        let score = score_placement(&board, &rs, 6, 5, Direction::Horizontal, &letters("I"));
        assert_eq!(score, 10 + 1);
    }

    #[test]
    fn test_single_letter_run_scores_zero() {
        let board = Board::new();
        let rs = Ruleset::standard();
        let score = score_placement(&board, &rs, 4, 4, Direction::Horizontal, &letters("Q"));
        // No neighbors in either direction: the main run has length 1 and
        // there are no cross runs.
        assert_eq!(score, 0);
    }

    #[test]
    fn test_cross_words_are_scored_per_new_tile() {
        // All letters worth 1, no premiums: isolates the counting logic.
        let def = crate::ruleset::RulesetDef {
            letter_points: (b'A'..=b'Z').map(|b| ((b as char).to_string(), 1)).collect(),
            ..Default::default()
        };
        let rs = Ruleset::from_def(&def).unwrap();
        let mut board = Board::new();
        // Existing vertical T E ending above (6,5). Playing AT at (5,5)-(6,5)
        // scores the main word (2 letters) plus the cross run T-E-T (3).
        board.set(6, 3, Tile::Letter(b'T'));
        board.set(6, 4, Tile::Letter(b'E'));
        let score = score_placement(&board, &rs, 5, 5, Direction::Horizontal, &letters("AT"));
        assert_eq!(score, 2 + 3);
    }

    #[test]
    fn test_blank_scores_zero_even_on_letter_premium() {
        let board = Board::new();
        let rs = Ruleset::standard();
        // Blank-as-Z on the (5,5) TL: tripled zero is still zero.
        let placed = vec![Tile::Blank(b'Z'), Tile::Letter(b'A')];
        let score = score_placement(&board, &rs, 5, 5, Direction::Horizontal, &placed);
        assert_eq!(score, 0 + 1);
    }

    #[test]
    fn test_blank_still_triggers_word_premiums() {
        let board = Board::new();
        let rs = Ruleset::standard();
        // Blank-as-Q on the (1,1) DW: the word is doubled, the Q is worth 0.
        let placed = vec![Tile::Blank(b'Q'), Tile::Letter(b'I')];
        let score = score_placement(&board, &rs, 1, 1, Direction::Horizontal, &placed);
        assert_eq!(score, (0 + 1) * 2);
    }

    #[test]
    fn test_word_multipliers_stack() {
        let board = Board::new();
        let def = crate::ruleset::RulesetDef {
            letter_points: [("A".to_string(), 1), ("B".to_string(), 1)].into(),
            double_word: vec![(2, 0), (4, 0)],
            ..Default::default()
        };
        let rs = Ruleset::from_def(&def).unwrap();
        let score =
            score_placement(&board, &rs, 2, 0, Direction::Horizontal, &letters("ABA"));
        assert_eq!(score, 3 * 2 * 2);
    }

    #[test]
    fn test_skips_existing_tiles_when_laying_out_placed() {
        let mut board = Board::new();
        let def = crate::ruleset::RulesetDef {
            letter_points: (b'A'..=b'Z').map(|b| ((b as char).to_string(), 1)).collect(),
            ..Default::default()
        };
        let rs = Ruleset::from_def(&def).unwrap();
        // S A T I R E S with the board's E at (7,7): six new tiles around it.
        board.set(7, 7, Tile::Letter(b'E'));
        let score =
            score_placement(&board, &rs, 2, 7, Direction::Horizontal, &letters("SATIRS"));
        assert_eq!(score, 7);
    }
}
