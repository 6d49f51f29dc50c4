//! Inverse search: given a completed word, every board position and
//! orientation where it could legally have been played.
//!
//! The word itself is taken as legal (it was already played); only the
//! cross-words its new tiles would form are checked against the lexicon.

use crate::board::{Board, CENTER, SIZE};
use crate::direction::Direction;
use crate::lexicon::{normalize_word, Lexicon};
use crate::placement::Placement;
use crate::play_space::CrossContext;
use crate::ruleset::Ruleset;
use crate::score::score_placement;
use crate::tile::Tile;
use std::collections::HashSet;

/// Enumerate every legal placement of `word`, deduplicated and sorted by
/// score descending. Words that do not survive the dictionary filter (too
/// short, non-alphabetic) produce an empty list.
pub fn find_placements(
    board: &Board,
    ruleset: &Ruleset,
    lexicon: &Lexicon,
    word: &str,
) -> Vec<Placement> {
    let Some(letters) = normalize_word(word) else {
        return Vec::new();
    };
    let len = letters.len();

    let mut seen = HashSet::new();
    let mut placements = Vec::new();
    for dir in [Direction::Horizontal, Direction::Vertical] {
        for sx in 0..SIZE {
            for sy in 0..SIZE {
                let fits = match dir {
                    Direction::Horizontal => sx + len <= SIZE,
                    Direction::Vertical => sy + len <= SIZE,
                };
                if !fits {
                    continue;
                }
                if let Some(placement) =
                    try_placement(board, ruleset, lexicon, &letters, sx, sy, dir)
                {
                    if seen.insert(placement.key()) {
                        placements.push(placement);
                    }
                }
            }
        }
    }

    log::debug!("found {} placements for {:?}", placements.len(), word);
    placements.sort_by(|a, b| b.score.cmp(&a.score));
    placements
}

fn cell_at(sx: usize, sy: usize, dir: Direction, i: usize) -> (usize, usize) {
    match dir {
        Direction::Horizontal => (sx + i, sy),
        Direction::Vertical => (sx, sy + i),
    }
}

fn try_placement(
    board: &Board,
    ruleset: &Ruleset,
    lexicon: &Lexicon,
    letters: &[u8],
    sx: usize,
    sy: usize,
    dir: Direction,
) -> Option<Placement> {
    let len = letters.len();

    // Boundary rule: the word must not extend an existing run on either end.
    if let Some((px, py)) = dir.retreat(sx, sy) {
        if !board.is_empty(px, py) {
            return None;
        }
    }
    let (ex, ey) = cell_at(sx, sy, dir, len - 1);
    if let Some((nx, ny)) = dir.advance(ex, ey) {
        if !board.is_empty(nx, ny) {
            return None;
        }
    }

    // Consistency walk: each cell either reuses the same letter or is empty
    // and receives a new tile.
    let mut new_tiles = Vec::new();
    let mut new_cells = Vec::new();
    let mut anchor = None;
    let mut touches = false;
    for (i, &letter) in letters.iter().enumerate() {
        let (x, y) = cell_at(sx, sy, dir, i);
        match board.letter_at(x, y) {
            Some(existing) => {
                if existing != letter {
                    return None;
                }
                touches = true;
            }
            None => {
                new_tiles.push(Tile::Letter(letter));
                new_cells.push((x, y));
                anchor.get_or_insert((x, y));
                if has_occupied_neighbor(board, x, y) {
                    touches = true;
                }
            }
        }
    }
    let (ax, ay) = anchor?; // a placement must put down at least one tile

    // Connectivity, or the center-cover rule on the first move.
    if board.center_is_empty() {
        if !(0..len).any(|i| cell_at(sx, sy, dir, i) == CENTER) {
            return None;
        }
    } else if !touches {
        return None;
    }

    // Every cross-word a new tile forms must be legal.
    for (&(x, y), tile) in new_cells.iter().zip(&new_tiles) {
        if let Some(ctx) = CrossContext::scan(board, x, y, dir) {
            let letter = tile.letter().unwrap_or(0);
            if !lexicon.contains_letters(ctx.word_with(letter)) {
                return None;
            }
        }
    }

    let score = score_placement(board, ruleset, ax, ay, dir, &new_tiles);
    Some(Placement { x: ax, y: ay, dir, tiles: new_tiles, score })
}

fn has_occupied_neighbor(board: &Board, x: usize, y: usize) -> bool {
    (x > 0 && !board.is_empty(x - 1, y))
        || (x + 1 < SIZE && !board.is_empty(x + 1, y))
        || (y > 0 && !board.is_empty(x, y - 1))
        || (y + 1 < SIZE && !board.is_empty(x, y + 1))
}
