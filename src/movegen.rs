//! Anchor-driven move generation.
//!
//! Every empty cell is tried as an anchor in both directions. For each
//! anchor the play-space is extracted once, the trie is pre-walked through
//! any tiles lying before the anchor (mandatory prefix letters), and a
//! depth-first search then walks the trie and the run in lockstep, spending
//! rack tiles on empty cells and following existing tiles for free. A
//! candidate is recorded at every terminal trie node where the word is
//! allowed to end.

use crate::board::{Board, CENTER, SIZE};
use crate::direction::Direction;
use crate::lexicon::{Lexicon, TrieCursor};
use crate::placement::{Placement, PlacementKey};
use crate::play_space::{self, PlaySpace};
use crate::rack::{Rack, RackTile};
use crate::ruleset::Ruleset;
use crate::score::score_placement;
use crate::tile::Tile;
use smallvec::SmallVec;
use std::collections::HashSet;

type WorkingRack = SmallVec<[RackTile; 7]>;
type Placed = SmallVec<[Tile; 7]>;

/// Enumerate every legal placement for `rack` on `board` and return the top
/// `n` by score, descending. Ties keep scan order (x-major, horizontal
/// first), so identical inputs always produce identical output.
///
/// `n` only truncates the result; the search itself always enumerates the
/// full tree.
pub fn generate_top_n(
    board: &Board,
    ruleset: &Ruleset,
    lexicon: &Lexicon,
    rack: &Rack,
    n: usize,
) -> Vec<Placement> {
    let mut search = Search {
        board,
        ruleset,
        lexicon,
        rack_len: rack.len(),
        seen: HashSet::new(),
        moves: Vec::new(),
    };

    if !rack.is_empty() {
        for x in 0..SIZE {
            for y in 0..SIZE {
                if !board.is_empty(x, y) {
                    continue;
                }
                for dir in [Direction::Horizontal, Direction::Vertical] {
                    search.run_anchor(x, y, dir, rack);
                }
            }
        }
    }

    log::debug!(
        "generated {} distinct moves for a {}-tile rack",
        search.moves.len(),
        rack.len()
    );

    let mut moves = search.moves;
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves.truncate(n);
    moves
}

struct Search<'a> {
    board: &'a Board,
    ruleset: &'a Ruleset,
    lexicon: &'a Lexicon,
    rack_len: usize,
    seen: HashSet<PlacementKey>,
    moves: Vec<Placement>,
}

impl<'a> Search<'a> {
    fn run_anchor(&mut self, x: usize, y: usize, dir: Direction, rack: &Rack) {
        let space = play_space::extract(self.board, x, y, dir);
        if space.room == 0 {
            return;
        }

        // Tiles between the effective start and the anchor are mandatory
        // prefix letters; walk the trie through them before searching.
        let offset = match dir {
            Direction::Horizontal => x - space.start.0,
            Direction::Vertical => y - space.start.1,
        };
        let mut node = self.lexicon.root();
        for i in 0..offset {
            let next = space.play[i].and_then(|letter| node.child(letter));
            match next {
                Some(child) => node = child,
                None => return,
            }
        }

        let mut working: WorkingRack = SmallVec::from_slice(rack.tiles());
        let mut placed = Placed::new();
        self.search_play(node, &space, offset, &mut working, &mut placed, (x, y), dir);
    }

    /// The placement DFS. `play_idx` is the current position inside the run;
    /// `placed` holds the tiles spent so far, in order.
    #[allow(clippy::too_many_arguments)]
    fn search_play(
        &mut self,
        node: TrieCursor<'_>,
        space: &PlaySpace,
        play_idx: usize,
        rack: &mut WorkingRack,
        placed: &mut Placed,
        anchor: (usize, usize),
        dir: Direction,
    ) {
        // A word may end here only if the next cell is not an existing tile
        // the word would have to absorb.
        let can_stop = play_idx >= space.play.len() || space.play[play_idx].is_none();
        if can_stop && node.is_terminal() && !placed.is_empty() {
            self.record_move(placed, anchor, dir);
        }
        if play_idx >= space.play.len() || rack.is_empty() {
            return;
        }

        if let Some(letter) = space.play[play_idx] {
            // Existing tile: follow its trie edge or give up on this branch.
            if let Some(child) = node.child(letter) {
                self.search_play(child, space, play_idx + 1, rack, placed, anchor, dir);
            }
            return;
        }

        // Empty cell: try each distinct producible letter once. Iterating
        // the alphabet rather than the rack dedups repeated rack letters,
        // and take_index prefers a real tile over a blank so the recorded
        // variant is the higher-scoring one.
        for letter in b'A'..=b'Z' {
            let Some(child) = node.child(letter) else {
                continue;
            };
            if let Some(ctx) = &space.cross[play_idx] {
                if !self.lexicon.contains_letters(ctx.word_with(letter)) {
                    continue;
                }
            }
            let Some(index) = take_index(rack, letter) else {
                continue;
            };
            let taken = rack.swap_remove(index);
            placed.push(match taken {
                RackTile::Letter(_) => Tile::Letter(letter),
                RackTile::Blank => Tile::Blank(letter),
            });

            self.search_play(child, space, play_idx + 1, rack, placed, anchor, dir);

            placed.pop();
            rack.push(taken);
            let last = rack.len() - 1;
            rack.swap(index, last);
        }
    }

    fn record_move(&mut self, placed: &Placed, anchor: (usize, usize), dir: Direction) {
        if !self.covers_center_if_required(anchor, placed.len(), dir) {
            return;
        }
        if !self.touches_existing(anchor, placed.len(), dir) {
            return;
        }

        let mut score =
            score_placement(self.board, self.ruleset, anchor.0, anchor.1, dir, placed);
        if self.rack_len == 7 && placed.len() == 7 {
            score += self.ruleset.bingo_bonus();
        }

        let placement = Placement {
            x: anchor.0,
            y: anchor.1,
            dir,
            tiles: placed.to_vec(),
            score,
        };
        if self.seen.insert(placement.key()) {
            self.moves.push(placement);
        }
    }

    /// First-move rule: while the center is empty, every placement must put
    /// one of its new tiles on the center square.
    fn covers_center_if_required(
        &self,
        anchor: (usize, usize),
        count: usize,
        dir: Direction,
    ) -> bool {
        if !self.board.center_is_empty() {
            return true;
        }
        self.newly_placed_cells(anchor, count, dir).contains(&CENTER)
    }

    /// Contiguity rule: once the board has tiles, a placement must sit next
    /// to at least one of them. Walks the run from the anchor until every
    /// new tile is accounted for, checking the four neighbors of each cell
    /// visited (cells the run passes through included).
    fn touches_existing(&self, anchor: (usize, usize), count: usize, dir: Direction) -> bool {
        if self.board.center_is_empty() {
            return true;
        }
        let mut remaining = count;
        let (mut x, mut y) = anchor;
        loop {
            if self.board.is_empty(x, y) {
                remaining -= 1;
            }
            if self.has_occupied_neighbor(x, y) {
                return true;
            }
            if remaining == 0 {
                return false;
            }
            match dir.advance(x, y) {
                Some(next) => (x, y) = next,
                None => return false,
            }
        }
    }

    fn has_occupied_neighbor(&self, x: usize, y: usize) -> bool {
        (x > 0 && !self.board.is_empty(x - 1, y))
            || (x + 1 < SIZE && !self.board.is_empty(x + 1, y))
            || (y > 0 && !self.board.is_empty(x, y - 1))
            || (y + 1 < SIZE && !self.board.is_empty(x, y + 1))
    }

    /// The cells the first `count` new tiles land on, skipping cells the run
    /// reuses from the board.
    fn newly_placed_cells(
        &self,
        anchor: (usize, usize),
        count: usize,
        dir: Direction,
    ) -> SmallVec<[(usize, usize); 7]> {
        let mut cells = SmallVec::new();
        let (mut x, mut y) = anchor;
        while cells.len() < count {
            if self.board.is_empty(x, y) {
                cells.push((x, y));
            }
            match dir.advance(x, y) {
                Some(next) => (x, y) = next,
                None => break,
            }
        }
        cells
    }
}

/// Index of a rack tile that can produce `letter`: an exact tile if there is
/// one, otherwise a blank.
fn take_index(rack: &WorkingRack, letter: u8) -> Option<usize> {
    rack.iter()
        .position(|&t| t == RackTile::Letter(letter))
        .or_else(|| rack.iter().position(|&t| t == RackTile::Blank))
}
