//! Move generation and scoring for Scrabble-family word games.
//!
//! Given a 15x15 board, a rack of up to seven tiles (blanks included), a
//! scoring ruleset and a dictionary, [`generate_top_n`] enumerates every
//! legal placement and returns them ranked by score. [`find_placements`]
//! answers the inverse question: where could a completed word have been
//! legally played?
//!
//! The dictionary lives in two coupled forms (a prefix trie for the search
//! and a hashed word-set for cross-word checks); build a [`Lexicon`] once and
//! share it freely — it is immutable, as is the [`Ruleset`].
//!
//! ```
//! use rackle::{generate_top_n, Board, Lexicon, Rack, Ruleset};
//!
//! let lexicon = Lexicon::from_words(["CABLE", "CABLES", "ABLE"]);
//! let ruleset = Ruleset::standard();
//! let board = Board::new();
//! let rack: Rack = "CABLES".parse().unwrap();
//!
//! let moves = generate_top_n(&board, &ruleset, &lexicon, &rack, 10);
//! assert!(!moves.is_empty());
//! // Every opening move covers the center square.
//! let mut board = board;
//! board.apply(&moves[0]);
//! assert!(!board.center_is_empty());
//! ```

pub mod board;
pub mod direction;
pub mod errors;
pub mod finder;
pub mod lexicon;
pub mod logging;
pub mod movegen;
pub mod placement;
pub mod play_space;
pub mod rack;
pub mod ruleset;
pub mod score;
pub mod tile;
pub mod word_list;

pub use board::Board;
pub use direction::Direction;
pub use finder::find_placements;
pub use lexicon::Lexicon;
pub use movegen::generate_top_n;
pub use placement::Placement;
pub use rack::{Rack, RackTile};
pub use ruleset::{Premium, Ruleset, RulesetDef};
pub use score::score_placement;
pub use tile::Tile;
pub use word_list::WordList;
