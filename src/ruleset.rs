//! Immutable scoring parameters: the letter-value table, the premium-square
//! layout, and the bingo bonus.
//!
//! A [`Ruleset`] is an explicit value threaded through every query; the engine
//! keeps no global scoring state. Construct one from a caller-supplied
//! [`RulesetDef`] (any serde-compatible source) or use a built-in preset.

use crate::board::{cti, CELLS, SIZE};
use crate::errors::RulesetError;
use crate::tile::Tile;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The bonus carried by a single cell. Each cell has at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Premium {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

/// A ruleset definition as configuration data.
///
/// This is the shape callers deserialize from their own config files — a map
/// of letter to point value plus `[x, y]` coordinate lists for the four
/// premium-square sets. The engine imposes no file format; anything serde can
/// read into this struct works.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesetDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bingo_bonus: i32,
    #[serde(default)]
    pub letter_points: BTreeMap<String, i32>,
    #[serde(default)]
    pub triple_word: Vec<(usize, usize)>,
    #[serde(default)]
    pub double_word: Vec<(usize, usize)>,
    #[serde(default)]
    pub triple_letter: Vec<(usize, usize)>,
    #[serde(default)]
    pub double_letter: Vec<(usize, usize)>,
}

/// Validated, immutable scoring parameters.
#[derive(Debug, Clone)]
pub struct Ruleset {
    letter_values: [i32; 26],
    premiums: [Premium; CELLS],
    bingo_bonus: i32,
}

impl Ruleset {
    /// Validate a definition: every premium coordinate must be on the board
    /// and no cell may carry more than one bonus.
    pub fn from_def(def: &RulesetDef) -> Result<Ruleset, RulesetError> {
        let mut letter_values = [0i32; 26];
        for (key, &points) in &def.letter_points {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii_alphabetic() => {
                    letter_values[(ch.to_ascii_uppercase() as u8 - b'A') as usize] = points;
                }
                _ => return Err(RulesetError::InvalidLetterKey(key.clone())),
            }
        }

        let mut premiums = [Premium::None; CELLS];
        assign(&mut premiums, &def.triple_word, Premium::TripleWord)?;
        assign(&mut premiums, &def.double_word, Premium::DoubleWord)?;
        assign(&mut premiums, &def.triple_letter, Premium::TripleLetter)?;
        assign(&mut premiums, &def.double_letter, Premium::DoubleLetter)?;

        Ok(Ruleset { letter_values, premiums, bingo_bonus: def.bingo_bonus })
    }

    /// The NYT Crossplay scoring table (bingo bonus 40). Note the center
    /// square carries no multiplier in this layout.
    pub fn crossplay() -> Ruleset {
        const TW: &[usize] = &[3, 11, 45, 59, 165, 179, 213, 221];
        const DW: &[usize] = &[16, 28, 52, 108, 116, 172, 196, 208];
        const TL: &[usize] = &[
            0, 14, 21, 23, 65, 69, 79, 85, 91, 103, 121, 133, 139, 145, 155, 159, 201, 203, 210,
            224,
        ];
        const DL: &[usize] = &[
            7, 34, 40, 48, 56, 62, 72, 82, 105, 110, 114, 119, 142, 152, 162, 168, 176, 184, 190,
            217,
        ];
        const VALUES: [i32; 26] = [
            1, 4, 3, 2, 1, 4, 4, 3, 1, 10, 6, 2, 3, 1, 1, 3, 10, 1, 1, 1, 2, 6, 5, 8, 4, 10,
        ];

        let mut premiums = [Premium::None; CELLS];
        for &idx in TW {
            premiums[idx] = Premium::TripleWord;
        }
        for &idx in DW {
            premiums[idx] = Premium::DoubleWord;
        }
        for &idx in TL {
            premiums[idx] = Premium::TripleLetter;
        }
        for &idx in DL {
            premiums[idx] = Premium::DoubleLetter;
        }
        Ruleset { letter_values: VALUES, premiums, bingo_bonus: 40 }
    }

    /// The standard Scrabble scoring table (bingo bonus 50, double-word
    /// start square at the center).
    pub fn standard() -> Ruleset {
        const TW: &[(usize, usize)] = &[
            (0, 0),
            (7, 0),
            (14, 0),
            (0, 7),
            (14, 7),
            (0, 14),
            (7, 14),
            (14, 14),
        ];
        const DW: &[(usize, usize)] = &[
            (1, 1),
            (2, 2),
            (3, 3),
            (4, 4),
            (13, 1),
            (12, 2),
            (11, 3),
            (10, 4),
            (1, 13),
            (2, 12),
            (3, 11),
            (4, 10),
            (13, 13),
            (12, 12),
            (11, 11),
            (10, 10),
            (7, 7),
        ];
        const TL: &[(usize, usize)] = &[
            (5, 1),
            (9, 1),
            (1, 5),
            (5, 5),
            (9, 5),
            (13, 5),
            (1, 9),
            (5, 9),
            (9, 9),
            (13, 9),
            (5, 13),
            (9, 13),
        ];
        const DL: &[(usize, usize)] = &[
            (3, 0),
            (11, 0),
            (6, 2),
            (8, 2),
            (0, 3),
            (7, 3),
            (14, 3),
            (2, 6),
            (6, 6),
            (8, 6),
            (12, 6),
            (3, 7),
            (11, 7),
            (2, 8),
            (6, 8),
            (8, 8),
            (12, 8),
            (0, 11),
            (7, 11),
            (14, 11),
            (6, 12),
            (8, 12),
            (3, 14),
            (11, 14),
        ];
        const VALUES: [i32; 26] = [
            1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
        ];

        let mut premiums = [Premium::None; CELLS];
        for &(x, y) in TW {
            premiums[cti(x, y)] = Premium::TripleWord;
        }
        for &(x, y) in DW {
            premiums[cti(x, y)] = Premium::DoubleWord;
        }
        for &(x, y) in TL {
            premiums[cti(x, y)] = Premium::TripleLetter;
        }
        for &(x, y) in DL {
            premiums[cti(x, y)] = Premium::DoubleLetter;
        }
        Ruleset { letter_values: VALUES, premiums, bingo_bonus: 50 }
    }

    /// Point value of an uppercase letter. Any other byte (including the
    /// lowercase bytes blanks render as) is worth 0.
    pub fn letter_value(&self, letter: u8) -> i32 {
        if letter.is_ascii_uppercase() {
            self.letter_values[(letter - b'A') as usize]
        } else {
            0
        }
    }

    /// Point value of a tile: blanks are worth 0 regardless of their letter.
    pub(crate) fn tile_value(&self, tile: Tile) -> i32 {
        match tile {
            Tile::Letter(l) => self.letter_value(l),
            Tile::Empty | Tile::Blank(_) => 0,
        }
    }

    pub fn premium(&self, x: usize, y: usize) -> Premium {
        self.premiums[cti(x, y)]
    }

    pub fn is_triple_word(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::TripleWord
    }

    pub fn is_double_word(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::DoubleWord
    }

    pub fn is_triple_letter(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::TripleLetter
    }

    pub fn is_double_letter(&self, x: usize, y: usize) -> bool {
        self.premium(x, y) == Premium::DoubleLetter
    }

    pub fn bingo_bonus(&self) -> i32 {
        self.bingo_bonus
    }
}

fn assign(
    premiums: &mut [Premium; CELLS],
    cells: &[(usize, usize)],
    premium: Premium,
) -> Result<(), RulesetError> {
    for &(x, y) in cells {
        if x >= SIZE || y >= SIZE {
            return Err(RulesetError::PremiumOutOfRange { x, y });
        }
        let slot = &mut premiums[cti(x, y)];
        if *slot != Premium::None {
            return Err(RulesetError::PremiumOverlap { x, y });
        }
        *slot = premium;
    }
    Ok(())
}
