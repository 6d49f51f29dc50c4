use serde::{Deserialize, Serialize};

/// A single board cell.
///
/// Both occupied variants carry an uppercase letter byte (`b'A'..=b'Z'`).
/// A blank played as E forms the same words as a normal E but is a distinct
/// value: it contributes 0 to letter scores, and it renders lowercase in the
/// text form of a board or placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    /// A normal tile bearing this letter.
    Letter(u8),
    /// A blank tile assigned this letter.
    Blank(u8),
}

impl Tile {
    pub fn is_empty(self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// The word-forming letter of an occupied cell (uppercase), if any.
    pub fn letter(self) -> Option<u8> {
        match self {
            Tile::Empty => None,
            Tile::Letter(l) | Tile::Blank(l) => Some(l),
        }
    }

    /// Parse the text form: `.` empty, uppercase = normal tile,
    /// lowercase = blank assigned that letter.
    pub fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' => Some(Tile::Empty),
            'A'..='Z' => Some(Tile::Letter(ch as u8)),
            'a'..='z' => Some(Tile::Blank(ch.to_ascii_uppercase() as u8)),
            _ => None,
        }
    }

    /// Inverse of [`Tile::from_char`].
    pub fn to_char(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Letter(l) => l as char,
            Tile::Blank(l) => l.to_ascii_lowercase() as char,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_round_trip() {
        for ch in ['.', 'A', 'Q', 'Z', 'a', 'e', 'z'] {
            let tile = Tile::from_char(ch).unwrap();
            assert_eq!(tile.to_char(), ch);
        }
    }

    #[test]
    fn test_from_char_rejects_non_tiles() {
        for ch in ['*', ' ', '0', '?', 'é'] {
            assert_eq!(Tile::from_char(ch), None);
        }
    }

    #[test]
    fn test_blank_forms_same_letter_but_is_distinct() {
        let normal = Tile::from_char('E').unwrap();
        let blank = Tile::from_char('e').unwrap();
        assert_eq!(normal.letter(), Some(b'E'));
        assert_eq!(blank.letter(), Some(b'E'));
        assert_ne!(normal, blank);
    }

    #[test]
    fn test_empty_has_no_letter() {
        assert!(Tile::Empty.is_empty());
        assert_eq!(Tile::Empty.letter(), None);
    }
}
