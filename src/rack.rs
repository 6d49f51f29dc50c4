use crate::errors::RackParseError;
use smallvec::SmallVec;
use std::str::FromStr;

/// Maximum number of tiles a rack holds.
pub const RACK_CAPACITY: usize = 7;

/// One rack slot: a letter tile or an unassigned blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RackTile {
    /// A normal tile (uppercase letter).
    Letter(u8),
    /// A wildcard; the generator assigns it a letter when it is played.
    Blank,
}

/// An unordered multiset of up to 7 tiles. The engine never mutates a caller's
/// rack; searches work on an internal copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: SmallVec<[RackTile; RACK_CAPACITY]>,
}

impl Rack {
    pub fn new() -> Rack {
        Rack::default()
    }

    /// Parse a rack, mapping anything that is not a letter or `*` to a blank
    /// and dropping tiles beyond the seventh. Whitespace is ignored. This is
    /// the documented lenient default; use `FromStr` to reject bad input
    /// instead.
    pub fn parse_lenient(input: &str) -> Rack {
        let tiles = input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| match ch {
                'A'..='Z' | 'a'..='z' => RackTile::Letter(ch.to_ascii_uppercase() as u8),
                _ => RackTile::Blank,
            })
            .take(RACK_CAPACITY)
            .collect();
        Rack { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[RackTile] {
        &self.tiles
    }
}

impl FromStr for Rack {
    type Err = RackParseError;

    /// Strict parsing: letters (case-insensitive) and `*` for blanks only,
    /// at most 7 tiles. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = SmallVec::new();
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let tile = match ch {
                'A'..='Z' | 'a'..='z' => RackTile::Letter(ch.to_ascii_uppercase() as u8),
                '*' => RackTile::Blank,
                _ => return Err(RackParseError::InvalidTile(ch)),
            };
            tiles.push(tile);
        }
        if tiles.len() > RACK_CAPACITY {
            return Err(RackParseError::TooManyTiles(tiles.len()));
        }
        Ok(Rack { tiles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_parse() {
        let rack: Rack = "CAT*s".parse().unwrap();
        assert_eq!(
            rack.tiles(),
            [
                RackTile::Letter(b'C'),
                RackTile::Letter(b'A'),
                RackTile::Letter(b'T'),
                RackTile::Blank,
                RackTile::Letter(b'S'),
            ]
        );
    }

    #[test]
    fn test_strict_parse_rejects_junk() {
        assert_eq!("CA7".parse::<Rack>().unwrap_err(), RackParseError::InvalidTile('7'));
    }

    #[test]
    fn test_strict_parse_rejects_oversized_rack() {
        assert_eq!(
            "ABCDEFGH".parse::<Rack>().unwrap_err(),
            RackParseError::TooManyTiles(8)
        );
    }

    #[test]
    fn test_lenient_parse_maps_junk_to_blanks() {
        let rack = Rack::parse_lenient("C?T 7");
        assert_eq!(
            rack.tiles(),
            [
                RackTile::Letter(b'C'),
                RackTile::Blank,
                RackTile::Letter(b'T'),
                RackTile::Blank,
            ]
        );
    }

    #[test]
    fn test_lenient_parse_truncates() {
        let rack = Rack::parse_lenient("ABCDEFGHIJ");
        assert_eq!(rack.len(), RACK_CAPACITY);
    }

    #[test]
    fn test_empty_rack() {
        let rack = Rack::new();
        assert!(rack.is_empty());
        assert_eq!("".parse::<Rack>().unwrap(), rack);
    }
}
