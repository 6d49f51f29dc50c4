use thiserror::Error;

/// Errors raised while validating a ruleset definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesetError {
    #[error("premium square ({x},{y}) is outside the 15x15 board")]
    PremiumOutOfRange { x: usize, y: usize },

    #[error("premium square ({x},{y}) is listed with more than one bonus")]
    PremiumOverlap { x: usize, y: usize },

    #[error("letter key {0:?} must be a single letter A-Z")]
    InvalidLetterKey(String),
}

/// Errors raised while parsing the 15-line board text form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 15 rows, found {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 15")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid tile character {ch:?} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, ch: char },
}

/// Errors raised by strict rack parsing ([`Rack`]'s `FromStr`).
///
/// The lenient alternative, [`Rack::parse_lenient`], never fails: it
/// downgrades unknown characters to blanks and drops tiles beyond the seventh.
///
/// [`Rack`]: crate::rack::Rack
/// [`Rack::parse_lenient`]: crate::rack::Rack::parse_lenient
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RackParseError {
    #[error("invalid rack character {0:?} (expected A-Z or '*')")]
    InvalidTile(char),

    #[error("rack has {0} tiles, at most 7 allowed")]
    TooManyTiles(usize),
}
