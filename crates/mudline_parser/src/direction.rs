//! Movement directions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A direction the player can move in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Straight ahead
    Forward,
    /// Behind
    Back,
    /// To the left
    Left,
    /// To the right
    Right,
}

/// Why an argument is not a direction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DirectionError {
    /// Nothing was given
    #[error("no direction given")]
    Missing,
    /// Something was given, but it is not one of the four directions
    #[error("unknown direction: {0}")]
    Unknown(String),
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
    ];

    /// Parses a movement argument.
    ///
    /// The whole (trimmed) argument must equal one of the four direction
    /// words, ignoring case. "forward please" is not a direction.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::Missing`] for a blank argument and
    /// [`DirectionError::Unknown`] for anything else that does not match.
    pub fn parse(argument: &str) -> Result<Self, DirectionError> {
        let word = argument.trim();
        if word.is_empty() {
            return Err(DirectionError::Missing);
        }
        match word.to_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "back" => Ok(Self::Back),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(DirectionError::Unknown(word.to_string())),
        }
    }

    /// The lowercase word for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
