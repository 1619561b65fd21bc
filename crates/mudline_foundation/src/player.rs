//! The player identity.

use std::fmt;

/// The name given to a player when none is supplied.
pub const DEFAULT_PLAYER_NAME: &str = "adventurer";

/// The person at the keyboard.
///
/// A player is built once by the caller and handed to the controller, which
/// keeps it for the length of the session without reading or changing it.
/// The name exists for the outer surfaces (logging, the CLI).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
}

impl Player {
    /// Creates a player with the given name.
    ///
    /// Surrounding whitespace is dropped; a blank name falls back to
    /// [`DEFAULT_PLAYER_NAME`].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            name: trimmed.to_string(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
