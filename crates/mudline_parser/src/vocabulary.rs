//! The verb vocabulary.
//!
//! Mudline understands a fixed set of six verbs. They are matched by exact
//! (lowercase) string comparison; there are no synonyms.

use std::fmt;
use std::str::FromStr;

/// A recognized verb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Describe the surroundings
    Look,
    /// Move in a direction
    Move,
    /// Pick something up ("pick up [item]")
    Pick,
    /// List carried items
    Inventory,
    /// Show the command list
    Help,
    /// End the game
    Quit,
}

impl Verb {
    /// Every verb, in the order the help listing shows them.
    pub const ALL: [Verb; 6] = [
        Verb::Look,
        Verb::Move,
        Verb::Pick,
        Verb::Inventory,
        Verb::Help,
        Verb::Quit,
    ];

    /// Looks up a word in the vocabulary.
    ///
    /// The word must already be lowercased.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        match word {
            "look" => Some(Self::Look),
            "move" => Some(Self::Move),
            "pick" => Some(Self::Pick),
            "inventory" => Some(Self::Inventory),
            "help" => Some(Self::Help),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    /// The word that selects this verb.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Move => "move",
            Self::Pick => "pick",
            Self::Inventory => "inventory",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }

    /// How the verb is typed, including its argument placeholder.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Move => "move [direction]",
            Self::Pick => "pick up [item]",
            other => other.word(),
        }
    }

    /// One-line description for the help listing.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Look => "examine the current room",
            Self::Move => "move in a direction (forward, back, left, right)",
            Self::Pick => "pick up an item",
            Self::Inventory => "check your inventory",
            Self::Help => "display this help message",
            Self::Quit => "exit the game",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// Error returned when parsing a word that is not a verb.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown verb: {0}")]
pub struct UnknownVerb(pub String);

impl FromStr for Verb {
    type Err = UnknownVerb;

    /// Parses a verb, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(&s.to_lowercase()).ok_or_else(|| UnknownVerb(s.to_string()))
    }
}
