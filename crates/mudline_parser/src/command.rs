//! Parsed commands.

use crate::direction::{Direction, DirectionError};
use crate::item::{ItemName, PickupError};
use crate::tokenizer::CommandLine;
use crate::vocabulary::Verb;

/// A command ready for dispatch.
///
/// Argument-taking commands carry the outcome of parsing their argument, so
/// a rejected argument is still a command: the runtime answers it with
/// advice instead of failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `look`
    Look,
    /// `move <direction>`
    Move(Result<Direction, DirectionError>),
    /// `pick up <item>`
    PickUp(Result<ItemName, PickupError>),
    /// `inventory`
    Inventory,
    /// `help`
    Help,
    /// `quit`
    Quit,
    /// A first word outside the vocabulary (lowercased)
    Unknown(String),
}

impl Command {
    /// Builds a command from a split input line.
    ///
    /// Arguments given to verbs that take none are ignored.
    #[must_use]
    pub fn from_line(line: CommandLine) -> Self {
        let Some(verb) = Verb::lookup(&line.verb) else {
            return Self::Unknown(line.verb);
        };

        match verb {
            Verb::Look => Self::Look,
            Verb::Move => Self::Move(Direction::parse(&line.argument)),
            Verb::Pick => Self::PickUp(ItemName::parse_pickup(&line.argument)),
            Verb::Inventory => Self::Inventory,
            Verb::Help => Self::Help,
            Verb::Quit => Self::Quit,
        }
    }

    /// The vocabulary verb behind this command, if any.
    #[must_use]
    pub const fn verb(&self) -> Option<Verb> {
        match self {
            Self::Look => Some(Verb::Look),
            Self::Move(_) => Some(Verb::Move),
            Self::PickUp(_) => Some(Verb::Pick),
            Self::Inventory => Some(Verb::Inventory),
            Self::Help => Some(Verb::Help),
            Self::Quit => Some(Verb::Quit),
            Self::Unknown(_) => None,
        }
    }
}
