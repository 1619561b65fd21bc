//! Fixed response texts.

use mudline_parser::{Direction, ItemName, Verb};

/// Answer to `look`.
pub const LOOK: &str = "you look around. The room appears empty and quiet.";

/// Answer to `inventory`.
pub const INVENTORY_EMPTY: &str = "your inventory is empty.";

/// Answer to `quit`, and to the end of input.
pub const GAME_OVER: &str = "game over.";

/// Answer to a verb outside the vocabulary.
pub const UNKNOWN_COMMAND: &str =
    "unknown command. Type 'help' for a list of available commands.";

/// Answer to `move` with no argument.
pub const MOVE_NEEDS_DIRECTION: &str = "please specify a direction (e.g., move forward).";

/// Answer to `move` with something that is not a direction.
pub const CANNOT_MOVE: &str = "you cannot move in that direction.";

/// Answer to `pick` without `up`.
pub const PICK_NEEDS_UP: &str = "perhaps you meant 'pick up [item]'.";

/// Answer to `pick up` with no item.
pub const PICK_NEEDS_ITEM: &str = "what do you want to pick up?";

/// First line of the help listing.
pub const HELP_HEADER: &str = "available commands:";

/// Answer to a successful move.
#[must_use]
pub fn moved(direction: Direction) -> String {
    format!("you moved {direction}. A new area unfolds before you.")
}

/// Answer to a successful pick up.
#[must_use]
pub fn picked_up(item: &ItemName) -> String {
    format!("you picked up {item}.")
}

/// The help listing, header first, one line per verb.
#[must_use]
pub fn help_lines() -> Vec<String> {
    std::iter::once(HELP_HEADER.to_string())
        .chain(
            Verb::ALL
                .iter()
                .map(|verb| format!("{} - {}", verb.usage(), verb.description())),
        )
        .collect()
}
