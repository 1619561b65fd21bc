//! The game controller.
//!
//! Owns the player and the run state, and turns one line of input into one
//! [`Response`]. The controller does no I/O; the [`Repl`](crate::Repl)
//! reads lines and prints responses.

use mudline_foundation::Player;
use mudline_parser::{Command, CommandParser, DirectionError, ParseResult, PickupError};
use tracing::{debug, info};

use crate::messages;
use crate::response::Response;

/// Whether the game is still accepting commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    /// Commands are being dispatched
    #[default]
    Running,
    /// The player quit; terminal
    Stopped,
}

/// Parses and dispatches player commands.
#[derive(Debug)]
pub struct Controller {
    player: Player,
    state: GameState,
}

impl Controller {
    /// Creates a running controller for the given player.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            player,
            state: GameState::Running,
        }
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the current run state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns true until the player quits.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Handles one line of input.
    ///
    /// Never fails: blank input, and any input after the game has stopped,
    /// yields an empty response.
    pub fn handle_input(&mut self, input: &str) -> Response {
        if !self.is_running() {
            debug!(input, "ignoring input after game over");
            return Response::empty();
        }

        match CommandParser::parse(input) {
            ParseResult::Empty => Response::empty(),
            ParseResult::Command(command) => self.execute(command),
        }
    }

    /// Executes a parsed command.
    pub fn execute(&mut self, command: Command) -> Response {
        debug!(?command, "dispatching");

        match command {
            Command::Look => Response::line(messages::LOOK),
            Command::Move(Ok(direction)) => Response::line(messages::moved(direction)),
            Command::Move(Err(DirectionError::Missing)) => {
                Response::line(messages::MOVE_NEEDS_DIRECTION)
            }
            Command::Move(Err(DirectionError::Unknown(_))) => {
                Response::line(messages::CANNOT_MOVE)
            }
            Command::PickUp(Ok(item)) => Response::line(messages::picked_up(&item)),
            Command::PickUp(Err(PickupError::MissingUp)) => {
                Response::line(messages::PICK_NEEDS_UP)
            }
            Command::PickUp(Err(PickupError::MissingItem)) => {
                Response::line(messages::PICK_NEEDS_ITEM)
            }
            Command::Inventory => Response::line(messages::INVENTORY_EMPTY),
            Command::Help => messages::help_lines().into_iter().collect(),
            Command::Quit => self.quit(),
            Command::Unknown(_) => Response::line(messages::UNKNOWN_COMMAND),
        }
    }

    fn quit(&mut self) -> Response {
        if self.state == GameState::Stopped {
            return Response::empty();
        }
        self.state = GameState::Stopped;
        info!(player = %self.player, "game stopped");
        Response::line(messages::GAME_OVER)
    }
}
