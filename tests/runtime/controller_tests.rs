//! Controller tests.
//!
//! Tests for dispatch responses and the run-state transition.

use mudline_foundation::Player;
use mudline_runtime::{Controller, GameState, messages};

fn respond(input: &str) -> Vec<String> {
    Controller::new(Player::default())
        .handle_input(input)
        .lines()
        .to_vec()
}

// =============================================================================
// Responses
// =============================================================================

#[test]
fn blank_input_is_silent() {
    assert!(respond("").is_empty());
    assert!(respond("    ").is_empty());
}

#[test]
fn tab_after_particle_separates_item() {
    assert_eq!(respond("pick up\tsword"), ["you picked up sword."]);
    assert_eq!(respond("pick up \t sword"), ["you picked up sword."]);
}

#[test]
fn look_describes_room() {
    assert_eq!(respond("look"), [messages::LOOK]);
}

#[test]
fn moves() {
    assert_eq!(
        respond("move forward"),
        ["you moved forward. A new area unfolds before you."]
    );
    assert_eq!(
        respond("MOVE Back"),
        ["you moved back. A new area unfolds before you."]
    );
    assert_eq!(respond("move up"), [messages::CANNOT_MOVE]);
    assert_eq!(respond("move"), [messages::MOVE_NEEDS_DIRECTION]);
}

#[test]
fn pickups() {
    assert_eq!(respond("pick up sword"), ["you picked up sword."]);
    assert_eq!(respond("PICK UP Sword"), ["you picked up Sword."]);
    assert_eq!(respond("pick up"), [messages::PICK_NEEDS_ITEM]);
    assert_eq!(respond("pick sword"), [messages::PICK_NEEDS_UP]);
}

#[test]
fn inventory_is_always_empty() {
    let mut controller = Controller::new(Player::default());
    controller.handle_input("pick up sword");

    assert_eq!(
        controller.handle_input("inventory").lines(),
        [messages::INVENTORY_EMPTY]
    );
}

#[test]
fn help_listing() {
    let lines = respond("help");

    assert_eq!(lines, messages::help_lines());
    assert_eq!(lines[2], "move [direction] - move in a direction (forward, back, left, right)");
}

#[test]
fn unknown_command() {
    assert_eq!(respond("jump"), [messages::UNKNOWN_COMMAND]);
    assert_eq!(respond("Look!"), [messages::UNKNOWN_COMMAND]);
}

// =============================================================================
// Run State
// =============================================================================

#[test]
fn only_quit_stops() {
    let mut controller = Controller::new(Player::default());
    for input in ["look", "move left", "pick up x", "inventory", "help", "huh", ""] {
        controller.handle_input(input);
        assert_eq!(controller.state(), GameState::Running, "after {input:?}");
    }

    assert_eq!(controller.handle_input("QUIT").lines(), [messages::GAME_OVER]);
    assert_eq!(controller.state(), GameState::Stopped);
}

#[test]
fn stopped_is_terminal() {
    let mut controller = Controller::new(Player::default());
    controller.handle_input("quit");

    for input in ["look", "help", "quit"] {
        assert!(controller.handle_input(input).is_empty());
    }
    assert!(!controller.is_running());
}

#[test]
fn repeated_commands_are_idempotent() {
    let mut controller = Controller::new(Player::default());
    for input in ["look", "move right", "pick up gem", "help", "frobnicate"] {
        let first = controller.handle_input(input);
        let second = controller.handle_input(input);
        assert_eq!(first, second, "{input} changed between calls");
    }
}
