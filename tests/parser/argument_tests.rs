//! Argument parsing tests.
//!
//! Tests for the direction and item-name parsers.

use mudline_parser::{Direction, DirectionError, ItemName, PickupError};

// =============================================================================
// Directions
// =============================================================================

#[test]
fn direction_words() {
    assert_eq!("forward".parse::<Direction>(), Ok(Direction::Forward));
    assert_eq!("back".parse::<Direction>(), Ok(Direction::Back));
    assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
    assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
}

#[test]
fn direction_case_insensitive() {
    assert_eq!(Direction::parse("RiGhT"), Ok(Direction::Right));
}

#[test]
fn direction_rejections_are_classified() {
    assert_eq!(Direction::parse(""), Err(DirectionError::Missing));
    assert_eq!(
        Direction::parse("north"),
        Err(DirectionError::Unknown("north".to_string()))
    );
    assert_eq!(
        Direction::parse("backwards"),
        Err(DirectionError::Unknown("backwards".to_string()))
    );
}

#[test]
fn direction_display_is_lowercase() {
    assert_eq!(Direction::Forward.to_string(), "forward");
}

// =============================================================================
// Item names
// =============================================================================

#[test]
fn item_after_particle() {
    let item = ItemName::parse_pickup("up sword").unwrap();
    assert_eq!(item.as_str(), "sword");
}

#[test]
fn item_keeps_typed_casing() {
    let item = ItemName::parse_pickup("UP Sword").unwrap();
    assert_eq!(item.to_string(), "Sword");
}

#[test]
fn item_multiword() {
    let item = ItemName::parse_pickup("up the crooked key").unwrap();
    assert_eq!(item.as_str(), "the crooked key");
}

#[test]
fn item_missing() {
    assert_eq!(ItemName::parse_pickup("up"), Err(PickupError::MissingItem));
}

#[test]
fn particle_missing() {
    assert_eq!(ItemName::parse_pickup("sword"), Err(PickupError::MissingUp));
    assert_eq!(ItemName::parse_pickup("the up"), Err(PickupError::MissingUp));
}

#[test]
fn glued_particle_is_part_of_the_name() {
    let item = ItemName::parse_pickup("upholstery").unwrap();
    assert_eq!(item.as_str(), "upholstery");
}
