//! Item names for "pick up".
//!
//! The pick verb expects its argument to start with the particle `up`:
//!
//! | argument        | result                      |
//! |-----------------|-----------------------------|
//! | `up sword`      | `Ok("sword")`               |
//! | `UP Rusty Sword`| `Ok("Rusty Sword")`         |
//! | `up`            | `Err(MissingItem)`          |
//! | `upside`        | `Ok("upside")`              |
//! | `sword`         | `Err(MissingUp)`            |
//!
//! An argument that begins with the letters `up` without being the word
//! `up` is taken whole as the item name.

use std::fmt;

use thiserror::Error;

/// A non-empty item name, with the casing the player typed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemName(String);

/// Why a "pick" argument does not name an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PickupError {
    /// The argument does not start with `up`
    #[error("expected 'up' after 'pick'")]
    MissingUp,
    /// `up` was given but nothing after it
    #[error("no item named")]
    MissingItem,
}

const PARTICLE: &str = "up";

impl ItemName {
    /// Parses the argument of a "pick" command.
    ///
    /// # Errors
    ///
    /// Returns [`PickupError::MissingUp`] if the argument does not start
    /// with `up` (ignoring case), and [`PickupError::MissingItem`] if no
    /// item name is left once the particle is removed.
    pub fn parse_pickup(argument: &str) -> Result<Self, PickupError> {
        let argument = argument.trim();

        let has_particle = argument
            .get(..PARTICLE.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(PARTICLE));
        if !has_particle {
            return Err(PickupError::MissingUp);
        }

        let rest = &argument[PARTICLE.len()..];
        // Any whitespace ends the particle, as it ends the verb in the
        // tokenizer: `up\tsword` names `sword`, not `up\tsword`.
        let item = if rest.is_empty() {
            rest
        } else if rest.starts_with(char::is_whitespace) {
            rest.trim()
        } else {
            argument
        };

        if item.is_empty() {
            return Err(PickupError::MissingItem);
        }
        Ok(Self(item.to_string()))
    }

    /// Returns the item name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
