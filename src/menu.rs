//! Menu option validation.
//!
//! A menu option is valid when it lies in `MIN_OPTION..=MAX_OPTION`. A valid
//! option prints its confirmation line; an invalid one is rejected with
//! [`InvalidOptionError`] and prints nothing.

use crate::{Error, InvalidOptionError};
use log::debug;
use std::fmt;
use std::io::Write;

pub const MIN_OPTION: i32 = 1;
pub const MAX_OPTION: i32 = 3;

/// Message carried by every rejection
pub const INVALID_OPTION_MESSAGE: &str = "The option must be between 1 and 3 inclusive";

/// A menu option known to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuOption(i32);

impl MenuOption {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for MenuOption {
    type Error = InvalidOptionError;

    fn try_from(option: i32) -> Result<Self, Self::Error> {
        validate(option)
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check that `option` is within the allowed range
pub fn validate(option: i32) -> Result<MenuOption, InvalidOptionError> {
    if !(MIN_OPTION..=MAX_OPTION).contains(&option) {
        return Err(InvalidOptionError::new(option));
    }
    Ok(MenuOption(option))
}

/// The menu. Stateless: every call is independent of earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Menu;

impl Menu {
    pub fn new() -> Self {
        Menu
    }

    /// Validate `option` and print its confirmation to `out`.
    ///
    /// Returns `Error::InvalidOption` without writing anything when the option
    /// is out of range, and `Error::Io` if the confirmation cannot be written.
    pub fn display_option<W: Write>(&self, option: i32, out: &mut W) -> Result<MenuOption, Error> {
        debug!("validating menu option {}", option);
        let selected = validate(option)?;
        writeln!(out, "Menu option {} selected", selected)?;
        Ok(selected)
    }
}
