//! Users

use std::fmt;

/// An opaque handle identifying the signed-in shopper.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct User {
    handle: String,
}

impl User {
    /// Creates a new user with the given handle.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        User {
            handle: handle.into(),
        }
    }

    /// Returns the handle of the user.
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}
