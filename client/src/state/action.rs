//! Per-action request lifecycle.
//!
//! Each user-triggerable request (classify, submit, load, transition) owns
//! one `ActionState`, so "busy" is a property of that action alone and two
//! different actions never block each other.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use crate::net::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl ActionState {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Move to `Pending`. Returns `false` (and changes nothing) when a request
    /// for this action is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Record the outcome of the outstanding request.
    pub fn finish<T>(&mut self, result: &Result<T, ApiError>) {
        *self = match result {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
