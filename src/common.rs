//! Common types for the targeting core: shared error vocabulary.

use alloc::string::String;

/// Errors surfaced by the targeting core's shared vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Orientation tag outside `horizontal` / `vertical`.
    InvalidOrientation(String),
}

impl core::fmt::Display for TargetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TargetError::InvalidOrientation(tag) => {
                write!(f, "invalid orientation tag: {:?}", tag)
            }
        }
    }
}
