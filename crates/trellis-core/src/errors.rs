//! Error types for the Trellis layout engine.

use thiserror::Error;

/// Errors raised while configuring or running a layout cycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid value for {attribute}: {value}")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },

    #[error("Item {index} has an invalid {attribute}: {value}")]
    InvalidItem {
        index: usize,
        attribute: &'static str,
        value: String,
    },
}

impl LayoutError {
    pub(crate) fn invalid_attribute(attribute: &'static str, value: impl ToString) -> Self {
        Self::InvalidAttribute {
            attribute,
            value: value.to_string(),
        }
    }

    /// Build an [`LayoutError::InvalidItem`] for the child at `index`.
    pub fn invalid_item(index: usize, attribute: &'static str, value: impl ToString) -> Self {
        Self::InvalidItem {
            index,
            attribute,
            value: value.to_string(),
        }
    }
}

/// Result alias used throughout the layout crates.
pub type LayoutResult<T> = Result<T, LayoutError>;
