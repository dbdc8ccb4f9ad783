// SPDX-License-Identifier: MIT
//
// Error type for the color model. Parsing is the only fallible operation;
// every transformation on an already-valid Color is total.

use thiserror::Error;

/// Errors produced while constructing a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matched no supported notation (hex, `rgb()`, `hsl()`, or
    /// a CSS named color).
    #[error("invalid color input: {0:?}")]
    InvalidColorInput(String),
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColorInput(input.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_quotes_the_input() {
        let err = ColorError::invalid("not-a-color");
        assert_eq!(err.to_string(), "invalid color input: \"not-a-color\"");
    }
}
