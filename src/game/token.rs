use std::fmt;

use serde::{Deserialize, Serialize};

/// A player's marker dropped into grid cells.
///
/// Tokens compare by value; the two players of a game must use distinct ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Token {
    /// Get the token name for display
    pub fn name(self) -> &'static str {
        match self {
            Token::Red => "Red",
            Token::Yellow => "Yellow",
            Token::Green => "Green",
            Token::Blue => "Blue",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_name() {
        assert_eq!(Token::Red.name(), "Red");
        assert_eq!(Token::Blue.name(), "Blue");
    }

    #[test]
    fn test_token_equality_is_by_value() {
        assert_eq!(Token::Yellow, Token::Yellow);
        assert_ne!(Token::Red, Token::Yellow);
    }
}
