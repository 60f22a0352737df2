use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six FLAMES compatibility outcomes
///
/// Declaration order is the canonical enumeration order used for display
/// and for breaking ties between equal percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeCategory {
    Friends,
    Love,
    Affection,
    Marriage,
    Enemies,
    Single,
}

impl OutcomeCategory {
    /// All categories in canonical order
    pub const ALL: [OutcomeCategory; 6] = [
        OutcomeCategory::Friends,
        OutcomeCategory::Love,
        OutcomeCategory::Affection,
        OutcomeCategory::Marriage,
        OutcomeCategory::Enemies,
        OutcomeCategory::Single,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Position in canonical order (0-5)
    pub fn index(self) -> usize {
        match self {
            OutcomeCategory::Friends => 0,
            OutcomeCategory::Love => 1,
            OutcomeCategory::Affection => 2,
            OutcomeCategory::Marriage => 3,
            OutcomeCategory::Enemies => 4,
            OutcomeCategory::Single => 5,
        }
    }

    /// Category at a canonical position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            OutcomeCategory::Friends => "Friends",
            OutcomeCategory::Love => "Love",
            OutcomeCategory::Affection => "Affection",
            OutcomeCategory::Marriage => "Marriage",
            OutcomeCategory::Enemies => "Enemies",
            OutcomeCategory::Single => "Single",
        }
    }

    /// The FLAMES letter
    pub fn letter(self) -> char {
        match self {
            OutcomeCategory::Friends => 'F',
            OutcomeCategory::Love => 'L',
            OutcomeCategory::Affection => 'A',
            OutcomeCategory::Marriage => 'M',
            OutcomeCategory::Enemies => 'E',
            OutcomeCategory::Single => 'S',
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            OutcomeCategory::Friends => "👫",
            OutcomeCategory::Love => "❤️",
            OutcomeCategory::Affection => "💕",
            OutcomeCategory::Marriage => "💍",
            OutcomeCategory::Enemies => "⚔️",
            OutcomeCategory::Single => "🙋‍♀️",
        }
    }

    /// Theme colour name used by front ends
    pub fn color(self) -> &'static str {
        match self {
            OutcomeCategory::Friends => "blue",
            OutcomeCategory::Love => "red",
            OutcomeCategory::Affection => "pink",
            OutcomeCategory::Marriage => "purple",
            OutcomeCategory::Enemies => "orange",
            OutcomeCategory::Single => "gray",
        }
    }

    /// One-line description shown next to the letter
    pub fn tagline(self) -> &'static str {
        match self {
            OutcomeCategory::Friends => "Great friendship ahead!",
            OutcomeCategory::Love => "True love connection!",
            OutcomeCategory::Affection => "Sweet affection!",
            OutcomeCategory::Marriage => "Perfect life partner!",
            OutcomeCategory::Enemies => "Better stay apart!",
            OutcomeCategory::Single => "Focus on yourself!",
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutcomeCategory {
    type Err = crate::error::FlareupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let mut chars = wanted.chars();
        let single_letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_uppercase()),
            _ => None,
        };

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || single_letter == Some(c.letter()))
            .ok_or_else(|| crate::error::FlareupError::Other(format!("Unknown outcome: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let letters: String = OutcomeCategory::ALL.iter().map(|c| c.letter()).collect();
        assert_eq!(letters, "FLAMES");

        for (i, c) in OutcomeCategory::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
            assert_eq!(OutcomeCategory::from_index(i), Some(*c));
        }
        assert_eq!(OutcomeCategory::from_index(6), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("love".parse::<OutcomeCategory>().unwrap(), OutcomeCategory::Love);
        assert_eq!(" Enemies ".parse::<OutcomeCategory>().unwrap(), OutcomeCategory::Enemies);
        assert_eq!("m".parse::<OutcomeCategory>().unwrap(), OutcomeCategory::Marriage);
        assert!("soulmates".parse::<OutcomeCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&OutcomeCategory::Affection).unwrap();
        assert_eq!(json, "\"Affection\"");
    }
}
