use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named scoring rule applied to a dice roll.
///
/// Serialized as its stable SCREAMING_SNAKE_CASE identifier (`"FULL_HOUSE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Sevens,
    Eights,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    AllDifferent,
    LargeStraight,
    Schooner,
    Chance,
}

impl Category {
    /// Number of categories on a score card.
    pub const COUNT: usize = 16;

    /// Every category, in score card order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Sevens,
        Category::Eights,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::AllDifferent,
        Category::LargeStraight,
        Category::Schooner,
        Category::Chance,
    ];

    /// The count this category keys on: the face value for Ones..Eights, the
    /// required multiple for ThreeOfAKind/FourOfAKind.
    pub fn kind(self) -> Option<u32> {
        match self {
            Self::Ones => Some(1),
            Self::Twos => Some(2),
            Self::Threes | Self::ThreeOfAKind => Some(3),
            Self::Fours | Self::FourOfAKind => Some(4),
            Self::Fives => Some(5),
            Self::Sixes => Some(6),
            Self::Sevens => Some(7),
            Self::Eights => Some(8),
            Self::FullHouse
            | Self::SmallStraight
            | Self::AllDifferent
            | Self::LargeStraight
            | Self::Schooner
            | Self::Chance => None,
        }
    }

    /// Stable identifier, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ones => "ONES",
            Self::Twos => "TWOS",
            Self::Threes => "THREES",
            Self::Fours => "FOURS",
            Self::Fives => "FIVES",
            Self::Sixes => "SIXES",
            Self::Sevens => "SEVENS",
            Self::Eights => "EIGHTS",
            Self::ThreeOfAKind => "THREE_OF_A_KIND",
            Self::FourOfAKind => "FOUR_OF_A_KIND",
            Self::FullHouse => "FULL_HOUSE",
            Self::SmallStraight => "SMALL_STRAIGHT",
            Self::AllDifferent => "ALL_DIFFERENT",
            Self::LargeStraight => "LARGE_STRAIGHT",
            Self::Schooner => "SCHOONER",
            Self::Chance => "CHANCE",
        }
    }

    /// Position of this category on a score card.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Returned when a string is not a known category identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl std::fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category: {:?}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}
