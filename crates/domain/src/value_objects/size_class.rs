//! Size classes and the keyword table used to read them from free text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Length in meters from which a dinosaur counts as large.
pub const LARGE: u32 = 10;

/// Length in meters from which a dinosaur counts as huge.
pub const HUGE: u32 = 30;

/// Upper bound of the huge size class.
const MAX_LENGTH: u32 = 100;

/// Smallest length a grown dinosaur can have.
const MIN_LENGTH: u32 = 1;

/// Size class of a dinosaur, each mapping to an inclusive length range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Anything not described as large or huge
    #[default]
    Small,
    Large,
    Huge,
}

impl SizeClass {
    /// All size classes, in the order used for random selection.
    pub fn all() -> &'static [SizeClass] {
        &[SizeClass::Small, SizeClass::Large, SizeClass::Huge]
    }

    /// Inclusive range of lengths (meters) a dinosaur of this class is grown with.
    pub fn length_range(&self) -> RangeInclusive<u32> {
        match self {
            SizeClass::Small => MIN_LENGTH..=LARGE - 1,
            SizeClass::Large => LARGE..=HUGE - 1,
            SizeClass::Huge => HUGE..=MAX_LENGTH,
        }
    }

    /// Matches a single specification token against the keyword table.
    ///
    /// Matching is case-insensitive and exact: "large," with trailing
    /// punctuation is not a keyword.
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "huge" | "omg" | "😱" => Some(SizeClass::Huge),
            "large" => Some(SizeClass::Large),
            _ => None,
        }
    }

    /// Reads the size class from a free-text specification.
    ///
    /// Tokens are scanned in order and the first keyword wins. Text without
    /// any keyword falls back to [`SizeClass::Small`]; this never fails.
    pub fn from_specification(specification: &str) -> Self {
        specification
            .split_whitespace()
            .find_map(Self::from_keyword)
            .unwrap_or_default()
    }

    /// The word used for this class inside a free-text specification.
    pub fn specification_word(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Large => "large",
            SizeClass::Huge => "huge",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.specification_word())
    }
}
