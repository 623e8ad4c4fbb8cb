//! Score-to-letter-grade classification.

use serde::Serialize;
use std::fmt;

/// Letter grade, ordered from best (`A`) to worst (`E`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

/// Inclusive lower bounds, checked top-down. Anything below the last entry is `E`.
const THRESHOLDS: [(i64, Grade); 4] = [
    (90, Grade::A),
    (80, Grade::B),
    (70, Grade::C),
    (60, Grade::D),
];

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a numeric score into a letter grade.
///
/// | Range       | Grade |
/// |-------------|-------|
/// | >= 90       | A     |
/// | >= 80       | B     |
/// | >= 70       | C     |
/// | >= 60       | D     |
/// | < 60        | E     |
///
/// Every integer maps to exactly one grade, negative scores included.
pub fn grade_of(score: i64) -> Grade {
    THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map_or(Grade::E, |(_, grade)| *grade)
}
