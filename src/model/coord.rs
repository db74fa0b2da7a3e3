//! Cell coordinates and A1-style addressing

use serde::{Deserialize, Serialize};

/// Position of a single cell
///
/// Columns are zero-based internally; rows are 1-based to match spreadsheet
/// conventions. Translation to letter-based column names happens only at the
/// sink boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column index, zero-based
    pub column: usize,
    /// Row index, 1-based
    pub row: u32,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(column: usize, row: u32) -> Self {
        Self { column, row }
    }

    /// A1-style address for this coordinate, e.g. `(1, 2)` -> `"B2"`
    pub fn to_a1(self) -> String {
        format!("{}{}", column_letter(self.column), self.row)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

/// Letter name for a zero-based column index: 0 -> "A", 25 -> "Z", 26 -> "AA"
pub fn column_letter(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        index /= 26;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    letters.reverse();
    // Only ASCII uppercase bytes are pushed
    String::from_utf8(letters).unwrap()
}
