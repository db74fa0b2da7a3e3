//! Core data model: cell values, columns, coordinates

mod column;
mod coord;
mod value;

pub use column::{Column, ColumnMap};
pub use coord::{column_letter, Coordinate};
pub use value::{CellDataType, CellValue, TypeHint};
