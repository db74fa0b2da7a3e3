//! sheetbind - Bind data records to spreadsheet cells
//!
//! Takes an ordered column map and a sequence of records of mixed shape
//! (positional, keyed, or accessor-bearing entities), resolves each cell's
//! value, type tag, and number format, and writes the result through a
//! pluggable [`sink::SheetSink`].

pub mod config;
pub mod error;
pub mod model;
pub mod record;
pub mod render;
pub mod sink;

pub use config::RenderOptions;
pub use model::{CellDataType, CellValue, ColumnMap, Coordinate, TypeHint};
pub use record::{Entity, Record};
pub use render::{RenderResult, SheetBinder};
pub use sink::SheetSink;
