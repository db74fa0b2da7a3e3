//! Row and sheet rendering

mod row;
mod sheet;

pub use row::RowRenderer;
pub use sheet::{RenderResult, SheetBinder};
