//! The sink boundary: where cell writes leave this crate

mod memory;

use anyhow::Result;

use crate::model::{CellDataType, CellValue, Coordinate};

pub use memory::{Cell, ColumnFormat, MemoryDocument, MemorySink};

/// Write-side capability set of a spreadsheet surface
///
/// This is the sole external dependency of the binder. Implementations own
/// coordinate resolution, storage, and their own fault model; any error they
/// return aborts the render pass and reaches the caller unmodified.
pub trait SheetSink {
    /// Write a value with no explicit type tag
    fn set_cell_value(&mut self, coordinate: Coordinate, value: CellValue) -> Result<()>;

    /// Write a value tagged with an explicit data type
    fn set_cell_value_typed(
        &mut self,
        coordinate: Coordinate,
        value: CellValue,
        data_type: CellDataType,
    ) -> Result<()>;

    /// Apply a number format code to one column over an inclusive row range
    fn set_column_format(
        &mut self,
        column: usize,
        first_row: u32,
        last_row: u32,
        format_code: &str,
    ) -> Result<()>;

    /// Mark one column for automatic width sizing
    fn set_column_auto_size(&mut self, column: usize, enabled: bool) -> Result<()>;

    /// Logical sheet name
    fn title(&self) -> &str;

    /// Rename the logical sheet
    fn set_title(&mut self, title: &str) -> Result<()>;
}
