//! Rendering of a single logical row

use anyhow::Result;

use crate::model::{CellDataType, ColumnMap, Coordinate, TypeHint};
use crate::record::Record;
use crate::sink::SheetSink;

/// Renders one row — header or data — against a sink
///
/// Emits exactly one write per column, in column order. Columns absent from
/// the map produce nothing; values absent from the record produce a null
/// write, not an error.
pub struct RowRenderer<'a> {
    columns: &'a ColumnMap,
}

impl<'a> RowRenderer<'a> {
    /// Create a renderer over the given column map
    pub fn new(columns: &'a ColumnMap) -> Self {
        Self { columns }
    }

    /// Write the header row: each column's label, always string-tagged
    ///
    /// Declared column types apply to data only, so even an `Untyped` column
    /// gets a tagged header cell.
    pub fn render_header(&self, row: u32, sink: &mut dyn SheetSink) -> Result<()> {
        for (position, column) in self.columns.iter().enumerate() {
            sink.set_cell_value_typed(
                Coordinate::new(position, row),
                column.label.into(),
                CellDataType::String,
            )?;
        }
        Ok(())
    }

    /// Write one data row extracted from `record`
    pub fn render_record(
        &self,
        row: u32,
        record: &Record,
        sink: &mut dyn SheetSink,
    ) -> Result<()> {
        for (position, column) in self.columns.iter().enumerate() {
            let coordinate = Coordinate::new(position, row);
            let value = record.value(&column.key, position);
            match column.effective_type() {
                TypeHint::Typed(data_type) => {
                    sink.set_cell_value_typed(coordinate, value, data_type)?;
                }
                TypeHint::Untyped => {
                    sink.set_cell_value(coordinate, value)?;
                }
            }
        }
        Ok(())
    }
}
