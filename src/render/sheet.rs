//! Full-sheet orchestration

use anyhow::Result;

use crate::config::RenderOptions;
use crate::model::ColumnMap;
use crate::record::Record;
use crate::sink::SheetSink;

use super::row::RowRenderer;

/// Outcome of a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderResult {
    /// Number of data rows written (header excluded)
    pub data_rows: usize,
    /// Number of columns written
    pub columns: usize,
    /// First physical row written, 1-based
    pub first_row: u32,
    /// Last physical row written; 0 when nothing was written
    pub last_row: u32,
}

/// Binds a column map and a record set to a sheet sink
///
/// A render pass writes the optional header row, then every record in order,
/// then issues per-column format and auto-size instructions. Passes are
/// deterministic: the same binder state renders the same instruction
/// sequence every time. The binder never mutates its records.
#[derive(Debug, Default)]
pub struct SheetBinder {
    columns: ColumnMap,
    records: Vec<Record>,
    options: RenderOptions,
}

impl SheetBinder {
    /// Create a binder over the given column map
    pub fn new(columns: ColumnMap) -> Self {
        Self {
            columns,
            records: Vec::new(),
            options: RenderOptions::default(),
        }
    }

    /// Set render options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the record set
    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    /// Column map in use
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// Mutable access to the column map, for per-key upserts
    pub fn columns_mut(&mut self) -> &mut ColumnMap {
        &mut self.columns
    }

    /// Replace all columns at once
    pub fn set_columns(&mut self, columns: ColumnMap) {
        self.columns = columns;
    }

    /// Append one record
    pub fn push_record(&mut self, record: impl Into<Record>) {
        self.records.push(record.into());
    }

    /// Replace the record set
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Records currently bound
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Render everything into the sink
    ///
    /// Row 1 is the header when enabled, otherwise the first data row.
    /// Format codes are applied over the data-row range only; the header
    /// keeps the sink's general format. The first sink failure aborts the
    /// pass and propagates unmodified.
    pub fn render(&self, sink: &mut dyn SheetSink) -> Result<RenderResult> {
        if let Some(title) = &self.options.title {
            sink.set_title(title)?;
        }

        let renderer = RowRenderer::new(&self.columns);

        let offset: u32 = if self.options.include_header {
            renderer.render_header(1, sink)?;
            2
        } else {
            1
        };

        let mut data_rows = 0usize;
        for record in &self.records {
            renderer.render_record(offset + data_rows as u32, record, sink)?;
            data_rows += 1;
        }

        for (position, column) in self.columns.iter().enumerate() {
            if let Some(format) = &column.format {
                sink.set_column_format(position, offset, offset + data_rows as u32, format)?;
            }
            if self.options.auto_size {
                sink.set_column_auto_size(position, true)?;
            }
        }

        let rows_written = (offset - 1) as usize + data_rows;
        Ok(RenderResult {
            data_rows,
            columns: self.columns.len(),
            first_row: 1,
            last_row: rows_written as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Coordinate};
    use crate::sink::{Cell, MemorySink};

    fn people_columns() -> ColumnMap {
        ColumnMap::from_pairs([("first_name", "First Name"), ("last_name", "Last Name")])
    }

    fn people_records() -> Vec<Record> {
        vec![
            Record::from_pairs([("first_name", "Martin"), ("last_name", "Hoover")]),
            Record::from_pairs([("first_name", "Anna"), ("last_name", "Lantz")]),
        ]
    }

    fn written(sink: &MemorySink) -> Vec<(Coordinate, Cell)> {
        sink.cells().map(|(c, cell)| (c, cell.clone())).collect()
    }

    #[test]
    fn test_exact_rectangle_without_header() {
        let binder = SheetBinder::new(people_columns()).with_records(people_records());
        let mut sink = MemorySink::new("Sheet1");
        let result = binder.render(&mut sink).unwrap();

        assert_eq!(result.data_rows, 2);
        assert_eq!(result.columns, 2);
        assert_eq!(result.first_row, 1);
        assert_eq!(result.last_row, 2);

        // M rows x N columns, rows 1..=2, columns 0..2
        assert_eq!(sink.cell_count(), 4);
        for row in 1..=2 {
            for column in 0..2 {
                assert!(sink.cell(Coordinate::new(column, row)).is_some());
            }
        }
    }

    #[test]
    fn test_header_shifts_data_down() {
        let columns = people_columns();
        let records = people_records();

        let mut plain = MemorySink::new("Sheet1");
        SheetBinder::new(columns.clone())
            .with_records(people_records())
            .render(&mut plain)
            .unwrap();

        let mut headed = MemorySink::new("Sheet1");
        let result = SheetBinder::new(columns)
            .with_records(records)
            .with_options(RenderOptions::new().with_header(true))
            .render(&mut headed)
            .unwrap();

        assert_eq!(result.data_rows, 2);
        assert_eq!(result.last_row, 3);
        // N extra header cells at row 1
        assert_eq!(headed.cell_count(), plain.cell_count() + 2);
        assert_eq!(
            headed.cell(Coordinate::new(0, 1)).unwrap().value,
            CellValue::String("First Name".into())
        );
        // Every data cell moved down one row
        for (coordinate, cell) in plain.cells() {
            let shifted = Coordinate::new(coordinate.column, coordinate.row + 1);
            assert_eq!(headed.cell(shifted), Some(cell));
        }
    }

    #[test]
    fn test_reference_sequence() {
        let binder = SheetBinder::new(people_columns())
            .with_records(vec![Record::from_pairs([
                ("first_name", "Martin"),
                ("last_name", "Hoover"),
            ])])
            .with_options(RenderOptions::new().with_header(true));
        let mut sink = MemorySink::new("Sheet1");
        binder.render(&mut sink).unwrap();

        let sequence: Vec<(Coordinate, CellValue)> = sink
            .cells()
            .map(|(c, cell)| (c, cell.value.clone()))
            .collect();
        assert_eq!(
            sequence,
            vec![
                (Coordinate::new(0, 1), CellValue::String("First Name".into())),
                (Coordinate::new(1, 1), CellValue::String("Last Name".into())),
                (Coordinate::new(0, 2), CellValue::String("Martin".into())),
                (Coordinate::new(1, 2), CellValue::String("Hoover".into())),
            ]
        );
    }

    #[test]
    fn test_format_scoped_to_data_rows() {
        let mut columns = ColumnMap::from_pairs([("name", "Name"), ("amount", "Amount")]);
        columns.set_format("amount", "#,##0.00");

        let binder = SheetBinder::new(columns)
            .with_records(vec![
                Record::from_pairs([("name", "a"), ("amount", "1")]),
                Record::from_pairs([("name", "b"), ("amount", "2")]),
                Record::from_pairs([("name", "c"), ("amount", "3")]),
            ])
            .with_options(RenderOptions::new().with_header(true));
        let mut sink = MemorySink::new("Sheet1");
        binder.render(&mut sink).unwrap();

        // One application, for the one formatted column, starting below the
        // header
        assert_eq!(sink.formats().len(), 1);
        let format = &sink.formats()[0];
        assert_eq!(format.column, 1);
        assert_eq!(format.first_row, 2);
        assert_eq!(format.last_row, 5);
        assert_eq!(format.format_code, "#,##0.00");
    }

    #[test]
    fn test_auto_size_marks_every_column() {
        let binder = SheetBinder::new(people_columns())
            .with_records(people_records())
            .with_options(RenderOptions::new().with_auto_size(true));
        let mut sink = MemorySink::new("Sheet1");
        binder.render(&mut sink).unwrap();

        assert_eq!(sink.auto_sized_columns(), vec![0, 1]);
    }

    #[test]
    fn test_title_applied_before_rendering() {
        let binder = SheetBinder::new(people_columns())
            .with_options(RenderOptions::new().with_title("People"));
        let mut sink = MemorySink::new("Sheet1");
        binder.render(&mut sink).unwrap();

        assert_eq!(sink.title(), "People");
    }

    #[test]
    fn test_render_is_deterministic() {
        let binder = SheetBinder::new(people_columns())
            .with_records(people_records())
            .with_options(RenderOptions::new().with_header(true).with_auto_size(true));

        let mut first = MemorySink::new("Sheet1");
        let mut second = MemorySink::new("Sheet1");
        let a = binder.render(&mut first).unwrap();
        let b = binder.render(&mut second).unwrap();

        assert_eq!(a, b);
        assert_eq!(written(&first), written(&second));
        assert_eq!(first.formats(), second.formats());
    }

    #[test]
    fn test_mixed_record_shapes() {
        let binder = SheetBinder::new(people_columns()).with_records(vec![
            Record::from(vec!["Martin", "Hoover"]),
            Record::from_pairs([("last_name", "Lantz"), ("first_name", "Anna")]),
        ]);
        let mut sink = MemorySink::new("Sheet1");
        binder.render(&mut sink).unwrap();

        // Positional row follows column order, keyed row follows keys
        assert_eq!(
            sink.cell(Coordinate::new(0, 1)).unwrap().value,
            CellValue::String("Martin".into())
        );
        assert_eq!(
            sink.cell(Coordinate::new(0, 2)).unwrap().value,
            CellValue::String("Anna".into())
        );
    }

    #[test]
    fn test_empty_record_set() {
        let binder = SheetBinder::new(people_columns());
        let mut sink = MemorySink::new("Sheet1");
        let result = binder.render(&mut sink).unwrap();

        assert_eq!(result.data_rows, 0);
        assert_eq!(result.last_row, 0);
        assert_eq!(sink.cell_count(), 0);
    }

    #[test]
    fn test_invalid_title_aborts_pass() {
        let binder = SheetBinder::new(people_columns())
            .with_records(people_records())
            .with_options(RenderOptions::new().with_title("bad/title"));
        let mut sink = MemorySink::new("Sheet1");

        assert!(binder.render(&mut sink).is_err());
        // Nothing was written before the failure
        assert_eq!(sink.cell_count(), 0);
    }
}
