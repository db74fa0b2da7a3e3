//! In-memory reference sink

use anyhow::Result;
use indexmap::IndexMap;

use crate::error::SinkError;
use crate::model::{CellDataType, CellValue, Coordinate};

use super::SheetSink;

/// Characters a sheet title may not contain
const TITLE_FORBIDDEN: &[char] = &['\\', '/', '?', '*', '[', ']', ':'];

/// Longest title most spreadsheet formats accept
const TITLE_MAX_LEN: usize = 31;

/// One written cell: the value and the tag it was written with
///
/// `data_type` is `None` for untyped writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub data_type: Option<CellDataType>,
}

/// One format application issued against a column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFormat {
    pub column: usize,
    pub first_row: u32,
    pub last_row: u32,
    pub format_code: String,
}

/// Sink that keeps everything it is told in memory
///
/// Cells are stored in write order, which makes the sink double as a
/// recorder of the exact instruction sequence a render produced. It enforces
/// a small fault model of its own: 1-based rows, ordered format ranges, and
/// spreadsheet title rules.
#[derive(Debug, Default)]
pub struct MemorySink {
    title: String,
    cells: IndexMap<Coordinate, Cell>,
    formats: Vec<ColumnFormat>,
    auto_sized: IndexMap<usize, bool>,
}

impl MemorySink {
    /// Create a standalone sink with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Cell written at a coordinate, if any
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells.get(&coordinate)
    }

    /// All written cells, in write order
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        self.cells.iter().map(|(c, cell)| (*c, cell))
    }

    /// Number of written cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Format applications, in issue order
    pub fn formats(&self) -> &[ColumnFormat] {
        &self.formats
    }

    /// Columns marked for automatic width sizing
    pub fn auto_sized_columns(&self) -> Vec<usize> {
        self.auto_sized
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(col, _)| *col)
            .collect()
    }

    fn check_coordinate(coordinate: Coordinate) -> Result<(), SinkError> {
        if coordinate.row == 0 {
            return Err(SinkError::InvalidCoordinate(coordinate));
        }
        Ok(())
    }

    fn check_title(title: &str) -> Result<(), SinkError> {
        if title.is_empty() {
            return Err(SinkError::InvalidTitle {
                title: title.to_string(),
                reason: "title is empty",
            });
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(SinkError::InvalidTitle {
                title: title.to_string(),
                reason: "title exceeds 31 characters",
            });
        }
        if title.contains(TITLE_FORBIDDEN) {
            return Err(SinkError::InvalidTitle {
                title: title.to_string(),
                reason: "title contains a forbidden character",
            });
        }
        Ok(())
    }
}

impl SheetSink for MemorySink {
    fn set_cell_value(&mut self, coordinate: Coordinate, value: CellValue) -> Result<()> {
        Self::check_coordinate(coordinate)?;
        self.cells.insert(
            coordinate,
            Cell {
                value,
                data_type: None,
            },
        );
        Ok(())
    }

    fn set_cell_value_typed(
        &mut self,
        coordinate: Coordinate,
        value: CellValue,
        data_type: CellDataType,
    ) -> Result<()> {
        Self::check_coordinate(coordinate)?;
        self.cells.insert(
            coordinate,
            Cell {
                value,
                data_type: Some(data_type),
            },
        );
        Ok(())
    }

    fn set_column_format(
        &mut self,
        column: usize,
        first_row: u32,
        last_row: u32,
        format_code: &str,
    ) -> Result<()> {
        if first_row == 0 || last_row < first_row {
            return Err(SinkError::InvalidRange {
                column,
                first_row,
                last_row,
            }
            .into());
        }
        self.formats.push(ColumnFormat {
            column,
            first_row,
            last_row,
            format_code: format_code.to_string(),
        });
        Ok(())
    }

    fn set_column_auto_size(&mut self, column: usize, enabled: bool) -> Result<()> {
        self.auto_sized.insert(column, enabled);
        Ok(())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        Self::check_title(title)?;
        self.title = title.to_string();
        Ok(())
    }
}

/// Minimal parent document for [`MemorySink`] sheets
///
/// New logical sheets are registered against the document as they are
/// created, mirroring how a workbook collaborator hands out sheet handles.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    sheets: Vec<MemorySink>,
}

impl MemoryDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new sheet and return a handle to it
    pub fn add_sheet(&mut self, title: impl Into<String>) -> Result<&mut MemorySink> {
        let title = title.into();
        MemorySink::check_title(&title)?;
        self.sheets.push(MemorySink::new(title));
        // Just pushed, cannot be empty
        Ok(self.sheets.last_mut().unwrap())
    }

    /// Sheet by title
    pub fn sheet(&self, title: &str) -> Option<&MemorySink> {
        self.sheets.iter().find(|s| s.title == title)
    }

    /// All registered sheets, in registration order
    pub fn sheets(&self) -> &[MemorySink] {
        &self.sheets
    }
}
