//! XLSX output: a single worksheet with a bold header row and numeric cells.

use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use super::ExportError;
use crate::types::{Dataset, COLUMN_NAMES};

/// Write `dataset` as a one-sheet workbook to `path`, replacing any existing file.
pub fn write_xlsx(dataset: &Dataset, path: &Path, sheet_name: &str) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, name) in (0u16..).zip(COLUMN_NAMES) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }

    for (row, record) in (1u32..).zip(dataset) {
        for (col, value) in (0u16..).zip(record.values()) {
            sheet.write_number(row, col, value)?;
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    workbook.save(path)?;
    Ok(())
}
