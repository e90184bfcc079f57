//! Create-or-append on the spreadsheet log.
//!
//! The log is small (a handful of rows a day), so appending rereads the
//! whole workbook and writes it back rather than patching the file in
//! place. The rewrite goes through a sibling temporary file and a rename,
//! so a failed save never leaves a truncated log behind. There is no
//! inter-process locking: concurrent appenders race and the last save wins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{Data, Reader, open_workbook_auto};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};

use fusion_model::Record;
use fusion_model::schema::{COLUMN_COUNT, COLUMNS, column_width};

/// Name of the single sheet in the log.
pub const SHEET_NAME: &str = "Litiges";

/// Appends one record to the log at `path`.
///
/// If the file does not exist it is created with the formatted header row
/// before the record. Existing data rows are preserved in order; the new
/// record always lands last. Column widths are recomputed on every append.
pub fn append_record(path: &Path, record: &Record) -> Result<()> {
    let existing = if path.exists() {
        load_data_rows(path)?
    } else {
        tracing::info!(path = %path.display(), "log does not exist yet, creating it");
        Vec::new()
    };

    write_log(path, &existing, Some(record))?;
    tracing::debug!(path = %path.display(), rows = existing.len() + 1, "record appended");
    Ok(())
}

/// Creates the log with only its header row if it does not exist yet.
pub fn ensure_log(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    write_log(path, &[], None)
}

/// Loads the data rows (everything after the header) of an existing log.
pub fn load_data_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("open log workbook {}", path.display()))?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        tracing::warn!(path = %path.display(), "log workbook has no sheet, treating as empty");
        return Ok(Vec::new());
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("read sheet '{sheet_name}' of {}", path.display()))?;

    Ok(range
        .rows()
        .skip(1) // header row
        .map(|row| row.iter().take(COLUMN_COUNT).map(cell_text).collect())
        .collect())
}

fn write_log(path: &Path, rows: &[Vec<String>], record: Option<&Record>) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, column_width(header))?;
    }

    let mut row_index: u32 = 1;
    for row in rows {
        for (col, cell) in row.iter().take(COLUMN_COUNT).enumerate() {
            worksheet.write_string(row_index, col as u16, cell)?;
        }
        row_index += 1;
    }

    if let Some(record) = record {
        for (col, cell) in record.to_row().iter().enumerate() {
            worksheet.write_string(row_index, col as u16, *cell)?;
        }
    }

    // Whole-file rewrite, made atomic through a sibling temp file.
    let tmp = temp_sibling(path);
    workbook
        .save(&tmp)
        .with_context(|| format!("write log workbook {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("replace log workbook {}", path.display()))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| "log".into(), |n| n.to_os_string());
    name.push(".tmp");
    path.with_file_name(name)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{e:?}"),
        other => other.to_string(),
    }
}
