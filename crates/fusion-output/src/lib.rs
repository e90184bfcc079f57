//! Spreadsheet log writing for the order-issue form.
//!
//! One `.xlsx` file, one sheet, a fixed eleven-column header, and data rows
//! in submission order. The submission boundary calls [`append_record`]
//! once per posted form; everything else here supports that call.

mod workbook;

pub use workbook::{SHEET_NAME, append_record, ensure_log, load_data_rows};
