//! Fixed column schema of the issue log spreadsheet.

/// Column headers of the log, in write order.
///
/// The headers are the literal French strings the log has always carried;
/// downstream reporting matches on them byte-for-byte.
pub const COLUMNS: [&str; 11] = [
    "HORODATAGE",
    "QUI",
    "N° OS",
    "CREATEUR",
    "N° COMMANDE",
    "CLIENT",
    "FLUX",
    "SOUS-TRAITANT",
    "CAUSE",
    "DESCRIPTIF",
    "SITE",
];

/// Number of columns in the log.
pub const COLUMN_COUNT: usize = COLUMNS.len();

/// Minimum display width of a column, in characters.
pub const MIN_COLUMN_WIDTH: usize = 15;

/// Extra display width added beyond the header text.
pub const COLUMN_PADDING: usize = 5;

/// Display width for a column, derived from its header text.
///
/// Widths are cosmetic and recomputed on every append; they are not part of
/// the data contract.
pub fn column_width(header: &str) -> f64 {
    (header.chars().count() + COLUMN_PADDING).max(MIN_COLUMN_WIDTH) as f64
}
