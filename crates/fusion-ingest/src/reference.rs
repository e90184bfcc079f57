//! Loading of reference list files.
//!
//! Each reference file is a plain-text list, one entry per line, living in a
//! shared directory. Files are read fresh on every call so edits made on the
//! share show up on the next request without a restart.

use std::collections::BTreeMap;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{ReferenceError, Result};

/// A reference file to load: a logical key and its file name under the
/// base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFile {
    /// Logical key the loaded list is filed under (e.g. `"clients"`).
    pub key: String,
    /// File name, relative to the base directory.
    pub file_name: String,
}

impl ReferenceFile {
    /// Creates a reference file entry.
    pub fn new(key: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            file_name: file_name.into(),
        }
    }
}

/// The standard set of four reference files the form is built from.
pub fn standard_files() -> Vec<ReferenceFile> {
    vec![
        ReferenceFile::new("clients", "clients.txt"),
        ReferenceFile::new("creators", "createurs.txt"),
        ReferenceFile::new("subcontractors", "sous_traitants.txt"),
        ReferenceFile::new("categories", "categories.txt"),
    ]
}

/// Outcome of one loading pass over the reference directory.
///
/// Loading never fails outright: unavailable directories and unreadable
/// files are reported here as data, for the caller to render.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// Whether the base directory existed at all.
    pub available: bool,
    /// Human-readable problems found during the pass, in file order.
    pub diagnostics: Vec<String>,
    /// Loaded lists, keyed by the logical key of each reference file.
    pub lists: BTreeMap<String, Vec<String>>,
}

impl ReferenceData {
    /// Returns the list for a key, empty if the key is unknown.
    pub fn list(&self, key: &str) -> &[String] {
        self.lists.get(key).map_or(&[], Vec::as_slice)
    }

    /// True when the directory was reachable and every list loaded non-empty.
    pub fn is_complete(&self) -> bool {
        self.available && self.diagnostics.is_empty()
    }
}

/// Reads a reference file as a trimmed, blank-free list of lines.
///
/// The file is decoded as UTF-8 first; files saved by legacy Windows tools
/// fall back to WINDOWS-1252. Line order is preserved.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReferenceError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReferenceError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let text = match std::str::from_utf8(&bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::warn!(
                path = %path.display(),
                "reference file is not UTF-8, decoding as WINDOWS-1252"
            );
            let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    };

    // Skip BOM if present
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Loads every reference file under `base_dir`.
///
/// - A missing base directory yields `available = false`, one diagnostic
///   naming the directory, and an empty list for every key.
/// - A missing file yields an empty list and a `file missing or empty`
///   diagnostic; other files are still loaded.
/// - A file that exists but cannot be read yields an empty list and a
///   distinct `unreadable file` diagnostic carrying the cause.
pub fn load_reference_lists(base_dir: &Path, files: &[ReferenceFile]) -> ReferenceData {
    let mut data = ReferenceData {
        available: base_dir.is_dir(),
        ..ReferenceData::default()
    };
    for file in files {
        data.lists.insert(file.key.clone(), Vec::new());
    }

    if !data.available {
        tracing::warn!(path = %base_dir.display(), "reference directory unavailable");
        data.diagnostics
            .push(format!("reference directory unavailable: {}", base_dir.display()));
        return data;
    }

    for file in files {
        let path = base_dir.join(&file.file_name);
        match read_lines(&path) {
            Ok(lines) => {
                if lines.is_empty() {
                    data.diagnostics
                        .push(format!("file missing or empty: {}", file.file_name));
                }
                data.lists.insert(file.key.clone(), lines);
            }
            Err(ReferenceError::FileNotFound { .. }) => {
                data.diagnostics
                    .push(format!("file missing or empty: {}", file.file_name));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "reference file unreadable");
                data.diagnostics
                    .push(format!("unreadable file: {} ({err})", file.file_name));
            }
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_reference_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("clients.txt"), "ACME\nGlobex\nInitech\n").unwrap();
        std::fs::write(dir.path().join("createurs.txt"), "M. Martin\nMme Durand\n").unwrap();
        std::fs::write(dir.path().join("sous_traitants.txt"), "TransExpress\n").unwrap();
        std::fs::write(
            dir.path().join("categories.txt"),
            "A - late delivery\nB - broken seal\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn loads_all_lists_in_file_order() {
        let dir = create_reference_dir();
        let data = load_reference_lists(dir.path(), &standard_files());

        assert!(data.available);
        assert!(data.diagnostics.is_empty());
        assert!(data.is_complete());
        assert_eq!(data.list("clients"), ["ACME", "Globex", "Initech"]);
        assert_eq!(data.list("creators"), ["M. Martin", "Mme Durand"]);
        assert_eq!(data.list("subcontractors"), ["TransExpress"]);
        assert_eq!(
            data.list("categories"),
            ["A - late delivery", "B - broken seal"]
        );
    }

    #[test]
    fn trims_lines_and_drops_blanks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clients.txt");
        std::fs::write(&path, "  ACME  \n\n   \nGlobex\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["ACME", "Globex"]);
    }

    #[test]
    fn missing_file_yields_one_diagnostic_and_leaves_others_alone() {
        let dir = create_reference_dir();
        std::fs::remove_file(dir.path().join("sous_traitants.txt")).unwrap();

        let data = load_reference_lists(dir.path(), &standard_files());

        assert!(data.available);
        assert_eq!(data.diagnostics.len(), 1);
        assert_eq!(data.diagnostics[0], "file missing or empty: sous_traitants.txt");
        assert!(data.list("subcontractors").is_empty());
        assert_eq!(data.list("clients").len(), 3);
        assert_eq!(data.list("categories").len(), 2);
    }

    #[test]
    fn empty_file_is_reported_like_a_missing_one() {
        let dir = create_reference_dir();
        std::fs::write(dir.path().join("createurs.txt"), "\n  \n").unwrap();

        let data = load_reference_lists(dir.path(), &standard_files());
        assert_eq!(
            data.diagnostics,
            ["file missing or empty: createurs.txt"]
        );
        assert!(data.list("creators").is_empty());
    }

    #[test]
    fn missing_directory_yields_unavailable_and_empty_lists() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("partage");

        let data = load_reference_lists(&gone, &standard_files());

        assert!(!data.available);
        assert!(!data.is_complete());
        assert_eq!(data.diagnostics.len(), 1);
        assert!(data.diagnostics[0].contains("partage"));
        for file in standard_files() {
            assert!(data.list(&file.key).is_empty());
        }
    }

    #[test]
    fn windows_1252_file_loads_through_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("createurs.txt");
        // "Mme Géraldine" with 0xE9 for the é, as legacy tools save it
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"Mme G\xE9raldine\n").unwrap();
        drop(file);

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["Mme Géraldine"]);
    }

    #[test]
    fn utf8_bom_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clients.txt");
        std::fs::write(&path, "\u{feff}ACME\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["ACME"]);
    }

    #[test]
    fn unreadable_file_gets_a_distinct_diagnostic() {
        let dir = create_reference_dir();
        // A directory in place of the file makes the read fail with
        // something other than NotFound.
        std::fs::remove_file(dir.path().join("clients.txt")).unwrap();
        std::fs::create_dir(dir.path().join("clients.txt")).unwrap();

        let data = load_reference_lists(dir.path(), &standard_files());

        assert_eq!(data.diagnostics.len(), 1);
        assert!(data.diagnostics[0].starts_with("unreadable file: clients.txt"));
        assert!(data.list("clients").is_empty());
    }
}
