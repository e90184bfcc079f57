//! Reference data loading for the order-issue form.
//!
//! The form's dropdowns (clients, creators, subcontractors, issue
//! categories) come from plain-text files on a shared directory. This crate
//! checks that the directory and files are reachable and loads each file as
//! an ordered list of trimmed, non-empty lines, with a diagnostic per
//! missing or unreadable file.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use fusion_ingest::{load_reference_lists, standard_files};
//!
//! let data = load_reference_lists(Path::new("/partage/fusion"), &standard_files());
//! if !data.available {
//!     // render the directory-unavailable page
//! }
//! let clients = data.list("clients");
//! ```

mod error;
mod reference;

// === Error Types ===
pub use error::{ReferenceError, Result};

// === Reference Loading ===
pub use reference::{
    ReferenceData, ReferenceFile, load_reference_lists, read_lines, standard_files,
};
