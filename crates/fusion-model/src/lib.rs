//! Domain types for the order-issue log.
//!
//! This crate holds the shared vocabulary of the system:
//! - [`Record`]: one logged issue in the fixed eleven-field shape
//! - [`Submission`]: the raw form payload the web boundary posts
//! - [`schema`]: the log's column names and display widths
//! - [`AppConfig`]: explicit configuration for both components
//!
//! # Example
//!
//! ```
//! use chrono::Local;
//! use fusion_model::{Record, Submission};
//!
//! let submission = Submission {
//!     os_number: "OS-1042".to_string(),
//!     category: "B - broken seal".to_string(),
//!     ..Submission::default()
//! };
//! let record = Record::from_submission(&submission, "jdupont", "Lyon", Local::now());
//!
//! assert_eq!(record.cause, "B");
//! assert_eq!(record.description, "broken seal");
//! assert_eq!(record.to_row().len(), 11);
//! ```

mod config;
mod record;
pub mod schema;

pub use config::{AppConfig, DEFAULT_LOG_FILE};
pub use record::{Record, Submission, TIMESTAMP_FORMAT, split_category};
