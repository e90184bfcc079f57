//! Submitted records and the form payload they are built from.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::schema::COLUMN_COUNT;

/// Timestamp format written into the HORODATAGE column.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One form submission, as posted by the web boundary.
///
/// Field names match the form inputs exactly; the payload deserializes
/// straight from the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    /// Order/service number.
    pub os_number: String,
    /// Who created the order.
    pub creator: String,
    /// Purchase-order number.
    pub po_number: String,
    /// Client the order belongs to.
    pub client: String,
    /// Flow type.
    pub flux: String,
    /// Subcontractor involved.
    pub contractor: String,
    /// Combined issue category, `"<cause> - <description>"`.
    pub category: String,
}

/// One logged issue, in the fixed eleven-field shape of the log.
///
/// Records are constructed once per submission and appended immutably;
/// nothing in this system updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Submission timestamp, formatted with [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    /// Login of the submitting operator, recorded verbatim.
    pub operator: String,
    /// Order/service number.
    pub order_number: String,
    /// Who created the order.
    pub creator: String,
    /// Purchase-order number.
    pub po_number: String,
    /// Client the order belongs to.
    pub client: String,
    /// Flow type.
    pub flow: String,
    /// Subcontractor involved.
    pub subcontractor: String,
    /// Issue cause (text before the first hyphen of the category).
    pub cause: String,
    /// Issue description (text after the first hyphen of the category).
    pub description: String,
    /// Site the log belongs to.
    pub site: String,
}

impl Record {
    /// Builds a record from a form submission.
    ///
    /// The operator login and site come from the caller; no authentication
    /// is performed. The category field is split into cause and description
    /// with [`split_category`].
    pub fn from_submission(
        submission: &Submission,
        operator: &str,
        site: &str,
        now: DateTime<Local>,
    ) -> Self {
        let (cause, description) = split_category(&submission.category);
        Self {
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            operator: operator.to_string(),
            order_number: submission.os_number.clone(),
            creator: submission.creator.clone(),
            po_number: submission.po_number.clone(),
            client: submission.client.clone(),
            flow: submission.flux.clone(),
            subcontractor: submission.contractor.clone(),
            cause,
            description,
            site: site.to_string(),
        }
    }

    /// Returns the record's fields in column order.
    pub fn to_row(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.timestamp,
            &self.operator,
            &self.order_number,
            &self.creator,
            &self.po_number,
            &self.client,
            &self.flow,
            &self.subcontractor,
            &self.cause,
            &self.description,
            &self.site,
        ]
    }
}

/// Splits a combined category into `(cause, description)`.
///
/// The split is on the first hyphen; both halves are trimmed. A category
/// without a hyphen is all cause and no description.
pub fn split_category(category: &str) -> (String, String) {
    match category.split_once('-') {
        Some((cause, description)) => (cause.trim().to_string(), description.trim().to_string()),
        None => (category.trim().to_string(), String::new()),
    }
}
