use serde_json::{Map, Value};

use crate::utils::cell_text;

/// One row returned by `/vm-data`. Field order is whatever the backend sent.
pub type ServiceRecord = Map<String, Value>;

pub const TABLE_HEADERS: [&str; 6] = [
    "Template_id",
    "Hostname",
    "IP Address",
    "Status",
    "Deploy_method",
    "Created At",
];

/// Rendered form of a non-empty record list.
///
/// Cells are taken from each record's values in order; they are not matched
/// against `TABLE_HEADERS` by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn from_records(records: &[ServiceRecord]) -> Self {
        Self {
            headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: records
                .iter()
                .map(|record| record.values().map(cell_text).collect())
                .collect(),
        }
    }
}
