use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::subscription::Subscription;

/// Version string written into export payloads.
pub const EXPORT_VERSION: &str = "1.0.0";

/// The backup file shape the app exports and imports.
///
/// camelCase on the wire so backups from the original app round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub version: String,
    pub export_date: DateTime<Utc>,
    pub subscriptions: Vec<Subscription>,
    pub total_count: usize,
}

impl ExportPayload {
    pub fn new(subscriptions: Vec<Subscription>, export_date: DateTime<Utc>) -> Self {
        let total_count = subscriptions.len();
        Self {
            version: EXPORT_VERSION.to_string(),
            export_date,
            subscriptions,
            total_count,
        }
    }
}

/// Serialize the collection into a backup payload.
pub fn export_to_json(
    subscriptions: &[Subscription],
    export_date: DateTime<Utc>,
) -> Result<String, CoreError> {
    let payload = ExportPayload::new(subscriptions.to_vec(), export_date);
    serde_json::to_string_pretty(&payload)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize export: {e}")))
}

/// What import actually requires of a backup: an object with a
/// `subscriptions` array. Version and count metadata are informational
/// and tolerated when absent, so hand-edited or older backups load.
#[derive(Deserialize)]
struct ImportPayload {
    subscriptions: Vec<Subscription>,
}

/// Parse and validate a backup payload. All-or-nothing: a payload that
/// fails any check is rejected wholesale and no record from it is ever
/// visible to the collection.
///
/// Checks: the payload must parse (which requires id, name, and price on
/// every record and `subscriptions` to be an array), names must be
/// non-empty, and ids must be unique.
pub fn import_from_json(json: &str) -> Result<Vec<Subscription>, CoreError> {
    let payload: ImportPayload = serde_json::from_str(json)
        .map_err(|e| CoreError::InvalidImport(format!("Malformed backup file: {e}")))?;

    let mut seen = HashSet::new();
    for sub in &payload.subscriptions {
        if sub.name.trim().is_empty() {
            return Err(CoreError::InvalidImport(format!(
                "Record {} has an empty name",
                sub.id
            )));
        }
        if !seen.insert(sub.id) {
            return Err(CoreError::InvalidImport(format!(
                "Duplicate subscription id: {}",
                sub.id
            )));
        }
    }

    Ok(payload.subscriptions)
}
