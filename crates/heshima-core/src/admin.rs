//! # Admin Inquiry List
//!
//! State and rendering for the authenticated list of submitted inquiries.
//!
//! ```text
//! Idle ──begin()──► Loading ──apply(Ok)──► Loaded(records, API order)
//!                      └─────apply(Err)──► Error("Could not load inquiries.")
//! ```
//!
//! Rendering is defensive: absent timestamps show a placeholder, absent or
//! malformed `items` count as zero. Nothing here can fail.

use chrono::{DateTime, Locale, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::InquiryRecord;

/// User-facing message for any admin list failure (auth, network, status, body).
pub const ADMIN_LIST_ERROR_MESSAGE: &str = "Could not load inquiries.";

/// Shown in place of a missing timestamp.
pub const MISSING_TIMESTAMP: &str = "—";

/// Date and time in the locale's preferred representation.
const LOCALIZED_TIMESTAMP_FORMAT: &str = "%x %X";

/// Naive ISO-8601 shapes (no offset) the API uses for `createdAt`.
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Admin list state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AdminListState {
    /// No fetch issued yet.
    #[default]
    Idle,
    Loading,
    Error(String),
    Loaded(Vec<InquiryRecord>),
}

impl AdminListState {
    pub fn new() -> Self {
        AdminListState::default()
    }

    /// Marks the fetch as started. Returns `false` if one was already issued.
    pub fn begin(&mut self) -> bool {
        if *self != AdminListState::Idle {
            debug!("Admin inquiry fetch already issued");
            return false;
        }
        *self = AdminListState::Loading;
        true
    }

    /// Applies the fetch outcome. `Err` is the diagnostic description and is
    /// never shown to the user.
    pub fn apply(&mut self, outcome: Result<Vec<InquiryRecord>, String>) {
        *self = match outcome {
            Ok(records) => {
                debug!(count = records.len(), "Inquiries loaded");
                AdminListState::Loaded(records)
            }
            Err(reason) => {
                warn!(%reason, "Inquiry list fetch failed");
                AdminListState::Error(ADMIN_LIST_ERROR_MESSAGE.to_string())
            }
        };
    }

    /// Abandons a fetch that will never report back. No effect unless loading.
    pub fn cancel(&mut self) {
        if self.is_loading() {
            debug!("Inquiry list fetch abandoned");
            *self = AdminListState::Idle;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AdminListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AdminListState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn records(&self) -> &[InquiryRecord] {
        match self {
            AdminListState::Loaded(records) => records,
            _ => &[],
        }
    }

    /// Rendered rows in received order.
    pub fn rows(&self, locale: Locale) -> Vec<InquiryRow> {
        self.records()
            .iter()
            .map(|record| InquiryRow::render(record, locale))
            .collect()
    }
}

/// One rendered line of the admin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRow {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub created_at: String,
    pub notes: String,
    /// "Items in request: N"
    pub items_label: String,
}

impl InquiryRow {
    pub fn render(record: &InquiryRecord, locale: Locale) -> Self {
        InquiryRow {
            id: record.id,
            customer_name: record.customer_name.clone(),
            customer_email: record.customer_email.clone(),
            created_at: format_timestamp(record.created_at.as_deref(), locale),
            notes: record.notes.clone().unwrap_or_default(),
            items_label: format!("Items in request: {}", record.items.len()),
        }
    }
}

/// Formats a raw `createdAt` value for display.
///
/// - absent or blank → [`MISSING_TIMESTAMP`]
/// - RFC 3339 or naive ISO-8601 → locale date and time
/// - anything else → shown verbatim
pub fn format_timestamp(raw: Option<&str>, locale: Locale) -> String {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return MISSING_TIMESTAMP.to_string(),
    };

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return with_offset
            .format_localized(LOCALIZED_TIMESTAMP_FORMAT, locale)
            .to_string();
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| {
            naive
                .and_utc()
                .format_localized(LOCALIZED_TIMESTAMP_FORMAT, locale)
                .to_string()
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Parses a POSIX locale name such as `en_US` or `fr_FR`.
pub fn parse_locale(name: &str) -> Option<Locale> {
    Locale::try_from(name.trim()).ok()
}
