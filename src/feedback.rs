//! Feedback intake.
//!
//! Responses normally go to an externally hosted form. When that form is
//! unavailable, visitors can fill a small local form and download their entry
//! as a two-column CSV to send by hand. Nothing is stored server-side.

use crate::error::{Result, ToolkitError};
use crate::i18n::Resolver;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

/// File name offered for the CSV download
pub const EXPORT_FILE_NAME: &str = "toolkit_feedback.csv";

/// Role choices, as localization keys, in display order
pub const ROLE_KEYS: &[&str] = &[
    "feedback_role_teacher",
    "feedback_role_staff",
    "feedback_role_parent",
    "feedback_role_student",
    "feedback_role_other",
];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = 4;

/// Raw form fields as posted by the export form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

fn default_rating() -> u8 {
    DEFAULT_RATING
}

/// A validated feedback entry, ready for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    /// Role label in the visitor's language
    pub role: String,
    pub rating: u8,
    pub comment: String,
}

impl FeedbackSubmission {
    /// Validate a posted form. Unknown role values are recorded as "Other".
    pub fn from_form(
        form: FeedbackForm,
        resolver: &Resolver<'_>,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&form.rating) {
            return Err(ToolkitError::InvalidRating(form.rating));
        }

        let role_key = ROLE_KEYS
            .iter()
            .copied()
            .find(|key| *key == form.role)
            .unwrap_or("feedback_role_other");

        Ok(Self {
            submitted_at,
            name: form.name.trim().to_string(),
            role: resolver.t(role_key).to_string(),
            rating: form.rating,
            comment: form.comment.trim().to_string(),
        })
    }

    /// Two-column `field,value` CSV document.
    pub fn to_csv(&self) -> String {
        let timestamp = self
            .submitted_at
            .to_rfc3339_opts(SecondsFormat::Micros, true);
        let rating = self.rating.to_string();
        let rows: [(&str, &str); 6] = [
            ("field", "value"),
            ("timestamp_utc", &timestamp),
            ("name", &self.name),
            ("role", &self.role),
            ("rating_1_5", &rating),
            ("comment", &self.comment),
        ];

        let mut csv = String::new();
        for (field, value) in rows {
            csv.push_str(&escape_csv_field(field));
            csv.push(',');
            csv.push_str(&escape_csv_field(value));
            csv.push_str("\r\n");
        }
        csv
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or line break.
pub fn escape_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// URL for embedding the external form in an iframe.
pub fn embed_url(form_url: &str) -> String {
    if form_url.contains("embedded=true") {
        return form_url.to_string();
    }
    let joiner = if form_url.contains('?') { '&' } else { '?' };
    format!("{}{}embedded=true", form_url, joiner)
}
