// src/submission.rs
//! "Suggest an event" form. Submissions are validated, logged and counted;
//! nothing is stored.

use chrono::NaiveDate;
use metrics::counter;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct EventSubmission {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 4000, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub time: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 300, message = "location is required"))]
    pub location: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub organizer: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub contact: String,
}

fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            let mut e = ValidationError::new("iso_date");
            e.message = Some("date must be YYYY-MM-DD".into());
            e
        })
}

pub const THANK_YOU: &str =
    "Спасибо за предложение! Мы рассмотрим ваше мероприятие и добавим его в наш список.";

impl EventSubmission {
    /// Trim every field so whitespace-only input counts as empty.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            location: self.location.trim().to_string(),
            organizer: self.organizer.trim().to_string(),
            contact: self.contact.trim().to_string(),
        }
    }

    /// Validate and record an incoming submission.
    pub fn accept(self) -> Result<Self, ValidationErrors> {
        let sub = self.trimmed();
        sub.validate()?;
        tracing::info!(
            target: "submissions",
            title = %sub.title,
            date = %sub.date,
            location = %sub.location,
            "event submission received"
        );
        counter!("submissions_total").increment(1);
        Ok(sub)
    }
}
