//! Input checks shared by the resource modules.
//!
//! Every helper returns an [`Outcome`] whose failure is client-correctable
//! and carries `{ "field": .., "code": .. }` details, so callers can reject
//! bad input before any backend call.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use uuid::Uuid;

use super::Error;
use super::outcome::{Outcome, err_with_details};

/// Detail codes attached to validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidTimestamp,
    UnknownValue,
    InvalidRange,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidDate => "invalid_date",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::UnknownValue => "unknown_value",
            Self::InvalidRange => "invalid_range",
        }
    }
}

/// Request field name as the client spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn reject<T>(field: FieldName, code: ValidationCode, message: String) -> Outcome<T> {
    err_with_details(
        message,
        json!({ "field": field.as_str(), "code": code.as_str() }),
    )
}

/// Failure for a required field that was absent or blank.
pub(crate) fn missing_field(field: FieldName) -> Error {
    Error::invalid_request(format!("{} is required", field.as_str())).with_details(json!({
        "field": field.as_str(),
        "code": ValidationCode::MissingField.as_str(),
    }))
}

/// Trimmed, non-blank text.
pub(crate) fn require_text(field: FieldName, value: Option<&str>) -> Outcome<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_owned()),
        _ => Err(missing_field(field)),
    }
}

/// Trimmed text, with blanks treated as absent.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// A present, well-formed UUID.
pub(crate) fn require_id(field: FieldName, value: Option<&str>) -> Outcome<Uuid> {
    let raw = value.map(str::trim).filter(|raw| !raw.is_empty());
    match raw {
        Some(raw) => Uuid::parse_str(raw).or_else(|_| {
            reject(
                field,
                ValidationCode::InvalidUuid,
                format!("{} must be a valid UUID", field.as_str()),
            )
        }),
        None => Err(missing_field(field)),
    }
}

/// A well-formed UUID when supplied.
pub(crate) fn optional_id(field: FieldName, value: Option<&str>) -> Outcome<Option<Uuid>> {
    match optional_text(value) {
        Some(raw) => require_id(field, Some(&raw)).map(Some),
        None => Ok(None),
    }
}

/// A `YYYY-MM-DD` calendar date when supplied.
pub(crate) fn optional_date(field: FieldName, value: Option<&str>) -> Outcome<Option<NaiveDate>> {
    let Some(raw) = optional_text(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map(Some).or_else(|_| {
        reject(
            field,
            ValidationCode::InvalidDate,
            format!("{} must be a YYYY-MM-DD date", field.as_str()),
        )
    })
}

/// An RFC 3339 timestamp when supplied.
pub(crate) fn optional_timestamp(
    field: FieldName,
    value: Option<&str>,
) -> Outcome<Option<DateTime<Utc>>> {
    let Some(raw) = optional_text(value) else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(&raw)
        .map(|timestamp| Some(timestamp.with_timezone(&Utc)))
        .or_else(|_| {
            reject(
                field,
                ValidationCode::InvalidTimestamp,
                format!("{} must be an RFC 3339 timestamp", field.as_str()),
            )
        })
}

/// A value drawn from `allowed`.
pub(crate) fn require_label(
    field: FieldName,
    value: Option<&str>,
    allowed: &[String],
) -> Outcome<String> {
    let label = require_text(field, value)?;
    if allowed.iter().any(|known| known == &label) {
        return Ok(label);
    }
    err_with_details(
        format!("{} must be one of: {}", field.as_str(), allowed.join(", ")),
        json!({
            "field": field.as_str(),
            "code": ValidationCode::UnknownValue.as_str(),
            "value": label,
        }),
    )
}

/// Reject an end date that falls before its start date.
pub(crate) fn ordered_dates(
    field: FieldName,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Outcome<()> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => reject(
            field,
            ValidationCode::InvalidRange,
            format!("{} must not be before the start date", field.as_str()),
        ),
        _ => Ok(()),
    }
}
