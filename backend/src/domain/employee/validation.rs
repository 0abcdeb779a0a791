//! Validation of raw employee input.
//!
//! Every rule runs independently and all violations are reported together,
//! in the fixed field order `name, position, department, salary, dateOfHire`.

use std::sync::OnceLock;

use chrono::{Duration, NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::EmployeeDraft;

pub(super) const FIELD_NAME: &str = "name";
pub(super) const FIELD_POSITION: &str = "position";
pub(super) const FIELD_DEPARTMENT: &str = "department";
pub(super) const FIELD_SALARY: &str = "salary";
pub(super) const FIELD_DATE_OF_HIRE: &str = "dateOfHire";

pub(super) const NAME_REQUIRED: &str = "Name is required";
pub(super) const POSITION_REQUIRED: &str = "Position is required";
pub(super) const DEPARTMENT_REQUIRED: &str = "Department is required";
pub(super) const SALARY_INVALID: &str = "Salary must be a positive integer";
pub(super) const DATE_OF_HIRE_INVALID: &str = "Date of Hire must be a valid date";

/// Whole numbers at or above this bound are rejected rather than rounded.
const MAX_EXACT_SALARY: f64 = 9_007_199_254_740_992.0;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    field: String,
    message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// JSON key of the rejected field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Caller-facing description of the violation.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validate a raw JSON body into an [`EmployeeDraft`].
///
/// Returns either the normalised draft or a non-empty list of field errors.
/// Input that is not a JSON object is treated as an object with no fields.
///
/// # Examples
/// ```
/// use employee_service::domain::validate_employee_input;
/// use serde_json::json;
///
/// let draft = validate_employee_input(&json!({
///     "name": "Ann",
///     "position": "Eng",
///     "department": "R&D",
///     "salary": 50000,
///     "dateOfHire": "2022-01-10"
/// }))
/// .expect("valid input");
/// assert_eq!(draft.date_of_hire().to_string(), "2022-01-10");
///
/// let errors = validate_employee_input(&json!({ "salary": -1 })).expect_err("invalid");
/// assert_eq!(errors.len(), 5);
/// ```
pub fn validate_employee_input(input: &Value) -> Result<EmployeeDraft, Vec<FieldError>> {
    let empty = Map::new();
    let fields = input.as_object().unwrap_or(&empty);

    let outcome = (
        required_text(fields, FIELD_NAME, NAME_REQUIRED),
        required_text(fields, FIELD_POSITION, POSITION_REQUIRED),
        required_text(fields, FIELD_DEPARTMENT, DEPARTMENT_REQUIRED),
        salary(fields.get(FIELD_SALARY)),
        date_of_hire(fields.get(FIELD_DATE_OF_HIRE)),
    );

    match outcome {
        (Ok(name), Ok(position), Ok(department), Ok(amount), Ok(hired)) => Ok(
            EmployeeDraft::from_storage(name, position, department, amount, hired),
        ),
        (name, position, department, amount, hired) => Err([
            name.err(),
            position.err(),
            department.err(),
            amount.err(),
            hired.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

fn required_text(
    fields: &Map<String, Value>,
    field: &'static str,
    message: &'static str,
) -> Result<String, FieldError> {
    match fields.get(field) {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        Some(Value::Number(number)) => Ok(number_text(number)),
        Some(Value::Bool(flag)) => Ok(flag.to_string()),
        _ => Err(FieldError::new(field, message)),
    }
}

/// Text form of a JSON number; whole floats drop their `.0`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float)
            if number.is_f64()
                && float.fract() == 0.0
                && (-MAX_EXACT_SALARY..MAX_EXACT_SALARY).contains(&float) =>
        {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "value is a whole number inside the exactly representable range"
            )]
            let whole = float as i64;
            whole.to_string()
        }
        _ => number.to_string(),
    }
}

fn salary(value: Option<&Value>) -> Result<i64, FieldError> {
    let parsed = match value {
        Some(Value::Number(number)) => salary_from_number(number),
        Some(Value::String(text)) => salary_from_text(text),
        _ => None,
    };
    parsed
        .filter(|amount| *amount >= 0)
        .ok_or_else(|| FieldError::new(FIELD_SALARY, SALARY_INVALID))
}

fn salary_from_number(number: &Number) -> Option<i64> {
    if let Some(whole) = number.as_i64() {
        return Some(whole);
    }
    if number.is_u64() {
        return None;
    }
    let float = number.as_f64()?;
    if float.fract() != 0.0 || !(0.0..MAX_EXACT_SALARY).contains(&float) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "value is a whole number inside the exactly representable range"
    )]
    let whole = float as i64;
    Some(whole)
}

fn integer_text_regex() -> &'static Regex {
    static INTEGER_TEXT_RE: OnceLock<Regex> = OnceLock::new();
    INTEGER_TEXT_RE.get_or_init(|| {
        Regex::new("^[-+]?(?:0|[1-9][0-9]*)$")
            .unwrap_or_else(|error| panic!("integer regex failed to compile: {error}"))
    })
}

fn salary_from_text(text: &str) -> Option<i64> {
    if !integer_text_regex().is_match(text) {
        return None;
    }
    text.parse().ok()
}

fn date_of_hire(value: Option<&Value>) -> Result<NaiveDate, FieldError> {
    value
        .and_then(Value::as_str)
        .and_then(parse_iso8601_date)
        .ok_or_else(|| FieldError::new(FIELD_DATE_OF_HIRE, DATE_OF_HIRE_INVALID))
}

fn iso8601_regex() -> &'static Regex {
    static ISO_8601_RE: OnceLock<Regex> = OnceLock::new();
    ISO_8601_RE.get_or_init(|| {
        let pattern = concat!(
            r"^([0-9]{4})-([0-9]{2})-([0-9]{2})",
            r"(?:[T ]([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:[.,][0-9]+)?)?",
            r"([zZ]|[+-][0-9]{2}(?::?[0-9]{2})?)?)?$",
        );
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("ISO-8601 regex failed to compile: {error}"))
    })
}

/// Parse an ISO-8601 calendar date or date-time into a date.
///
/// Date-times with an explicit offset are converted to UTC first; the time
/// of day is then discarded.
///
/// # Examples
/// ```
/// use employee_service::domain::parse_iso8601_date;
///
/// assert_eq!(
///     parse_iso8601_date("2023-05-01").map(|d| d.to_string()),
///     Some("2023-05-01".to_owned())
/// );
/// assert_eq!(
///     parse_iso8601_date("2023-05-01T23:30:00-02:00").map(|d| d.to_string()),
///     Some("2023-05-02".to_owned())
/// );
/// assert!(parse_iso8601_date("2023-02-30").is_none());
/// assert!(parse_iso8601_date("not-a-date").is_none());
/// ```
pub fn parse_iso8601_date(text: &str) -> Option<NaiveDate> {
    let captures = iso8601_regex().captures(text)?;
    let number = |index: usize| -> Option<u32> { captures.get(index)?.as_str().parse().ok() };

    let year = captures.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(2)?, number(3)?)?;
    let Some(hour) = number(4) else {
        return Some(date);
    };

    let time = NaiveTime::from_hms_opt(hour, number(5)?, number(6).unwrap_or(0))?;
    let offset = match captures.get(7).map(|suffix| suffix.as_str()) {
        None | Some("Z" | "z") => 0,
        Some(suffix) => offset_seconds(suffix)?,
    };
    date.and_time(time)
        .checked_sub_signed(Duration::seconds(offset))
        .map(|utc| utc.date())
}

fn offset_seconds(offset: &str) -> Option<i64> {
    let (sign, rest) = offset.split_at_checked(1)?;
    let digits = rest.replace(':', "");
    let hours: i64 = digits.get(..2)?.parse().ok()?;
    let minutes: i64 = match digits.get(2..)? {
        "" => 0,
        rest_minutes => rest_minutes.parse().ok()?,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    let magnitude = hours * 3600 + minutes * 60;
    Some(if sign == "-" { -magnitude } else { magnitude })
}
