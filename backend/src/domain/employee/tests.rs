//! Tests for employee values and input validation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn valid_input() -> Value {
    json!({
        "name": "Ann",
        "position": "Eng",
        "department": "R&D",
        "salary": 50000,
        "dateOfHire": "2022-01-10"
    })
}

fn with_field(mut input: Value, field: &str, value: Value) -> Value {
    if let Some(fields) = input.as_object_mut() {
        fields.insert(field.to_owned(), value);
    }
    input
}

fn without_field(mut input: Value, field: &str) -> Value {
    if let Some(fields) = input.as_object_mut() {
        fields.remove(field);
    }
    input
}

fn error_fields(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(FieldError::field).collect()
}

fn hired(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[rstest]
fn accepts_valid_input(valid_input: Value) {
    let draft = validate_employee_input(&valid_input).expect("valid input");
    assert_eq!(draft.name(), "Ann");
    assert_eq!(draft.position(), "Eng");
    assert_eq!(draft.department(), "R&D");
    assert_eq!(draft.salary(), 50_000);
    assert_eq!(draft.date_of_hire(), hired(2022, 1, 10));
}

#[rstest]
fn empty_object_reports_every_field_in_order() {
    let errors = validate_employee_input(&json!({})).expect_err("empty body");
    assert_eq!(
        errors,
        vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("position", "Position is required"),
            FieldError::new("department", "Department is required"),
            FieldError::new("salary", "Salary must be a positive integer"),
            FieldError::new("dateOfHire", "Date of Hire must be a valid date"),
        ]
    );
}

#[rstest]
#[case::array(json!([1, 2, 3]))]
#[case::string(json!("employee"))]
#[case::null(Value::Null)]
fn non_object_input_behaves_like_empty_object(#[case] input: Value) {
    let errors = validate_employee_input(&input).expect_err("non-object body");
    assert_eq!(
        error_fields(&errors),
        vec!["name", "position", "department", "salary", "dateOfHire"]
    );
}

#[rstest]
#[case::empty_string(json!(""))]
#[case::null(Value::Null)]
#[case::array(json!(["Ann"]))]
#[case::object(json!({ "first": "Ann" }))]
fn rejects_missing_text(valid_input: Value, #[case] name: Value) {
    let errors =
        validate_employee_input(&with_field(valid_input, "name", name)).expect_err("bad name");
    assert_eq!(errors, vec![FieldError::new("name", "Name is required")]);
}

#[rstest]
fn rejects_absent_department(valid_input: Value) {
    let errors = validate_employee_input(&without_field(valid_input, "department"))
        .expect_err("missing department");
    assert_eq!(
        errors,
        vec![FieldError::new("department", "Department is required")]
    );
}

#[rstest]
#[case::number(json!(42), "42")]
#[case::boolean(json!(true), "true")]
#[case::whole_float(json!(1.0), "1")]
#[case::negative_whole_float(json!(-3.0), "-3")]
#[case::fraction(json!(2.5), "2.5")]
fn stringifies_scalar_text(valid_input: Value, #[case] position: Value, #[case] expected: &str) {
    let draft = validate_employee_input(&with_field(valid_input, "position", position))
        .expect("scalar position");
    assert_eq!(draft.position(), expected);
}

#[rstest]
#[case::zero(json!(0), 0)]
#[case::whole_float(json!(60000.0), 60_000)]
#[case::integer_text(json!("70000"), 70_000)]
#[case::signed_text(json!("+5"), 5)]
fn accepts_salary_forms(valid_input: Value, #[case] salary: Value, #[case] expected: i64) {
    let draft =
        validate_employee_input(&with_field(valid_input, "salary", salary)).expect("salary");
    assert_eq!(draft.salary(), expected);
}

#[rstest]
#[case::negative(json!(-100))]
#[case::fraction(json!(100.5))]
#[case::text(json!("abc"))]
#[case::fraction_text(json!("100.5"))]
#[case::leading_zero(json!("0100"))]
#[case::empty_text(json!(""))]
#[case::boolean(json!(true))]
#[case::null(Value::Null)]
#[case::too_large(json!(u64::MAX))]
fn rejects_invalid_salary(valid_input: Value, #[case] salary: Value) {
    let errors =
        validate_employee_input(&with_field(valid_input, "salary", salary)).expect_err("salary");
    assert_eq!(
        errors,
        vec![FieldError::new("salary", "Salary must be a positive integer")]
    );
}

#[rstest]
#[case::plain("2023-05-01", hired(2023, 5, 1))]
#[case::utc_time("2023-05-01T10:00:00Z", hired(2023, 5, 1))]
#[case::fractional_seconds("2023-05-01T10:00:00.250Z", hired(2023, 5, 1))]
#[case::minutes_only("2023-05-01T10:00", hired(2023, 5, 1))]
#[case::negative_offset("2023-05-01T23:30:00-02:00", hired(2023, 5, 2))]
#[case::positive_offset("2023-05-01T01:00:00+0300", hired(2023, 4, 30))]
#[case::leap_day("2024-02-29", hired(2024, 2, 29))]
#[case::space_separator("2023-05-01 10:00", hired(2023, 5, 1))]
#[case::lowercase_utc("2023-05-01T10:00:00z", hired(2023, 5, 1))]
#[case::hour_only_offset("2023-05-01T10:00:00+03", hired(2023, 5, 1))]
#[case::hour_only_offset_crossing_midnight("2023-05-01T01:00:00+03", hired(2023, 4, 30))]
#[case::comma_fraction("2023-05-01T10:00:00,5Z", hired(2023, 5, 1))]
fn parses_iso8601_dates(#[case] text: &str, #[case] expected: NaiveDate) {
    assert_eq!(parse_iso8601_date(text), Some(expected));
}

#[rstest]
#[case::impossible_day("2023-02-30")]
#[case::not_leap_year("2023-02-29")]
#[case::month_out_of_range("2023-13-01")]
#[case::hour_out_of_range("2023-05-01T25:00:00Z")]
#[case::offset_out_of_range("2023-05-01T10:00:00+24:00")]
#[case::free_text("not-a-date")]
#[case::us_format("05/01/2023")]
#[case::trailing_text("2023-05-01 extra")]
#[case::empty("")]
fn rejects_invalid_dates(#[case] text: &str) {
    assert_eq!(parse_iso8601_date(text), None);
}

#[rstest]
#[case::number(json!(20_230_501))]
#[case::null(Value::Null)]
fn rejects_non_string_date(valid_input: Value, #[case] date: Value) {
    let errors =
        validate_employee_input(&with_field(valid_input, "dateOfHire", date)).expect_err("date");
    assert_eq!(error_fields(&errors), vec!["dateOfHire"]);
}

#[rstest]
fn reports_only_failing_fields(valid_input: Value) {
    let input = with_field(
        with_field(valid_input, "name", json!("")),
        "salary",
        json!(-1),
    );
    let errors = validate_employee_input(&input).expect_err("two failures");
    assert_eq!(error_fields(&errors), vec!["name", "salary"]);
}

#[rstest]
fn try_new_collects_violations() {
    let errors =
        EmployeeDraft::try_new("", "", "Ops", -5, hired(2020, 1, 1)).expect_err("invalid draft");
    assert_eq!(error_fields(&errors), vec!["name", "position", "salary"]);
}

#[rstest]
fn employee_serialises_flat_camel_case() {
    let id = EmployeeId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    let draft =
        EmployeeDraft::try_new("Ann", "Eng", "R&D", 50_000, hired(2022, 1, 10)).expect("draft");
    let value = serde_json::to_value(Employee::new(id, draft)).expect("serialise employee");
    assert_eq!(
        value,
        json!({
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Ann",
            "position": "Eng",
            "department": "R&D",
            "salary": 50000,
            "dateOfHire": "2022-01-10"
        })
    );
}

#[rstest]
fn replaced_with_keeps_identifier() {
    let id = EmployeeId::random();
    let original =
        EmployeeDraft::try_new("Ann", "Eng", "R&D", 50_000, hired(2022, 1, 10)).expect("draft");
    let replacement =
        EmployeeDraft::try_new("Ann", "Lead", "R&D", 90_000, hired(2022, 1, 10)).expect("draft");
    let updated = Employee::new(id, original).replaced_with(replacement.clone());
    assert_eq!(updated.id(), &id);
    assert_eq!(updated.details(), &replacement);
}

#[rstest]
#[case("", EmployeeIdError::Empty)]
#[case("42", EmployeeIdError::Invalid)]
#[case("not-a-uuid", EmployeeIdError::Invalid)]
fn employee_id_rejects_bad_text(#[case] text: &str, #[case] expected: EmployeeIdError) {
    assert_eq!(EmployeeId::new(text), Err(expected));
}
