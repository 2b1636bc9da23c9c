//! Checks on captured responses.
//!
//! `check_*` functions report a mismatch as an `AssertionError`; the
//! `assert_*` wrappers panic with it, failing the calling test at the call
//! site.

use crate::journey_client::CapturedResponse;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AssertionError {
    #[error("Expected status code {expected}, got {actual}.")]
    UnexpectedStatus { expected: u16, actual: u16 },
    #[error("Expected a status code in {expected:?}, got {actual}.")]
    StatusNotInSet { expected: Vec<u16>, actual: u16 },
    #[error("Expected a JSON content type, but the Content-Type header is missing.")]
    MissingContentType,
    #[error("Expected a JSON content type, got `{0}`.")]
    NotJson(String),
}

pub fn check_status_code(
    response: &CapturedResponse,
    expected: u16,
) -> Result<(), AssertionError> {
    let actual = response.status().as_u16();
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionError::UnexpectedStatus { expected, actual })
    }
}

pub fn check_status_code_in(
    response: &CapturedResponse,
    expected: &[u16],
) -> Result<(), AssertionError> {
    let actual = response.status().as_u16();
    if expected.contains(&actual) {
        Ok(())
    } else {
        Err(AssertionError::StatusNotInSet {
            expected: expected.to_vec(),
            actual,
        })
    }
}

pub fn check_content_type_json(response: &CapturedResponse) -> Result<(), AssertionError> {
    let value = response
        .content_type()
        .ok_or(AssertionError::MissingContentType)?;
    if is_json_media_type(&value) {
        Ok(())
    } else {
        Err(AssertionError::NotJson(value.into_owned()))
    }
}

/// `application/json` or a structured `+json` suffix type, ignoring case and
/// parameters such as `charset`.
pub fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[track_caller]
pub fn assert_status_code(response: &CapturedResponse, expected: u16) {
    if let Err(e) = check_status_code(response, expected) {
        fail(e, response);
    }
}

#[track_caller]
pub fn assert_status_code_in(response: &CapturedResponse, expected: &[u16]) {
    if let Err(e) = check_status_code_in(response, expected) {
        fail(e, response);
    }
}

#[track_caller]
pub fn assert_content_type_json(response: &CapturedResponse) {
    if let Err(e) = check_content_type_json(response) {
        fail(e, response);
    }
}

#[track_caller]
fn fail(error: AssertionError, response: &CapturedResponse) -> ! {
    panic!("{}\nResponse body: {}", error, response.text())
}
