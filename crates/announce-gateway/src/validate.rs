use serde_json::Value;
use thiserror::Error;

/// Required string property of the announcement request model.
const TITLE_FIELD: &str = "atitle";

/// Optional string properties of the announcement request model.
const OPTIONAL_FIELDS: [&str; 3] = ["adescription", "adate", "astatus"];

/// Why a POST body failed the request model check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelViolation {
    #[error("body is not valid JSON")]
    NotJson,

    #[error("body is not a JSON object")]
    NotObject,

    #[error("required property \"atitle\" is missing")]
    MissingTitle,

    #[error("property {0:?} must be a string")]
    NotString(&'static str),
}

/// Check a POST body against the announcement request model: an object with
/// a string `atitle` and, when present, string `adescription`, `adate` and
/// `astatus`. Other properties are allowed.
pub fn validate_announcement(body: &[u8]) -> Result<(), ModelViolation> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ModelViolation::NotJson)?;
    let object = value.as_object().ok_or(ModelViolation::NotObject)?;

    match object.get(TITLE_FIELD) {
        None => return Err(ModelViolation::MissingTitle),
        Some(v) if !v.is_string() => return Err(ModelViolation::NotString(TITLE_FIELD)),
        Some(_) => {}
    }

    for field in OPTIONAL_FIELDS {
        if object.get(field).is_some_and(|v| !v.is_string()) {
            return Err(ModelViolation::NotString(field));
        }
    }

    Ok(())
}
