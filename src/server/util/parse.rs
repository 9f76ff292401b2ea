use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a record identifier supplied by the caller.
///
/// Identifiers arrive as path segments; anything that is not a positive integer is
/// rejected before it reaches the database so callers can tell a malformed id apart
/// from a missing record.
///
/// # Arguments
/// - `value` - The path segment to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - Value is not a positive integer
pub fn parse_id(value: &str) -> Result<i32, AppError> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!("Invalid id '{}'", value))),
    }
}

/// Parses an enumeration value supplied by the caller.
///
/// # Arguments
/// - `kind` - Human-readable name of the field, used in the error message
/// - `value` - Raw value from the request
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(AppError::BadRequest)` - Value is not one of the accepted variants
pub fn parse_input<T: FromStr>(kind: &'static str, value: &str) -> Result<T, AppError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} '{}'", kind, value)))
}

/// Parses an enumeration value read back from the database.
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored value is unrecognised
pub fn parse_stored<T: FromStr>(kind: &'static str, value: String) -> Result<T, AppError> {
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(InternalError::UnknownStoredValue { kind, value }.into()),
    }
}

/// Trims an optional query or body value, treating blank strings as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
