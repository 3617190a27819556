//! Exact-match filter values taken from the query string

use super::ValidationError;

/// A non-empty filter value, kept verbatim.
///
/// The value is bound as a query parameter, never spliced into SQL, so no
/// trimming or escaping happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterValue(String);

impl FilterValue {
    /// Require a filter parameter to be present and non-empty.
    ///
    /// # Example
    /// ```
    /// use clinic_server::models::FilterValue;
    ///
    /// assert!(FilterValue::require(Some("Ann".into()), "first name").is_ok());
    /// assert!(FilterValue::require(Some(String::new()), "first name").is_err());
    /// assert!(FilterValue::require(None, "first name").is_err());
    /// ```
    pub fn require(raw: Option<String>, field: &'static str) -> Result<Self, ValidationError> {
        match raw {
            Some(value) if !value.is_empty() => Ok(Self(value)),
            _ => Err(ValidationError::MissingFilter { field }),
        }
    }

    /// Get the filter value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FilterValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
