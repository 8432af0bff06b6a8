//! Company ID validation

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// ASCII digits only; `\d` would also accept other Unicode digit classes.
static COMPANY_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{10,15}$").expect("company id pattern is valid")
});

/// A validated company identifier: 10 to 15 decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// Validate raw form input. The input is not trimmed.
    pub fn parse(input: &str) -> Result<Self, SubmitError> {
        if Self::is_valid(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(SubmitError::InvalidCompanyId)
        }
    }

    pub fn is_valid(input: &str) -> bool {
        COMPANY_ID_PATTERN.is_match(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CompanyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ten_to_fifteen_digits() {
        assert!(CompanyId::parse("1234567890").is_ok());
        assert!(CompanyId::parse("123456789012").is_ok());
        assert!(CompanyId::parse("123456789012345").is_ok());
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        assert_eq!(CompanyId::parse(""), Err(SubmitError::InvalidCompanyId));
        assert_eq!(CompanyId::parse("123456789"), Err(SubmitError::InvalidCompanyId));
        assert_eq!(
            CompanyId::parse("1234567890123456"),
            Err(SubmitError::InvalidCompanyId)
        );
    }

    #[test]
    fn test_rejects_non_digits() {
        for input in [
            "12345abcde",
            "12345-67890",
            " 1234567890",
            "1234567890 ",
            "1234567890\n",
            "+1234567890",
            "1234567890.0",
            // Arabic-Indic digits
            "١٢٣٤٥٦٧٨٩٠",
        ] {
            assert!(CompanyId::parse(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_keeps_input_verbatim() {
        let id = CompanyId::parse("0001234567").unwrap();
        assert_eq!(id.as_str(), "0001234567");
        assert_eq!(id.to_string(), "0001234567");
    }
}
