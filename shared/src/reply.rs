//! Raw HTTP replies from the update service

use crate::error::SubmitError;
use crate::messages::{ErrorPayload, ResultBundle, UpdateResponse};

/// Status and body of a settled request, before interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn the reply into a result bundle or the error the form shows
    pub fn into_bundle(self) -> Result<ResultBundle, SubmitError> {
        if self.is_success() {
            // A 2xx body that is not JSON carries no `result`.
            let response: UpdateResponse = serde_json::from_str(&self.body).unwrap_or_default();
            return response.into_bundle();
        }

        if self.status == 404 {
            return Err(SubmitError::NotFound);
        }

        let message = serde_json::from_str::<ErrorPayload>(&self.body)
            .ok()
            .and_then(|payload| payload.message)
            .filter(|message| !message.is_empty());

        Err(SubmitError::Http {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UNEXPECTED_ERROR;

    #[test]
    fn test_not_found_message() {
        let err = HttpReply::new(404, r#"{"message": "no such company"}"#)
            .into_bundle()
            .unwrap_err();
        assert_eq!(err.to_string(), "Company not found. Please enter a valid ID.");
    }

    #[test]
    fn test_server_error_uses_payload_message() {
        let err = HttpReply::new(500, r#"{"message": "Database connection failed"}"#)
            .into_bundle()
            .unwrap_err();
        assert_eq!(err.to_string(), "Database connection failed");
    }

    #[test]
    fn test_server_error_without_message_falls_back() {
        for body in ["", "Internal Server Error", r#"{"message": ""}"#, r#"{"detail": "x"}"#] {
            let err = HttpReply::new(500, body).into_bundle().unwrap_err();
            assert_eq!(err.to_string(), UNEXPECTED_ERROR, "body {body:?}");
        }
    }

    #[test]
    fn test_success_with_records() {
        let body = r#"{"result": {"DB1": {"message": "ok", "record": {"customerCode": "C1"}}}}"#;
        let bundle = HttpReply::new(200, body).into_bundle().unwrap();
        assert_eq!(bundle.databases().collect::<Vec<_>>(), ["DB1"]);
        assert!(bundle.has_records());
    }

    #[test]
    fn test_success_with_business_error() {
        let body = r#"{"result": {"error": "X"}}"#;
        let err = HttpReply::new(200, body).into_bundle().unwrap_err();
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn test_success_with_unreadable_body_is_no_data() {
        let err = HttpReply::new(200, "<html>ok</html>").into_bundle().unwrap_err();
        assert_eq!(err, SubmitError::NoData);
        assert_eq!(err.to_string(), "No customer data available.");
    }
}
