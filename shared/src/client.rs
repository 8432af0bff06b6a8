//! Update service client abstraction
//!
//! The form talks to the update service through [`UpdateClient`], so the
//! validate → dispatch → interpret flow in [`submit_update`] is the same for
//! the browser client and for test doubles.

use async_trait::async_trait;

use crate::company_id::CompanyId;
use crate::error::SubmitError;
use crate::messages::{ResultBundle, UpdateRequest};
use crate::reply::HttpReply;

/// Transport to the update service
#[async_trait(?Send)]
pub trait UpdateClient {
    /// POST one update request and return the raw reply.
    ///
    /// Non-2xx statuses are replies, not errors; only a failure to get any
    /// response is an `Err`.
    async fn post_update(&self, request: &UpdateRequest) -> Result<HttpReply, SubmitError>;
}

/// Run one submission: validate the input, send it, interpret the reply.
///
/// Invalid input returns before the client is touched.
pub async fn submit_update<C>(client: &C, input: &str) -> Result<ResultBundle, SubmitError>
where
    C: UpdateClient + ?Sized,
{
    let company_id = CompanyId::parse(input)?;
    let reply = client.post_update(&UpdateRequest::new(company_id)).await?;
    reply.into_bundle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Replays one canned reply and counts requests
    struct FakeClient {
        reply: Result<HttpReply, SubmitError>,
        calls: Cell<usize>,
        last_request: RefCell<Option<UpdateRequest>>,
    }

    impl FakeClient {
        fn replying(status: u16, body: &str) -> Self {
            Self::with(Ok(HttpReply::new(status, body)))
        }

        fn with(reply: Result<HttpReply, SubmitError>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last_request: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl UpdateClient for FakeClient {
        async fn post_update(&self, request: &UpdateRequest) -> Result<HttpReply, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_request.borrow_mut() = Some(request.clone());
            self.reply.clone()
        }
    }

    #[test]
    fn test_invalid_input_never_reaches_client() {
        let client = FakeClient::replying(200, r#"{"result": {}}"#);
        for input in ["", "123", "abcdefghijk", "1234567890123456", "12345 67890"] {
            let err = block_on(submit_update(&client, input)).unwrap_err();
            assert_eq!(err, SubmitError::InvalidCompanyId);
        }
        assert_eq!(client.calls.get(), 0);
    }

    #[test]
    fn test_valid_input_sends_company_id() {
        let client = FakeClient::replying(
            200,
            r#"{"result": {"DB1": {"message": "ok", "record": {"customerCode": "C1"}}}}"#,
        );
        let bundle = block_on(submit_update(&client, "1234567890")).unwrap();

        assert_eq!(client.calls.get(), 1);
        let request = client.last_request.borrow().clone().unwrap();
        assert_eq!(request.company_id.as_str(), "1234567890");
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_not_found_reply() {
        let client = FakeClient::replying(404, "");
        let err = block_on(submit_update(&client, "123456789012")).unwrap_err();
        assert_eq!(err, SubmitError::NotFound);
    }

    #[test]
    fn test_transport_failure_passes_through() {
        let client = FakeClient::with(Err(SubmitError::Transport("connection reset".to_string())));
        let err = block_on(submit_update(&client, "123456789012")).unwrap_err();
        assert_eq!(err.to_string(), "An unexpected error occurred");
        assert_eq!(client.calls.get(), 1);
    }
}
