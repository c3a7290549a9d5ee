//! Request Outcomes
//!
//! What a result area shows before, during and after a request.

use crate::error::{ApiError, ApiResult};

/// How a finished request ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Server answered `success: true`
    Generated(T),
    /// Server answered `success: false`
    Failed,
    /// Transport or decoding failure
    Error(ApiError),
}

impl<T> Outcome<T> {
    /// `Ok(None)` means the server reported failure.
    pub fn from_result(result: ApiResult<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Outcome::Generated(value),
            Ok(None) => Outcome::Failed,
            Err(err) => Outcome::Error(err),
        }
    }

    /// Text for the error box, `None` on success
    pub fn failure_text(&self, failed_message: &str) -> Option<String> {
        match self {
            Outcome::Generated(_) => None,
            Outcome::Failed => Some(failed_message.to_string()),
            Outcome::Error(err) => Some(format!("Error: {}", err)),
        }
    }
}

/// State of one result area
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Done(Outcome<T>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{QrResponse, QR_FAILED_MESSAGE};

    #[test]
    fn test_failed_text() {
        let outcome = Outcome::from_result(Ok(QrResponse::default().into_code()));
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            outcome.failure_text(QR_FAILED_MESSAGE).as_deref(),
            Some("Failed to generate QR code")
        );
    }

    #[test]
    fn test_network_error_text() {
        let outcome: Outcome<()> = Outcome::from_result(Err(ApiError::Network("timeout".into())));
        assert_eq!(
            outcome.failure_text(QR_FAILED_MESSAGE).as_deref(),
            Some("Error: timeout")
        );
    }

    #[test]
    fn test_generated_has_no_failure_text() {
        let outcome = Outcome::from_result(Ok(Some(7)));
        assert_eq!(outcome, Outcome::Generated(7));
        assert_eq!(outcome.failure_text(QR_FAILED_MESSAGE), None);
    }

    #[test]
    fn test_saved_file_and_status_error() {
        let saved: Outcome<String> = Outcome::Generated("QR_Codes_20240101_120000.pdf".into());
        assert_eq!(saved.failure_text("Failed to generate PDF"), None);

        let rejected: Outcome<String> = Outcome::Error(ApiError::Status(502));
        assert_eq!(
            rejected.failure_text("Failed to generate PDF").as_deref(),
            Some("Error: HTTP 502")
        );
    }

    #[test]
    fn test_state_starts_idle() {
        assert_eq!(RequestState::<()>::default(), RequestState::Idle);
    }
}
