use std::fmt::Display;

use aquaprobe_readings::error::ReadingError;
use reqwest::StatusCode;

pub(crate) type Result<T> = std::result::Result<T, FetchError>;

/// The error type for fetching readings from the station endpoint.
///
/// A failed fetch is never retried on its own; the next scheduled
/// polling cycle issues a fresh request.
#[derive(Debug)]
pub(crate) enum FetchError {
    Http(reqwest::Error),
    Response {
        status_code: StatusCode,
        message: String,
    },
    Reading(ReadingError),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fetch_error = "fetch error:";

        match self {
            FetchError::Http(error) => write!(f, "{fetch_error} HTTP request error: {error}"),
            FetchError::Response {
                status_code,
                message,
            } => write!(
                f,
                "{fetch_error} HTTP response error: status = {status_code}, message = {message}"
            ),
            FetchError::Reading(error) => write!(f, "{fetch_error} {error}"),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Http(error)
    }
}

impl From<ReadingError> for FetchError {
    fn from(error: ReadingError) -> Self {
        FetchError::Reading(error)
    }
}
