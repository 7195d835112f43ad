//! The single error kind raised by the HTTP layer.

use reqwest::StatusCode;
use thiserror::Error;

/// A request that could not be sent or came back with a non-success status.
///
/// Client errors (404) and server errors (5xx) are reported identically; nothing is
/// retried.
#[derive(Debug, Error)]
#[error("GET {url} failed{}", status_suffix(.status))]
pub struct TransportError {
    pub url: String,
    pub status: Option<StatusCode>,
    #[source]
    pub source: reqwest::Error,
}

impl TransportError {
    pub fn new(url: &str, source: reqwest::Error) -> Self {
        Self {
            url: url.to_string(),
            status: source.status(),
            source,
        }
    }

    /// The HTTP status, or `None` when the request never got a response.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }
}

fn status_suffix(status: &Option<StatusCode>) -> String {
    match status {
        Some(status) => format!(" with HTTP {}", status),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: usize) -> (mockito::ServerGuard, reqwest::Error) {
        let mut server = mockito::Server::new();
        server.mock("GET", "/").with_status(status).create();

        let response = reqwest::blocking::get(server.url()).unwrap();
        let err = response.error_for_status().unwrap_err();
        (server, err)
    }

    #[test]
    fn test_transport_error_carries_client_status() {
        let (server, err) = status_error(404);
        let err = TransportError::new(&server.url(), err);

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains(&server.url()));
    }

    #[test]
    fn test_transport_error_carries_server_status() {
        let (server, err) = status_error(503);
        let err = TransportError::new(&server.url(), err);

        assert_eq!(err.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    }

    #[test]
    fn test_transport_error_without_response() {
        // Nothing listens on port 1.
        let err = reqwest::blocking::get("http://127.0.0.1:1/").unwrap_err();
        let err = TransportError::new("http://127.0.0.1:1/", err);

        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "GET http://127.0.0.1:1/ failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
