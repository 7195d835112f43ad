//! Blocking HTTP client used for both the release listing and archive downloads.

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use super::error::TransportError;

/// Media type requested from the GitHub REST API (v3).
pub const GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// HTTP client that sends the GitHub Accept header with every request and turns
/// failed requests into [`TransportError`].
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    ///
    /// Send failures, error statuses and truncated bodies come back as
    /// [`TransportError`]; a complete body that is not the expected JSON does not.
    #[tracing::instrument(skip(self, query))]
    pub fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self.send(url, query)?;
        // A body cut short is a transport failure, not a parse failure.
        let body = response.bytes().map_err(|e| TransportError::new(url, e))?;

        serde_json::from_slice(&body).context("Failed to parse JSON response")
    }

    /// Opens a GET request whose body is read lazily by the caller.
    ///
    /// The status is checked before returning, so an error page is never handed out
    /// as a body.
    #[tracing::instrument(skip(self))]
    pub fn get_stream(&self, url: &str) -> Result<Response> {
        debug!("Opening download stream from {}...", url);

        let response = self.send(url, &[])?;
        debug!(
            "Stream opened with HTTP {} (content length: {:?})",
            response.status(),
            response.content_length()
        );
        Ok(response)
    }

    fn send(&self, url: &str, query: &[(&str, String)]) -> Result<Response, TransportError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .query(query)
            .send()
            .map_err(|e| TransportError::new(url, e))?;

        response
            .error_for_status()
            .map_err(|e| TransportError::new(url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_get_json_without_query() {
        let mut server = mockito::Server::new();
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .match_header("accept", GITHUB_JSON)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "test", "value": 42}"#)
            .create();

        let client = HttpClient::new(Client::new());

        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct TestResponse {
            name: String,
            value: i32,
        }

        let result: TestResponse = client
            .get_json_with_query(&format!("{}/test", url), &[])
            .unwrap();

        mock.assert();
        assert_eq!(result.name, "test");
        assert_eq!(result.value, 42);
    }

    #[test]
    fn test_get_json_not_found() {
        let mut server = mockito::Server::new();
        let url = server.url();

        let mock = server.mock("GET", "/test").with_status(404).create();

        let client = HttpClient::new(Client::new());

        let result: Result<serde_json::Value> =
            client.get_json_with_query(&format!("{}/test", url), &[]);

        mock.assert();
        let err = result.unwrap_err();
        let transport = err.downcast_ref::<TransportError>().unwrap();
        assert_eq!(transport.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_get_json_with_query_success() {
        let mut server = mockito::Server::new();
        let url = server.url();

        let mock = server
            .mock("GET", "/test?per_page=10&page=2")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["item1", "item2"]"#)
            .create();

        let client = HttpClient::new(Client::new());
        let result: Vec<String> = client
            .get_json_with_query(
                &format!("{}/test", url),
                &[("per_page", "10".to_string()), ("page", "2".to_string())],
            )
            .unwrap();

        mock.assert();
        assert_eq!(result, vec!["item1", "item2"]);
    }

    #[test]
    fn test_get_json_malformed_body_is_not_transport_error() {
        let mut server = mockito::Server::new();
        let url = server.url();

        let mock = server
            .mock("GET", "/test")
            .with_status(200)
            .with_body("not json")
            .create();

        let client = HttpClient::new(Client::new());
        let result: Result<serde_json::Value> =
            client.get_json_with_query(&format!("{}/test", url), &[]);

        mock.assert();
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<TransportError>().is_none());
        assert!(err.to_string().contains("Failed to parse JSON response"));
    }

    #[test]
    fn test_get_json_truncated_body_is_transport_error() {
        // Promises 100 bytes, sends 2 and hangs up.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).unwrap();
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n[{")
                .unwrap();
        });

        let client = HttpClient::new(Client::new());
        let url = format!("http://{}/test", addr);
        let result: Result<serde_json::Value> = client.get_json_with_query(&url, &[]);
        server.join().unwrap();

        let err = result.unwrap_err();
        let transport = err.downcast_ref::<TransportError>().unwrap();
        assert_eq!(transport.status(), None);
        assert_eq!(transport.url, url);
    }

    #[test]
    fn test_get_stream_success() {
        let mut server = mockito::Server::new();
        let url = server.url();

        let mock = server
            .mock("GET", "/file.tar.gz")
            .match_header("accept", GITHUB_JSON)
            .with_status(200)
            .with_body("test content")
            .create();

        let client = HttpClient::new(Client::new());
        let mut response = client.get_stream(&format!("{}/file.tar.gz", url)).unwrap();

        let mut body = String::new();
        response.read_to_string(&mut body).unwrap();

        mock.assert();
        assert_eq!(body, "test content");
    }

    #[test]
    fn test_get_stream_server_error() {
        let mut server = mockito::Server::new();
        let url = server.url();

        let mock = server
            .mock("GET", "/file.tar.gz")
            .with_status(500)
            .with_body("<html>oops</html>")
            .create();

        let client = HttpClient::new(Client::new());
        let err = client
            .get_stream(&format!("{}/file.tar.gz", url))
            .unwrap_err();

        mock.assert();
        let transport = err.downcast_ref::<TransportError>().unwrap();
        assert_eq!(transport.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
