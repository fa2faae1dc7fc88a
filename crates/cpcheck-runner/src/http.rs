//! HTTP client wrapper
//!
//! One blocking client per run, connect and read timeouts from the config.
//! `execute` turns a `RequestSpec` into a `(status, body)` pair; the body is
//! read to completion before the response is dropped, so the connection is
//! released on every exit path. Status codes are never interpreted here and
//! nothing is retried.

use std::time::Duration;

use cpcheck_core::{CaseError, Config};

/// Request methods the harness issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// Request body with an optional media type.
#[derive(Debug, Clone)]
pub struct Body {
    /// `Content-Type` to send; `None` leaves the header unset (empty PUTs).
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Ephemeral description of one request.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    /// Path (plus query) appended to the client's base URL.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl RequestSpec {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST with a JSON body, `application/json; charset=utf-8`.
    #[must_use]
    pub fn post_json(path: impl Into<String>, value: &serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            headers: Vec::new(),
            body: Some(Body {
                media_type: Some("application/json; charset=utf-8".to_string()),
                bytes: value.to_string().into_bytes(),
            }),
        }
    }

    /// PUT with an empty body and no media type.
    #[must_use]
    pub fn put_empty(path: impl Into<String>) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            headers: Vec::new(),
            body: Some(Body {
                media_type: None,
                bytes: Vec::new(),
            }),
        }
    }

    /// Attach `Authorization: Bearer <token>`. An empty token still sends the
    /// header, which is how cases exercise the unauthenticated branch.
    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.headers
            .push(("Authorization".to_string(), format!("Bearer {token}")));
        self
    }
}

/// Status code and fully-read body of one response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP client bound to the SUT base URL.
pub struct HttpClient {
    inner: reqwest::blocking::Client,
    base_url: String,
}

impl HttpClient {
    /// Build a client with the given connect/read timeout.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::Transport` if the underlying client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CaseError> {
        let inner = reqwest::blocking::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| CaseError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            inner,
            base_url: base_url.into(),
        })
    }

    /// Build from harness config.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::Transport` if the underlying client cannot be
    /// constructed.
    pub fn from_config(config: &Config) -> Result<Self, CaseError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one request and return `(status, body)`.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::Transport` on connect failure, timeout, or a body
    /// that cannot be read.
    pub fn execute(&self, spec: &RequestSpec) -> Result<HttpResponse, CaseError> {
        let url = format!("{}{}", self.base_url, spec.path);
        let mut request = self.inner.request(spec.method.as_reqwest(), &url);

        for (name, value) in &spec.headers {
            // Values that are not legal HTTP never reach the server anyway.
            if reqwest::header::HeaderValue::from_str(value).is_ok() {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        if let Some(body) = &spec.body {
            if let Some(media_type) = &body.media_type {
                request = request.header("Content-Type", media_type.as_str());
            }
            request = request.body(body.bytes.clone());
        }

        let response = request
            .send()
            .map_err(|e| CaseError::Transport(format!("{} {url}: {e}", spec.method)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| CaseError::Transport(format!("{} {url}: reading body: {e}", spec.method)))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_json_sets_media_type_and_payload() {
        let spec = RequestSpec::post_json("/auth/login", &serde_json::json!({"email": "a@b.c"}));
        let body = spec.body.unwrap();
        assert_eq!(
            body.media_type.as_deref(),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(body.bytes, br#"{"email":"a@b.c"}"#);
    }

    #[test]
    fn put_empty_has_no_media_type() {
        let spec = RequestSpec::put_empty("/complaints/status/1?newStatus=OPEN");
        let body = spec.body.unwrap();
        assert!(body.media_type.is_none());
        assert!(body.bytes.is_empty());
    }

    #[test]
    fn bearer_header_keeps_empty_token() {
        let spec = RequestSpec::get("/complaints/user/1").bearer("");
        assert_eq!(
            spec.headers,
            vec![("Authorization".to_string(), "Bearer ".to_string())]
        );
    }

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
    }

    #[test]
    fn refused_connection_is_transport_error() {
        // Bind then drop a listener so the port is known to be closed.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client =
            HttpClient::new(format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).unwrap();
        let err = client.execute(&RequestSpec::get("/auth/login")).unwrap_err();
        assert!(matches!(err, CaseError::Transport(_)));
    }
}
