//! `reqwest`-backed [`HttpTransport`].

use async_trait::async_trait;
use tracing::debug;

use crate::checksum::verify_crc32;
use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Headers `reqwest` derives from the request itself.
const DERIVED_HEADERS: &[&str] = &["content-length"];

/// Sends requests over HTTPS with a shared `reqwest::Client`.
///
/// By default the request goes to `https://<host><path>`. An endpoint
/// override redirects the connection (for local fakes) while the `host`
/// header, and therefore the signature, stays untouched.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint_url: Option<String>,
    verify_crc32: bool,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    /// Create a transport with checksum verification enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a transport around an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint_url: None,
            verify_crc32: true,
        }
    }

    /// Connect to `endpoint_url` (scheme and authority) instead of the
    /// request host.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        let url: String = endpoint_url.into();
        self.endpoint_url = Some(url.trim_end_matches('/').to_owned());
        self
    }

    /// Toggle `x-amz-crc32` verification.
    #[must_use]
    pub fn with_crc32_verification(mut self, enabled: bool) -> Self {
        self.verify_crc32 = enabled;
        self
    }

    /// The URL a request is sent to.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        match &self.endpoint_url {
            Some(endpoint) => format!("{endpoint}{}", request.path),
            None => format!("https://{}{}", request.host, request.path),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = self.url_for(&request);
        let mut builder = self.client.request(request.method.clone(), &url);

        for (name, value) in &request.headers {
            if DERIVED_HEADERS.contains(&name.as_str()) {
                continue;
            }
            let header_name = http::HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TransportError::InvalidHeader(name.clone()))?;
            let header_value = http::HeaderValue::from_str(value)
                .map_err(|_| TransportError::InvalidHeader(format!("{name}: {value}")))?;
            builder = builder.header(header_name, header_value);
        }

        debug!(%url, method = %request.method, body_len = request.body.len(), "Sending request");

        let response = builder.body(request.body).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        if self.verify_crc32 {
            verify_crc32(&headers, &bytes)?;
        }

        let response = HttpResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        };

        debug!(
            status = response.status.as_u16(),
            request_id = response.request_id().unwrap_or("-"),
            body_len = response.body.len(),
            "Received response"
        );

        Ok(response)
    }
}
