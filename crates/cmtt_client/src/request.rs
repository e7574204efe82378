//! Turning an [`EndpointDescriptor`] into a concrete HTTP request.
//!
//! Encoding rules:
//!
//! - parameters whose value is `null` are dropped
//! - strings are sent verbatim, numbers and booleans as their JSON text
//! - arrays and objects are sent as JSON text
//! - on POST, `attachments` is always JSON-encoded, even when it is a string
//! - GET parameters become the query string, POST parameters a form body
//! - an upload replaces every parameter with a single multipart `file` field

use cmtt_core::{ClientConfig, EndpointDescriptor, HttpMethod, Params};
use cmtt_error::{CmttResult, IoError};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, instrument};

/// Header carrying the device token.
pub const TOKEN_HEADER: &str = "X-Device-Token";

/// Header carrying the client identifier.
pub const USER_AGENT_HEADER: &str = "User-Agent";

/// Parameter that is always JSON-encoded on POST.
pub const ATTACHMENTS_PARAM: &str = "attachments";

/// Multipart field name used for uploads.
pub const UPLOAD_FIELD: &str = "file";

/// Body of a built request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// `application/x-www-form-urlencoded` fields, in parameter order.
    Form(Vec<(String, String)>),
    /// Single-part multipart upload.
    File {
        /// Multipart field name.
        field: String,
        /// File name reported to the server.
        file_name: String,
        /// Raw file contents.
        bytes: Vec<u8>,
    },
}

/// A fully resolved request, independent of any HTTP library.
#[derive(Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct RequestSpec {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: RequestBody,
}

impl RequestSpec {
    /// Assemble a request from its parts; the inverse of [`RequestSpec::into_parts`].
    pub fn new(
        method: HttpMethod,
        url: impl Into<String>,
        headers: Vec<(String, String)>,
        query: Vec<(String, String)>,
        body: RequestBody,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            query,
            body,
        }
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        lookup(&self.query, name)
    }

    /// Form field by name, if the body is a form.
    pub fn form_field(&self, name: &str) -> Option<&str> {
        match &self.body {
            RequestBody::Form(fields) => lookup(fields, name),
            _ => None,
        }
    }

    /// Split into method, url, headers, query and body.
    pub fn into_parts(
        self,
    ) -> (
        HttpMethod,
        String,
        Vec<(String, String)>,
        Vec<(String, String)>,
        RequestBody,
    ) {
        (self.method, self.url, self.headers, self.query, self.body)
    }
}

impl std::fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(n, v)| {
                if n.eq_ignore_ascii_case(TOKEN_HEADER) {
                    (n.as_str(), "<redacted>")
                } else {
                    (n.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("RequestSpec")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("query", &self.query)
            .field("body", &self.body)
            .finish()
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

/// Builds [`RequestSpec`]s for one configured platform.
#[derive(Clone)]
pub struct RequestBuilder {
    base_url: String,
    user_agent: String,
    token: Option<String>,
}

impl RequestBuilder {
    /// Capture base URL and headers from `config`.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url(),
            user_agent: config.user_agent().clone(),
            token: config.token().clone(),
        }
    }

    /// `https://api.<domain>/v<version>`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `descriptor` into a request.
    ///
    /// An upload is always sent as a POST multipart body, whatever method
    /// the descriptor names.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the upload file cannot be read.
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method(), path = %descriptor.path()))]
    pub async fn build(&self, descriptor: &EndpointDescriptor) -> CmttResult<RequestSpec> {
        let method = *descriptor.method();
        let url = format!("{}{}", self.base_url, descriptor.path());
        let headers = self.headers();

        let (method, query, body) = match descriptor.file() {
            Some(path) => {
                if method != HttpMethod::Post {
                    debug!(%method, "Sending upload as POST");
                }
                (HttpMethod::Post, Vec::new(), read_upload(path).await?)
            }
            None => {
                let pairs = encode_params(method, descriptor.params());
                match method {
                    HttpMethod::Get => (method, pairs, RequestBody::Empty),
                    HttpMethod::Post => (method, Vec::new(), RequestBody::Form(pairs)),
                }
            }
        };

        Ok(RequestSpec {
            method,
            url,
            headers,
            query,
            body,
        })
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(USER_AGENT_HEADER.to_string(), self.user_agent.clone())];
        if let Some(token) = &self.token {
            headers.push((TOKEN_HEADER.to_string(), token.clone()));
        }
        headers
    }
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Encode the present parameters as text pairs.
pub fn encode_params(method: HttpMethod, params: &Params) -> Vec<(String, String)> {
    params
        .present()
        .map(|(name, value)| {
            let text = if method == HttpMethod::Post && name == ATTACHMENTS_PARAM {
                value.to_string()
            } else {
                render_value(value)
            };
            (name.to_string(), text)
        })
        .collect()
}

/// Text form of one parameter value.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

async fn read_upload(path: &Path) -> CmttResult<RequestBody> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| IoError::new(path, e.to_string()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(UPLOAD_FIELD)
        .to_string();

    debug!(file_name = %file_name, size = bytes.len(), "Read upload file");

    Ok(RequestBody::File {
        field: UPLOAD_FIELD.to_string(),
        file_name,
        bytes,
    })
}
