//! Endpoint descriptors consumed by the dispatcher.
//!
//! A descriptor is static metadata for one remote operation: the HTTP method,
//! the resolved path, the named parameters and an optional upload file. The
//! endpoint catalog produces descriptors; the dispatcher turns them into
//! requests.

use serde_json::Value;
use std::path::{Path, PathBuf};

/// HTTP method used by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    #[display("GET")]
    Get,
    /// Parameters travel in a form body.
    #[display("POST")]
    Post,
}

/// Ordered named parameters of one call.
///
/// A `Value::Null` entry marks a parameter that was not supplied; it is kept
/// here and dropped when the request is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params(Vec<(String, Value)>);

impl Params {
    /// Empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. `None` values become `Value::Null`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.push((name.into(), value.into()));
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// All entries, absent ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Entries that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().filter(|(_, v)| !v.is_null())
    }

    /// Number of entries, absent ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no entries exist.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One remote operation, ready for dispatch.
///
/// # Examples
///
/// ```
/// use cmtt_core::{EndpointDescriptor, HttpMethod};
///
/// let descriptor = EndpointDescriptor::get("/timeline/index/recent")
///     .param("count", Some(20u32))
///     .param("offset", None::<u32>);
///
/// assert_eq!(descriptor.method(), &HttpMethod::Get);
/// assert_eq!(descriptor.params().present().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct EndpointDescriptor {
    /// HTTP method.
    method: HttpMethod,
    /// Path below the versioned base URL, starting with `/`.
    path: String,
    /// Named parameters.
    params: Params,
    /// File whose bytes replace the body.
    file: Option<PathBuf>,
}

impl EndpointDescriptor {
    /// Descriptor for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Descriptor for a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Descriptor for any method.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
            file: None,
        }
    }

    /// Add a named parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push(name, value);
        self
    }

    /// Replace the body with the bytes of `path`.
    ///
    /// Uploads are sent as POST even if the descriptor was created with GET.
    pub fn upload(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_params_are_kept_but_not_present() {
        let descriptor = EndpointDescriptor::post("/comment/add")
            .param("id", 10)
            .param("text", "hi")
            .param("attachments", None::<Value>);

        assert_eq!(descriptor.params().len(), 3);
        let present: Vec<&str> = descriptor.params().present().map(|(n, _)| n).collect();
        assert_eq!(present, vec!["id", "text"]);
    }

    #[test]
    fn test_params_preserve_order() {
        let params: Params = vec![("b", json!(2)), ("a", json!(1))].into_iter().collect();
        let names: Vec<&str> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(params.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_upload_sets_path() {
        let descriptor = EndpointDescriptor::post("/uploader/upload").upload("/tmp/mars.jpg");
        assert_eq!(
            descriptor.file().as_deref(),
            Some(Path::new("/tmp/mars.jpg"))
        );
    }
}
