//! Media upload.

use cmtt_core::EndpointDescriptor;
use std::path::Path;

/// `POST /uploader/upload` with the bytes of `path` as field `file`.
///
/// The `result` of the response can be passed as `attachments` to
/// [`crate::comment::send`] or [`crate::entry::create`].
pub fn upload(path: impl AsRef<Path>) -> EndpointDescriptor {
    EndpointDescriptor::post("/uploader/upload").upload(path)
}

/// `POST /uploader/extract`: let the server fetch media from `url`.
pub fn extract(url: &str) -> EndpointDescriptor {
    EndpointDescriptor::post("/uploader/extract").param("url", url)
}
