//! `count` / `offset` pagination.

use cmtt_core::EndpointDescriptor;

/// Pagination window for list endpoints.
///
/// Unset fields are left out of the request, so the server default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Number of items to return.
    pub count: Option<u32>,
    /// Number of items to skip.
    pub offset: Option<u32>,
}

impl Page {
    /// Explicit window.
    pub fn new(count: u32, offset: u32) -> Self {
        Self {
            count: Some(count),
            offset: Some(offset),
        }
    }

    /// First `count` items.
    pub fn first(count: u32) -> Self {
        Self {
            count: Some(count),
            offset: None,
        }
    }

    /// The window following this one.
    ///
    /// Returns `self` unchanged when `count` is unset. The offset saturates at
    /// `u32::MAX`.
    pub fn next(self) -> Self {
        match self.count {
            Some(count) => Self {
                count: Some(count),
                offset: Some(self.offset.unwrap_or(0).saturating_add(count)),
            },
            None => self,
        }
    }

    pub(crate) fn apply(self, descriptor: EndpointDescriptor) -> EndpointDescriptor {
        descriptor
            .param("count", self.count)
            .param("offset", self.offset)
    }
}
