//! Conversion between the transport payload and the stored image
//! representation.
//!
//! Both sides are plain contiguous buffers, so the mapping is an exact
//! byte-for-byte copy; the codec keeps the two representations distinct at
//! the type level so nothing outside the service hands transport bytes
//! straight to the store.

use bytes::Bytes;

/// Stored representation of a recipe image.
///
/// Complete by construction: a value of this type always holds the full
/// encoded sequence, never a partially written one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage(Bytes);

impl StoredImage {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Convert an uploaded payload into the stored representation.
///
/// Deterministic and lossless; [`decode`] is its inverse.
pub fn encode(raw: Bytes) -> StoredImage {
    StoredImage(raw)
}

/// Recover the transport payload from a stored image.
pub fn decode(stored: &StoredImage) -> Bytes {
    stored.0.clone()
}
