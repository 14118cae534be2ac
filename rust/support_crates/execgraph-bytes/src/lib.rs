//! Byte buffers for the execgraph infrastructure: a growable builder buffer and
//! a shared immutable buffer that can be sliced and cloned without copying.

use std::{
    ops::{Bound, RangeBounds},
    sync::Arc,
};

/// A mutable buffer of bytes, conceptually similar to a `Vec<u8>`.
///
/// Used to assemble a message before freezing it into an immutable [`Bytes`].
#[derive(Debug, Default, Clone)]
pub struct BytesMut(Vec<u8>);

impl BytesMut {
    /// Creates a new empty `BytesMut`.
    pub fn new() -> BytesMut {
        BytesMut(Vec::new())
    }

    /// Creates a new `BytesMut` with the specified capacity.
    pub fn with_capacity(capacity: usize) -> BytesMut {
        BytesMut(Vec::with_capacity(capacity))
    }

    /// Creates a new `BytesMut` with the specified length, filled with zero bytes.
    pub fn zeroed(len: usize) -> BytesMut {
        BytesMut(vec![0u8; len])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn extend_from_slice(&mut self, extend: &[u8]) {
        self.0.extend_from_slice(extend);
    }

    /// Appends the in-memory representation of `values`.
    pub fn extend_from_typed_slice<T: bytemuck::NoUninit>(&mut self, values: &[T]) {
        self.0.extend_from_slice(bytemuck::cast_slice(values));
    }

    /// Consumes the `BytesMut` and converts it into an immutable `Bytes`.
    pub fn into_bytes(self) -> Bytes {
        Bytes::from(self.0)
    }
}

impl std::ops::Deref for BytesMut {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for BytesMut {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::io::Write for BytesMut {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A contiguous, immutable memory region that can be shared with other buffers and across
/// thread boundaries.
///
/// `Bytes` can be sliced and cloned without copying the underlying data.
#[derive(Clone)]
pub struct Bytes {
    owner: Arc<[u8]>,
    start: usize,
    end: usize,
}

impl Bytes {
    /// Creates a new empty `Bytes`.
    #[inline]
    pub fn new() -> Self {
        Bytes::from(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Creates a new `Bytes` by copying data from a slice.
    pub fn copy_from_slice(data: &[u8]) -> Bytes {
        Bytes {
            owner: Arc::from(data),
            start: 0,
            end: data.len(),
        }
    }

    /// Creates a new `Bytes` by slicing the current `Bytes` within the given range.
    ///
    /// This operation is zero-copy.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Bytes {
        let len = self.len();
        let begin = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n + 1,
            Bound::Excluded(&n) => n,
            Bound::Unbounded => len,
        };
        assert!(
            begin <= end && end <= len,
            "slice range {begin}..{end} out of bounds for length {len}"
        );
        Bytes {
            owner: self.owner.clone(),
            start: self.start + begin,
            end: self.start + end,
        }
    }

    /// Reinterprets the bytes as a slice of `T`, if the length and alignment permit.
    pub fn typed_data<T: bytemuck::AnyBitPattern>(&self) -> Option<&[T]> {
        bytemuck::try_cast_slice(self).ok()
    }

    /// Returns `true` when both instances view the same region of the same allocation.
    pub fn ptr_eq(&self, other: &Bytes) -> bool {
        Arc::ptr_eq(&self.owner, &other.owner) && self.start == other.start && self.end == other.end
    }
}

impl std::ops::Deref for Bytes {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.owner[self.start..self.end]
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl Default for Bytes {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bytes").field("len", &self.len()).finish()
    }
}

impl PartialEq for Bytes {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl Eq for Bytes {}

impl From<Vec<u8>> for Bytes {
    fn from(vec: Vec<u8>) -> Self {
        let end = vec.len();
        Bytes {
            owner: Arc::from(vec),
            start: 0,
            end,
        }
    }
}

impl From<BytesMut> for Bytes {
    fn from(bytes: BytesMut) -> Self {
        bytes.into_bytes()
    }
}

impl From<&[u8]> for Bytes {
    fn from(s: &[u8]) -> Self {
        Self::copy_from_slice(s)
    }
}

impl From<&str> for Bytes {
    fn from(s: &str) -> Self {
        Self::copy_from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_bytes_mut_write_and_freeze() {
        let mut buffer = BytesMut::with_capacity(16);
        assert!(buffer.is_empty());
        buffer.write_all(b"hello").unwrap();
        buffer.extend_from_slice(b" world");
        assert_eq!(buffer.len(), 11);

        let bytes = buffer.into_bytes();
        assert_eq!(&bytes[..], b"hello world");
    }

    #[test]
    fn test_bytes_mut_typed_extend() {
        let mut buffer = BytesMut::new();
        buffer.extend_from_typed_slice(&[1u32, 2u32]);
        assert_eq!(buffer.len(), 8);
        assert_eq!(&buffer[..4], &1u32.to_ne_bytes());
    }

    #[test]
    fn test_bytes_slice_is_zero_copy() {
        let bytes = Bytes::from(b"0123456789".to_vec());
        let mid = bytes.slice(2..6);
        assert_eq!(&mid[..], b"2345");
        assert_eq!(mid.as_ptr(), unsafe { bytes.as_ptr().add(2) });

        let nested = mid.slice(1..=2);
        assert_eq!(&nested[..], b"34");

        let tail = bytes.slice(8..);
        assert_eq!(&tail[..], b"89");
        assert!(bytes.slice(..).ptr_eq(&bytes));
    }

    #[test]
    #[should_panic]
    fn test_bytes_slice_out_of_bounds() {
        let bytes = Bytes::from(b"abc".as_ref());
        let _ = bytes.slice(2..5);
    }

    #[test]
    fn test_bytes_equality_and_default() {
        assert!(Bytes::default().is_empty());
        assert_eq!(Bytes::from("abc"), Bytes::copy_from_slice(b"abc"));
        assert_ne!(Bytes::from("abc"), Bytes::from("abd"));
    }

    #[test]
    fn test_typed_data_rejects_bad_length() {
        let bytes = Bytes::from(vec![0u8; 7]);
        assert!(bytes.typed_data::<u32>().is_none());
        let bytes = Bytes::from(vec![0u8; 1]);
        assert_eq!(bytes.typed_data::<u8>().map(|s| s.len()), Some(1));
    }
}
