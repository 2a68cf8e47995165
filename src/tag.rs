//! The `Tag` type and its tag-type discriminant.
//!
//! A tag either owns a buffer sized exactly to itself (built from a typed
//! payload) or borrows a window of a caller's buffer (parsed from the wire).
//! Both modes sit behind the same read-only accessors, so callers never
//! branch on which one they hold.  A borrowed tag never copies its payload;
//! the lifetime ties it to the buffer it was parsed from.

use std::fmt;

use crate::constants::*;

/// Tag type discriminant.
///
/// An open set of byte values: the well-known codes have associated
/// constants, anything else is preserved as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagType(pub u8);

impl TagType {
    pub const ACL: TagType = TagType(ACL_TAG_TYPE);
    pub const VISIBILITY: TagType = TagType(VISIBILITY_TAG_TYPE);
    pub const VISIBILITY_EXP_SERIALIZATION_FORMAT: TagType =
        TagType(VISIBILITY_EXP_SERIALIZATION_FORMAT_TAG_TYPE);
    pub const STRING_VIS: TagType = TagType(STRING_VIS_TAG_TYPE);
    pub const TTL: TagType = TagType(TTL_TAG_TYPE);

    /// Raw byte value.
    #[inline]
    pub fn code(self) -> u8 {
        self.0
    }

    /// Name of a well-known type, `None` for anything else.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            ACL_TAG_TYPE => Some("acl"),
            VISIBILITY_TAG_TYPE => Some("visibility"),
            VISIBILITY_EXP_SERIALIZATION_FORMAT_TAG_TYPE => Some("visibility-exp-format"),
            STRING_VIS_TAG_TYPE => Some("string-vis"),
            TTL_TAG_TYPE => Some("ttl"),
            _ => None,
        }
    }

    pub fn is_known(self) -> bool {
        self.name().is_some()
    }
}

impl From<u8> for TagType {
    fn from(code: u8) -> Self {
        TagType(code)
    }
}

impl From<TagType> for u8 {
    fn from(t: TagType) -> Self {
        t.0
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown({})", self.0),
        }
    }
}

/// Where a tag's bytes live.
#[derive(Clone)]
pub(crate) enum Storage<'a> {
    /// Buffer holding exactly this tag, header at offset 0.
    Owned(Box<[u8]>),
    /// Caller buffer that may hold many tags or unrelated record data.
    Borrowed(&'a [u8]),
}

impl Storage<'_> {
    #[inline]
    fn bytes(&self) -> &[u8] {
        match self {
            Storage::Owned(b) => &b[..],
            Storage::Borrowed(b) => *b,
        }
    }
}

/// A typed, length-prefixed metadata blob attached to a cell.
///
/// Immutable once constructed.  Equality compares type and payload only,
/// so an owned tag equals a borrowed view of the same encoding.
#[derive(Clone)]
pub struct Tag<'a> {
    storage: Storage<'a>,
    offset: usize,
    total_length: usize,
    tag_type: TagType,
}

impl<'a> Tag<'a> {
    /// Assemble a tag from already-validated parts.
    ///
    /// Callers guarantee `offset + total_length <= storage.len()`,
    /// `total_length >= TAG_HEADER_SIZE`, and that the type byte at
    /// `offset + 2` matches `tag_type`.
    pub(crate) fn from_parts(
        storage: Storage<'a>,
        offset: usize,
        total_length: usize,
        tag_type: TagType,
    ) -> Self {
        debug_assert!(total_length >= TAG_HEADER_SIZE);
        debug_assert!(offset + total_length <= storage.bytes().len());
        Self {
            storage,
            offset,
            total_length,
            tag_type,
        }
    }

    /// Tag type discriminant.
    #[inline]
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Offset of this tag's header within the backing buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset of the payload within the backing buffer.
    #[inline]
    pub fn payload_offset(&self) -> usize {
        self.offset + TAG_HEADER_SIZE
    }

    /// Bytes this tag occupies on the wire, header included.
    #[inline]
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Payload bytes, excluding the 3-byte header.
    #[inline]
    pub fn payload_length(&self) -> usize {
        self.total_length - TAG_HEADER_SIZE
    }

    /// The whole buffer this tag views.  For a parsed tag this is the
    /// caller's buffer, not just the tag's own region.
    #[inline]
    pub fn backing_buffer(&self) -> &[u8] {
        self.storage.bytes()
    }

    /// Payload bytes, read directly from the backing buffer.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.storage.bytes()[self.payload_offset()..self.offset + self.total_length]
    }

    /// Complete wire encoding of this tag (header and payload).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.bytes()[self.offset..self.offset + self.total_length]
    }

    /// True when this tag is a view into someone else's buffer.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.storage, Storage::Borrowed(_))
    }

    /// Detach from the backing buffer, copying only this tag's region.
    pub fn into_owned(self) -> Tag<'static> {
        let bytes: Box<[u8]> = match self.storage {
            Storage::Owned(b) if self.offset == 0 && b.len() == self.total_length => b,
            other => other.bytes()[self.offset..self.offset + self.total_length].into(),
        };
        Tag::from_parts(Storage::Owned(bytes), 0, self.total_length, self.tag_type)
    }
}

impl<'b> PartialEq<Tag<'b>> for Tag<'_> {
    fn eq(&self, other: &Tag<'b>) -> bool {
        self.tag_type == other.tag_type && self.payload() == other.payload()
    }
}

impl Eq for Tag<'_> {}

impl fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("tag_type", &self.tag_type)
            .field("offset", &self.offset)
            .field("total_length", &self.total_length)
            .field("borrowed", &self.is_borrowed())
            .field("payload", &pretty(self.payload()))
            .finish()
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type={} len={} payload={}",
            self.tag_type,
            self.total_length,
            pretty(self.payload())
        )
    }
}

/// Render bytes as a quoted, escaped string.
///
/// Printable ASCII is kept, `"` and `\` are backslash-escaped, and every
/// other byte becomes `\xNN`.
pub fn pretty(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02X}", b)),
        }
    }
    out.push('"');
    out
}
