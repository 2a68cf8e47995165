//! Tag encoder — building owned tags and packing tag lists.
//!
//! Encoding format per tag:
//!   uint16be(len(payload) + 1) || type_byte || payload
//!
//! A tag list is the plain concatenation of tag encodings.  There is no
//! count and no outer length; the embedding record carries the region size.

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use crate::constants::*;
use crate::errors::*;
use crate::tag::{Storage, Tag, TagType};

/// Build a tag that owns a freshly allocated buffer sized exactly to it.
///
/// Fails with `ERR_INVALID_ARGUMENT` when the payload is longer than
/// `MAX_TAG_DATA_LENGTH`.
pub fn build_tag(tag_type: impl Into<TagType>, payload: &[u8]) -> Result<Tag<'static>, TagError> {
    let tag_type = tag_type.into();
    if payload.len() > MAX_TAG_DATA_LENGTH {
        debug!(
            "rejecting {} tag: payload of {} bytes exceeds {}",
            tag_type,
            payload.len(),
            MAX_TAG_DATA_LENGTH
        );
        return Err(TagError::invalid_argument(format!(
            "tag data exceeds max length: {}",
            MAX_TAG_DATA_LENGTH
        )));
    }

    Ok(encode_owned(tag_type, payload))
}

/// Encode a tag whose payload is already known to fit.
pub(crate) fn encode_owned(tag_type: TagType, payload: &[u8]) -> Tag<'static> {
    debug_assert!(payload.len() <= MAX_TAG_DATA_LENGTH);
    let total_length = TAG_HEADER_SIZE + payload.len();
    let mut buf = vec![0u8; total_length].into_boxed_slice();
    // Fits: payload.len() + 1 <= MAX_TAG_DATA_LENGTH + 1 <= u16::MAX.
    BigEndian::write_u16(
        &mut buf[..TAG_LENGTH_HEADER_SIZE],
        (payload.len() + TAG_TYPE_HEADER_SIZE) as u16,
    );
    buf[TAG_LENGTH_HEADER_SIZE] = tag_type.code();
    buf[TAG_HEADER_SIZE..].copy_from_slice(payload);

    Tag::from_parts(Storage::Owned(buf), 0, total_length, tag_type)
}

/// Build a tag whose payload is `text` encoded as UTF-8.
pub fn build_text_tag(tag_type: impl Into<TagType>, text: &str) -> Result<Tag<'static>, TagError> {
    build_tag(tag_type, text.as_bytes())
}

/// Serialized size of a tag list.
pub fn tag_list_length(tags: &[Tag<'_>]) -> usize {
    tags.iter().map(Tag::total_length).sum()
}

/// Pack tags into one contiguous buffer, in order, with no padding.
///
/// Each tag's region is copied from its own backing buffer, so owned tags
/// and views over different records can be mixed freely.
pub fn serialize_tag_list(tags: &[Tag<'_>]) -> Vec<u8> {
    let length = tag_list_length(tags);
    let mut out = Vec::with_capacity(length);
    for tag in tags {
        out.extend_from_slice(tag.as_bytes());
    }
    trace!("serialized {} tags into {} bytes", tags.len(), out.len());
    out
}
