//! Time-to-live tags.
//!
//! Payload is the TTL in milliseconds as an i64, big-endian, 8 bytes.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::*;
use crate::encode::encode_owned;
use crate::errors::*;
use crate::tag::{Tag, TagType};

/// Build a TTL tag carrying `ttl_millis`.
pub fn build_time_to_live_tag(ttl_millis: i64) -> Tag<'static> {
    let mut payload = [0u8; TTL_PAYLOAD_SIZE];
    BigEndian::write_i64(&mut payload, ttl_millis);
    encode_owned(TagType::TTL, &payload)
}

/// Decode the millisecond TTL carried by `tag`.
///
/// Fails with `ERR_INVALID_ARGUMENT` if `tag` is not a TTL tag or its
/// payload is not exactly 8 bytes.
pub fn read_time_to_live(tag: &Tag<'_>) -> Result<i64, TagError> {
    if tag.tag_type() != TagType::TTL {
        return Err(TagError::invalid_argument(format!(
            "expected a ttl tag, found {}",
            tag.tag_type()
        )));
    }
    let payload = tag.payload();
    if payload.len() != TTL_PAYLOAD_SIZE {
        return Err(TagError::invalid_argument(format!(
            "ttl payload must be {} bytes, found {}",
            TTL_PAYLOAD_SIZE,
            payload.len()
        )));
    }
    Ok(BigEndian::read_i64(payload))
}

/// TTL of the first TTL tag in `tags`, if there is one.
pub fn find_time_to_live(tags: &[Tag<'_>]) -> Option<Result<i64, TagError>> {
    tags.iter()
        .find(|t| t.tag_type() == TagType::TTL)
        .map(read_time_to_live)
}
