//! Cell tag framing constants — header sizes, the payload ceiling, and the
//! well-known tag type codes.
//!
//! Wire layout of one tag (big-endian):
//!
//! ```text
//! [0..2)  u16  payload_length_plus_one   (the +1 counts the type byte)
//! [2]     u8   tag_type
//! [3..)   payload
//! ```

/// Size of the 16-bit length field.
pub const TAG_LENGTH_HEADER_SIZE: usize = 2;

/// Size of the type byte.
pub const TAG_TYPE_HEADER_SIZE: usize = 1;

/// Full per-tag header: length field plus type byte.
pub const TAG_HEADER_SIZE: usize = TAG_LENGTH_HEADER_SIZE + TAG_TYPE_HEADER_SIZE;

/// Largest payload a single tag may carry.
///
/// Derived from the signed 16-bit range, `2 * i16::MAX + 1 - 1`.  The length
/// field could represent one more byte, but 65534 is the hard ceiling every
/// producer and consumer of the format agrees on.
pub const MAX_TAG_DATA_LENGTH: usize = 2 * (i16::MAX as usize) + 1 - TAG_TYPE_HEADER_SIZE;

// ── Tag type codes ───────────────────────────────────────────
// The set is open: values not listed here are carried through untouched.
// Code 3 (log replay) is retired and must never be reassigned.

pub const ACL_TAG_TYPE: u8 = 1;
pub const VISIBILITY_TAG_TYPE: u8 = 2;
pub const VISIBILITY_EXP_SERIALIZATION_FORMAT_TAG_TYPE: u8 = 4;
pub const STRING_VIS_TAG_TYPE: u8 = 7;
/// Payload is an i64 big-endian duration in milliseconds, always 8 bytes.
pub const TTL_TAG_TYPE: u8 = 8;

/// Retired log-replay code.  Kept so nothing reuses it.
pub const RETIRED_LOG_REPLAY_TAG_TYPE: u8 = 3;

/// Byte length of a TTL payload.
pub const TTL_PAYLOAD_SIZE: usize = 8;
