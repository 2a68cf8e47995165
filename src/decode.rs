//! Tag decoder — zero-copy views over caller buffers and tag-list walking.
//!
//! Nothing here copies payload bytes.  Every `Tag` produced borrows the
//! input buffer and reads from it on access.
//!
//! The 16-bit length field is always read unsigned.  Reading it signed
//! would turn any field above 0x7FFF into a negative length and corrupt
//! every tag after it.

use std::iter::FusedIterator;

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use crate::constants::*;
use crate::errors::*;
use crate::tag::{Storage, Tag, TagType};

/// Read the unsigned length field at `off`, if two bytes are available.
#[inline]
fn read_length_field(buf: &[u8], off: usize) -> Option<usize> {
    let end = off.checked_add(TAG_LENGTH_HEADER_SIZE)?;
    if end > buf.len() {
        return None;
    }
    Some(BigEndian::read_u16(&buf[off..end]) as usize)
}

/// View the tag at `offset` whose total size (header included) is
/// `total_length`.
///
/// Fails with `ERR_INVALID_ARGUMENT` when the payload portion exceeds
/// `MAX_TAG_DATA_LENGTH`, when `total_length` cannot hold a header, or when
/// the region runs past the end of `buffer`.
pub fn view_tag_with_length(
    buffer: &[u8],
    offset: usize,
    total_length: usize,
) -> Result<Tag<'_>, TagError> {
    if total_length < TAG_HEADER_SIZE {
        return Err(TagError::invalid_argument(format!(
            "tag length {} is shorter than the {}-byte header",
            total_length, TAG_HEADER_SIZE
        )));
    }
    if total_length - TAG_HEADER_SIZE > MAX_TAG_DATA_LENGTH {
        return Err(TagError::invalid_argument(format!(
            "invalid tag data being passed, its length can not exceed {}",
            MAX_TAG_DATA_LENGTH
        )));
    }
    match offset.checked_add(total_length) {
        Some(end) if end <= buffer.len() => {}
        _ => {
            return Err(TagError::invalid_argument(format!(
                "tag at offset {} with length {} exceeds buffer of {} bytes",
                offset,
                total_length,
                buffer.len()
            )));
        }
    }

    let tag_type = TagType(buffer[offset + TAG_LENGTH_HEADER_SIZE]);
    Ok(Tag::from_parts(
        Storage::Borrowed(buffer),
        offset,
        total_length,
        tag_type,
    ))
}

/// View the tag at `offset`, taking its size from its own length field.
pub fn view_tag(buffer: &[u8], offset: usize) -> Result<Tag<'_>, TagError> {
    let field = read_length_field(buffer, offset).ok_or_else(|| {
        TagError::invalid_argument(format!("no tag length field at offset {}", offset))
    })?;
    view_tag_with_length(buffer, offset, TAG_LENGTH_HEADER_SIZE + field)
}

/// Lazy walk over a tag-list region, yielding one view per tag.
///
/// Stops for good after the first error.
pub struct TagListIter<'a> {
    buffer: &'a [u8],
    pos: usize,
    end: usize,
    failed: bool,
}

impl<'a> TagListIter<'a> {
    /// Walk `buffer[offset..offset + length]`.
    ///
    /// Fails with `ERR_MALFORMED_TAG_LIST` if the region is not inside the
    /// buffer.
    pub fn new(buffer: &'a [u8], offset: usize, length: usize) -> Result<Self, TagError> {
        let end = match offset.checked_add(length) {
            Some(end) if end <= buffer.len() => end,
            _ => {
                debug!(
                    "tag list region {}+{} outside buffer of {} bytes",
                    offset,
                    length,
                    buffer.len()
                );
                return Err(TagError::malformed(format!(
                    "tag list region {}+{} exceeds buffer of {} bytes",
                    offset,
                    length,
                    buffer.len()
                )));
            }
        };
        Ok(Self {
            buffer,
            pos: offset,
            end,
            failed: false,
        })
    }

    /// Cursor position within the backing buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn step(&mut self) -> Result<Tag<'a>, TagError> {
        let remaining = self.end - self.pos;
        let field = match read_length_field(&self.buffer[..self.end], self.pos) {
            Some(field) => field,
            None => {
                return Err(TagError::malformed(format!(
                    "{} trailing byte(s) at offset {} do not form a tag",
                    remaining, self.pos
                )));
            }
        };
        if field == 0 {
            return Err(TagError::malformed(format!(
                "zero length field at offset {}",
                self.pos
            )));
        }

        let total_length = TAG_LENGTH_HEADER_SIZE + field;
        if total_length > remaining {
            return Err(TagError::malformed(format!(
                "tag at offset {} declares {} bytes but only {} remain",
                self.pos, total_length, remaining
            )));
        }

        let tag = view_tag_with_length(self.buffer, self.pos, total_length)?;
        self.pos += total_length;
        Ok(tag)
    }
}

impl<'a> Iterator for TagListIter<'a> {
    type Item = Result<Tag<'a>, TagError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos == self.end {
            return None;
        }
        let result = self.step();
        if let Err(ref e) = result {
            debug!("tag list walk stopped: {}", e);
            self.failed = true;
        }
        Some(result)
    }
}

impl FusedIterator for TagListIter<'_> {}

/// Slice `buffer[offset..offset + length]` into tag views, in wire order.
///
/// Fails with `ERR_MALFORMED_TAG_LIST` if any tag is truncated, runs past
/// the region end, or if the walk does not land exactly on the region end.
pub fn parse_tag_list(buffer: &[u8], offset: usize, length: usize) -> Result<Vec<Tag<'_>>, TagError> {
    let tags = TagListIter::new(buffer, offset, length)?.collect::<Result<Vec<_>, _>>()?;
    trace!(
        "parsed {} tags from {} bytes at offset {}",
        tags.len(),
        length,
        offset
    );
    Ok(tags)
}

/// Check that `buffer` holds nothing but complete tags.
///
/// Lengths are checked per tag against the bytes remaining from the cursor.
/// Every fault is structural and fails with `ERR_MALFORMED_TAG_LIST`; the
/// u16 length field cannot declare a payload above `MAX_TAG_DATA_LENGTH`,
/// so the payload ceiling never trips here.
pub fn validate_tag_list(buffer: &[u8]) -> Result<(), TagError> {
    let length = buffer.len();
    let mut pos = 0;
    let mut count = 0usize;
    while pos < length {
        let field = read_length_field(buffer, pos).ok_or_else(|| {
            TagError::malformed(format!(
                "{} trailing byte(s) at offset {} do not form a tag",
                length - pos,
                pos
            ))
        })?;
        if field == 0 {
            return Err(TagError::malformed(format!(
                "zero length field at offset {}",
                pos
            )));
        }
        // field <= u16::MAX, so the payload is at most MAX_TAG_DATA_LENGTH.
        pos += TAG_LENGTH_HEADER_SIZE + field;
        if pos > length {
            debug!("tag ending at {} overruns buffer of {} bytes", pos, length);
            return Err(TagError::malformed(
                "encoded tag exceeds length of backing byte array",
            ));
        }
        count += 1;
    }
    trace!("validated {} tags in {} bytes", count, length);
    Ok(())
}
