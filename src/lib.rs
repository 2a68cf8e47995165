//! # cell-tags — typed metadata tags for stored cells
//!
//! A tag is a small typed blob (time-to-live, ACL, visibility label)
//! attached to a cell.  Tags travel as a header-less list embedded in a
//! larger record; parsing that list hands back views into the record
//! buffer without copying any payload.
//!
//! ```
//! use cell_tags::{build_text_tag, build_time_to_live_tag, parse_tag_list,
//!                 serialize_tag_list, TagType};
//!
//! let tags = vec![
//!     build_time_to_live_tag(10_000),
//!     build_text_tag(TagType::STRING_VIS, "secret&ops").unwrap(),
//! ];
//! let wire = serialize_tag_list(&tags);
//!
//! let parsed = parse_tag_list(&wire, 0, wire.len()).unwrap();
//! assert_eq!(parsed, tags);
//! assert_eq!(parsed[0].tag_type(), TagType::TTL);
//! ```

pub mod constants;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod tag;
pub mod ttl;

pub use constants::MAX_TAG_DATA_LENGTH;
pub use decode::{parse_tag_list, validate_tag_list, view_tag, view_tag_with_length, TagListIter};
pub use encode::{build_tag, build_text_tag, serialize_tag_list, tag_list_length};
pub use errors::{TagError, ERR_INVALID_ARGUMENT, ERR_MALFORMED_TAG_LIST};
pub use tag::{pretty, Tag, TagType};
pub use ttl::{build_time_to_live_tag, find_time_to_live, read_time_to_live};
