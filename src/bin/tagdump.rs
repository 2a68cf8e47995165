//! Print and validate cell tag lists.
//!
//! ```text
//! tagdump [TTL_MILLIS]      build a TTL tag (default 10000) and dump it
//! tagdump --hex HEX         parse a hex-encoded tag list and dump it
//! ```

use std::env;
use std::process;

use log::{info, warn};

use cell_tags::{
    build_time_to_live_tag, parse_tag_list, pretty, read_time_to_live, serialize_tag_list,
    validate_tag_list, TagType,
};

const DEFAULT_TTL_MILLIS: i64 = 10_000;

/// Decode a hex tag list, ignoring embedded whitespace.
fn decode_hex(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(s)
}

fn dump(wire: &[u8]) -> bool {
    println!("{}", pretty(wire));

    if let Err(e) = validate_tag_list(wire) {
        warn!("Tag list failed validation: {}", e);
        return false;
    }

    let tags = match parse_tag_list(wire, 0, wire.len()) {
        Ok(tags) => tags,
        Err(e) => {
            warn!("Failed to parse tag list: {}", e);
            return false;
        }
    };

    for tag in &tags {
        println!("@{:<5} {}", tag.offset(), tag);
        if tag.tag_type() == TagType::TTL {
            match read_time_to_live(tag) {
                Ok(ms) => println!("       ttl: {}ms", ms),
                Err(e) => warn!("Bad ttl tag at offset {}: {}", tag.offset(), e),
            }
        }
    }
    info!("{} tag(s) in {} bytes", tags.len(), wire.len());
    true
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let wire = match args.as_slice() {
        [] => serialize_tag_list(&[build_time_to_live_tag(DEFAULT_TTL_MILLIS)]),
        [flag, input] if flag == "--hex" => match decode_hex(input) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Invalid hex input {}: {}", input, e);
                process::exit(2);
            }
        },
        [millis] => match millis.parse::<i64>() {
            Ok(ms) => serialize_tag_list(&[build_time_to_live_tag(ms)]),
            Err(e) => {
                warn!("Invalid ttl {}: {}", millis, e);
                process::exit(2);
            }
        },
        _ => {
            eprintln!("usage: tagdump [TTL_MILLIS] | tagdump --hex HEX");
            process::exit(2);
        }
    };

    if !dump(&wire) {
        process::exit(1);
    }
}
