//! Parser for method signature text.
//!
//! The format mirrors how descriptors print:
//!
//! ```text
//! static %add(i32, i32) -> i32
//! %length() -> i32 on ref String
//! %area(val Point:12) -> f32 on val Rect:16
//! ```
//!
//! Methods are static unless an `on` clause names a receiver type; the
//! `static` keyword is accepted for clarity and rejected when combined with
//! a receiver.

mod error;
mod method;
mod primitives;

use error::parse_error;
pub use error::ParseError;
use method::parse_method_internal;

use crate::descriptor::MethodDescriptor;

/// Parse a method descriptor from signature text.
pub fn parse_method(input: &str) -> Result<MethodDescriptor, ParseError> {
    let trimmed = input.trim();
    match parse_method_internal(trimmed) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(parse_error(
                    trimmed,
                    remaining,
                    &alloc::format!("Unexpected input remaining: {}", remaining),
                ));
            }
            if parsed.is_static && parsed.declaring.is_some() {
                return Err(parse_error(
                    trimmed,
                    "",
                    "static method cannot declare a receiver type",
                ));
            }
            Ok(MethodDescriptor {
                name: parsed.name,
                params: parsed.params,
                ret: parsed.ret,
                declaring: parsed.declaring,
                plugged: None,
            })
        }
        Err(e) => Err(parse_error(
            trimmed,
            trimmed,
            &alloc::format!("Parse error: {:?}", e),
        )),
    }
}
