//! Primitive parsers for types, names, and literals.

use alloc::boxed::Box;
use alloc::string::{String, ToString};

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace1},
    combinator::{map, map_res},
    sequence::{pair, preceded, separated_pair},
    IResult,
};

use crate::types::Type;

/// Parse an unsigned integer literal
pub(crate) fn integer(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while1(|c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )(input)
}

/// Parse a name (alphanumeric or underscore)
pub(crate) fn identifier(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        |s: &str| s.to_string(),
    )(input)
}

/// Parse a reference type (`ref Name`)
pub(crate) fn parse_ref_type(input: &str) -> IResult<&str, Type> {
    map(
        preceded(pair(tag("ref"), multispace1), identifier),
        Type::Ref,
    )(input)
}

/// Parse a value type with its flattened size (`val Name:SIZE`)
pub(crate) fn parse_struct_type(input: &str) -> IResult<&str, Type> {
    map(
        preceded(
            pair(tag("val"), multispace1),
            separated_pair(identifier, char(':'), integer),
        ),
        |(name, size)| Type::Struct { name, size },
    )(input)
}

/// Parse a scalar type (i8..u64, f32, f64, bool, char)
fn parse_scalar_type(input: &str) -> IResult<&str, Type> {
    alt((
        map(tag("i8"), |_| Type::I8),
        map(tag("u8"), |_| Type::U8),
        map(tag("i16"), |_| Type::I16),
        map(tag("u16"), |_| Type::U16),
        map(tag("i32"), |_| Type::I32),
        map(tag("u32"), |_| Type::U32),
        map(tag("i64"), |_| Type::I64),
        map(tag("u64"), |_| Type::U64),
        map(tag("f32"), |_| Type::F32),
        map(tag("f64"), |_| Type::F64),
        map(tag("bool"), |_| Type::Bool),
        map(tag("char"), |_| Type::Char),
    ))(input)
}

/// Parse any type, including by-reference (`&T`)
pub(crate) fn parse_type(input: &str) -> IResult<&str, Type> {
    alt((
        map(preceded(char('&'), parse_type), |t| Type::ByRef(Box::new(t))),
        parse_ref_type,
        parse_struct_type,
        parse_scalar_type,
    ))(input)
}
