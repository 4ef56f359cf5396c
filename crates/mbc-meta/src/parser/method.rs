//! Parser for a single method signature.

use alloc::string::String;
use alloc::vec::Vec;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, multispace1},
    combinator::opt,
    multi::separated_list0,
    sequence::{pair, preceded, tuple},
    IResult,
};

use super::primitives::{identifier, parse_ref_type, parse_struct_type, parse_type};
use crate::types::Type;

/// Raw parse result, before validation against the descriptor model.
pub(crate) struct ParsedMethod {
    pub is_static: bool,
    pub name: String,
    pub params: Vec<Type>,
    pub ret: Option<Type>,
    pub declaring: Option<Type>,
}

/// A receiver type is a reference or value type, never a scalar.
fn parse_receiver_type(input: &str) -> IResult<&str, Type> {
    alt((parse_ref_type, parse_struct_type))(input)
}

/// Parse `[static] %name(type, ...) [-> type] [on receiver-type]`.
pub(crate) fn parse_method_internal(input: &str) -> IResult<&str, ParsedMethod> {
    let (input, is_static) = opt(pair(tag("static"), multispace1))(input)?;
    let (input, name) = preceded(char('%'), identifier)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('(')(input)?;
    let (input, params) = separated_list0(
        tuple((multispace0, char(','), multispace0)),
        preceded(multispace0, parse_type),
    )(input)?;
    let (input, _) = pair(multispace0, char(')'))(input)?;
    let (input, ret) = opt(preceded(
        tuple((multispace0, tag("->"), multispace0)),
        parse_type,
    ))(input)?;
    let (input, declaring) = opt(preceded(
        tuple((multispace1, tag("on"), multispace1)),
        parse_receiver_type,
    ))(input)?;

    Ok((
        input,
        ParsedMethod {
            is_static: is_static.is_some(),
            name,
            params,
            ret,
            declaring,
        },
    ))
}
