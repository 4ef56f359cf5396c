//! Stack-frame layout for the x86-32 calling convention.
//!
//! The caller pushes arguments right to left, so the physical order on the
//! stack is the reverse of the logical order. On entry to the callee the
//! frame looks like this (addresses grow downward):
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Argument 0 (+ receiver, if any)    │  high addresses
//! ├─────────────────────────────────────┤
//! │  ...                                │
//! ├─────────────────────────────────────┤
//! │  Argument N-1                       │
//! ├─────────────────────────────────────┤
//! │  Return-value reserve (if needed)   │
//! ├─────────────────────────────────────┤
//! │  Return address                     │
//! ├─────────────────────────────────────┤
//! │  Saved frame pointer                │  ← EBP
//! └─────────────────────────────────────┘
//! ```
//!
//! Every slot is aligned to 4 bytes. When the return value is larger than
//! the combined argument area, the caller reserves the difference between
//! the arguments and the return address, and every displacement accounts
//! for it.

use mbc_meta::{align, MethodDescriptor};

use crate::error::LoweringError;

/// Compute the frame-pointer-relative byte offset at which the argument at
/// `index` resides on entry to the method.
///
/// `index` is the bytecode's logical index: for instance methods, index 0 is
/// the implicit receiver and the declared parameters start at 1. If the
/// descriptor carries a plug, the plug's signature is used exclusively.
///
/// This is a pure function of the descriptor and index; it holds no state
/// and may be called repeatedly with identical results.
pub fn argument_displacement(method: &MethodDescriptor, index: u16) -> Result<i32, LoweringError> {
    let method = method.effective();

    let return_size = method
        .ret
        .as_ref()
        .map(|t| align(t.size_bytes(), 4))
        .unwrap_or(0);

    // Value-type receivers are passed as a pointer to the value, reference
    // receivers as the reference itself.
    let receiver_size = method.declaring.as_ref().map(|d| {
        if d.is_value_type() {
            4
        } else {
            align(d.size_bytes(), 4)
        }
    });

    let params_size: u32 = method
        .params
        .iter()
        .map(|p| align(p.size_bytes(), 4))
        .sum();
    let total_arg_size = params_size + receiver_size.unwrap_or(0);

    // Saved return address and saved frame pointer sit between EBP and the
    // argument area.
    let mut offset: u32 = 8;
    let own_size;

    match receiver_size {
        Some(receiver) if index == 0 => {
            // The receiver is not in the parameter list; every declared
            // parameter sits between it and the return address.
            own_size = receiver;
            offset += params_size;
            if return_size > total_arg_size {
                offset += return_size - own_size;
            }
        }
        _ => {
            // The receiver, when present, occupies logical index 0 but is
            // absent from the parameter array.
            let array_index = if method.is_static() {
                index as usize
            } else {
                index as usize - 1
            };
            let param =
                method
                    .params
                    .get(array_index)
                    .ok_or_else(|| LoweringError::IndexOutOfRange {
                        index,
                        param_count: method.param_count(),
                        is_static: method.is_static(),
                    })?;
            own_size = align(param.size_bytes(), 4);
            // Parameters pushed after this one sit between it and the
            // return address.
            for later in &method.params[array_index + 1..] {
                offset += align(later.size_bytes(), 4);
            }
            if return_size > total_arg_size {
                offset += return_size - total_arg_size;
            }
        }
    }

    crate::debug_lowering!(
        "argument_displacement(%{}, index={}): offset={}, own={}, return={}, total={}",
        method.name,
        index,
        offset,
        own_size,
        return_size,
        total_arg_size
    );

    // The displacement addresses the argument's first byte: the top of its
    // slot minus one word.
    Ok((offset + own_size - 4) as i32)
}

#[cfg(test)]
mod tests {
    use mbc_meta::parse_method;

    use super::*;

    fn disp(signature: &str, index: u16) -> i32 {
        let method = parse_method(signature).expect("Failed to parse signature");
        argument_displacement(&method, index).expect("Failed to compute displacement")
    }

    #[test]
    fn test_two_word_args_reverse_order() {
        // Later-declared parameter sits closer to the return address
        assert_eq!(disp("static %add(i32, i32) -> i32", 1), 8);
        assert_eq!(disp("static %add(i32, i32) -> i32", 0), 12);
    }

    #[test]
    fn test_oversized_return_pads_argument() {
        // 8-byte return > 4-byte argument area: 4 bytes of reserve sit
        // between the argument and the return address
        assert_eq!(disp("static %convert(i32) -> i64", 0), 12);
    }

    #[test]
    fn test_value_type_receiver_no_params() {
        assert_eq!(disp("%reset() on val Point:12", 0), 8);
    }

    #[test]
    fn test_reference_receiver_with_param() {
        assert_eq!(disp("%set(i32) on ref Counter", 0), 12);
        assert_eq!(disp("%set(i32) on ref Counter", 1), 8);
    }

    #[test]
    fn test_wide_argument() {
        let sig = "static %p(i64, i32)";
        assert_eq!(disp(sig, 1), 8);
        // The i64 occupies two words behind the i32
        assert_eq!(disp(sig, 0), 16);
    }

    #[test]
    fn test_large_value_type_argument() {
        let sig = "static %h(val M:12, i32)";
        assert_eq!(disp(sig, 1), 8);
        assert_eq!(disp(sig, 0), 20);
    }

    #[test]
    fn test_oversized_return_with_params() {
        // return 16 > args 8: both parameters shift outward by 8
        let sig = "static %c(i32, i32) -> val Big:16";
        assert_eq!(disp(sig, 1), 16);
        assert_eq!(disp(sig, 0), 20);
    }

    #[test]
    fn test_oversized_return_with_value_type_receiver() {
        // Receiver pointer (4) is the whole argument area; return 16 carves
        // 12 extra bytes beyond it
        assert_eq!(disp("%snap() -> val Rect:16 on val Point:8", 0), 20);
    }

    #[test]
    fn test_oversized_return_receiver_and_wide_param() {
        // Directed test for the combined shape: value-type receiver,
        // >4-byte value-type parameter, oversized return
        let sig = "%fill(val M:8) -> val R:24 on val V:4";
        assert_eq!(disp(sig, 0), 36);
        assert_eq!(disp(sig, 1), 24);
    }

    #[test]
    fn test_displacement_is_pure() {
        let method = parse_method("static %add(i32, i32) -> i32").unwrap();
        let first = argument_displacement(&method, 0).unwrap();
        let second = argument_displacement(&method, 0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_receiver_index_on_static_method() {
        let method = parse_method("static %f()").unwrap();
        let err = argument_displacement(&method, 0).unwrap_err();
        assert_eq!(
            err,
            LoweringError::IndexOutOfRange {
                index: 0,
                param_count: 0,
                is_static: true,
            }
        );
    }

    #[test]
    fn test_index_past_parameter_count() {
        let method = parse_method("static %add(i32, i32) -> i32").unwrap();
        assert!(argument_displacement(&method, 2).is_err());

        let method = parse_method("%set(i32) on ref Counter").unwrap();
        assert!(argument_displacement(&method, 2).is_err());
    }

    #[test]
    fn test_plug_signature_drives_layout() {
        let plug = parse_method("static %f_impl(i32, i32) -> i32").unwrap();
        let method = parse_method("static %f(i32) -> i32")
            .unwrap()
            .with_plug(plug);

        // The logical signature has one parameter; the plug has two
        assert_eq!(argument_displacement(&method, 1).unwrap(), 8);
        assert_eq!(argument_displacement(&method, 0).unwrap(), 12);
    }

    #[test]
    fn test_plug_changes_staticness() {
        // A plug may replace an instance method with a static one taking the
        // receiver explicitly; index 0 then addresses the plug's first
        // parameter
        let plug = parse_method("static %len_impl(ref String) -> i32").unwrap();
        let method = parse_method("%len() -> i32 on ref String")
            .unwrap()
            .with_plug(plug);
        assert_eq!(argument_displacement(&method, 0).unwrap(), 8);
        assert!(argument_displacement(&method, 1).is_err());
    }
}
