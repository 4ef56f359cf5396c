//! Argument type resolution.

use alloc::boxed::Box;

use mbc_meta::{MethodDescriptor, Type};

use crate::error::LoweringError;

/// Resolve the type of the argument at `index` in the bytecode's view.
///
/// Index 0 names the implicit receiver for instance methods. A value-type
/// receiver is always passed as a pointer to the value, never by copy, so it
/// resolves to a by-reference type. If the descriptor carries a plug, the
/// plug's signature is used exclusively.
pub fn argument_type(method: &MethodDescriptor, index: u16) -> Result<Type, LoweringError> {
    let method = method.effective();
    let out_of_range = || LoweringError::IndexOutOfRange {
        index,
        param_count: method.param_count(),
        is_static: method.is_static(),
    };

    match &method.declaring {
        None => method
            .params
            .get(index as usize)
            .cloned()
            .ok_or_else(out_of_range),
        Some(declaring) => {
            if index == 0 {
                if declaring.is_value_type() {
                    Ok(Type::ByRef(Box::new(declaring.clone())))
                } else {
                    Ok(declaring.clone())
                }
            } else {
                method
                    .params
                    .get(index as usize - 1)
                    .cloned()
                    .ok_or_else(out_of_range)
            }
        }
    }
}
