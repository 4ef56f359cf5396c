//! Argument-load lowering.

use alloc::format;

use mbc_meta::{align, MethodDescriptor};
use x86_asm::{AsmBuffer, Gpr, Width};

use crate::error::LoweringError;
use crate::frame::argument_displacement;
use crate::resolve::argument_type;

impl super::Lowerer {
    /// Lower an argument load: push the argument's value onto the operand
    /// stack in word-sized slots.
    ///
    /// Narrow integers (1 or 2 bytes) are widened to 32 bits through EAX
    /// with the type's signedness, so every operand-stack slot is
    /// word-sized. Everything else is pushed straight from the caller's
    /// argument area, one word at a time in descending address order, which
    /// leaves the lowest-address word on top and preserves the value's byte
    /// layout.
    pub(super) fn lower_ldarg(
        &self,
        asm: &mut AsmBuffer,
        method: &MethodDescriptor,
        index: u16,
    ) -> Result<(), LoweringError> {
        // Resolve everything before emitting anything, so a failed
        // occurrence leaves the buffer untouched.
        let displacement = argument_displacement(method, index)?;
        let ty = argument_type(method, index)?;
        let raw_size = ty.size_bytes();
        let aligned_size = align(raw_size, 4);
        if aligned_size == 0 {
            return Err(LoweringError::UnsupportedType {
                ty,
                reason: "zero-sized argument".into(),
            });
        }

        asm.comment(format!("arg {}", index));
        asm.comment(format!("arg type = {}", ty));
        asm.comment(format!("arg size = {} (aligned {})", raw_size, aligned_size));

        if ty.is_integral() && (raw_size == 1 || raw_size == 2) {
            let width = if raw_size == 1 {
                Width::Byte
            } else {
                Width::Word
            };
            if ty.is_signed() {
                asm.movsx(Gpr::EAX, Gpr::EBP, displacement, width);
            } else {
                asm.movzx(Gpr::EAX, Gpr::EBP, displacement, width);
            }
            asm.push_reg(Gpr::EAX);
        } else {
            for word in 0..aligned_size / 4 {
                asm.push_mem(Gpr::EBP, displacement - (word as i32) * 4);
            }
        }

        Ok(())
    }
}
