//! Lowering of bytecode operations to x86-32 instructions.

mod ldarg;

use mbc_meta::{MethodDescriptor, Op};
use x86_asm::AsmBuffer;

use crate::error::{CompileError, LoweringError};

/// Lowers bytecode operations to x86 instructions, one method at a time.
///
/// Dispatch is a match over the closed [`Op`] set; the short-form argument
/// loads canonicalize to their fixed index and share the long form's
/// handler.
pub struct Lowerer;

impl Lowerer {
    /// Create a new lowerer.
    pub fn new() -> Self {
        Self
    }

    /// Lower a single operation into `asm`.
    ///
    /// Emission is all-or-nothing per operation: on error, nothing has been
    /// emitted for this occurrence.
    pub fn lower_op(
        &self,
        asm: &mut AsmBuffer,
        method: &MethodDescriptor,
        op: Op,
    ) -> Result<(), LoweringError> {
        match op {
            Op::Ldarg(index) => self.lower_ldarg(asm, method, index),
            Op::Ldarg0 => self.lower_ldarg(asm, method, 0),
            Op::Ldarg1 => self.lower_ldarg(asm, method, 1),
            Op::Ldarg2 => self.lower_ldarg(asm, method, 2),
            Op::Ldarg3 => self.lower_ldarg(asm, method, 3),
        }
    }

    /// Lower a method's operations in program order.
    ///
    /// The first failure aborts the method; the error is tagged with the
    /// method name and the offending operation's program-order offset.
    pub fn lower_method(
        &self,
        method: &MethodDescriptor,
        ops: &[Op],
    ) -> Result<AsmBuffer, CompileError> {
        // Plugs resolve one level; a plug carrying its own plug means the
        // metadata pipeline produced an inconsistent descriptor.
        if let Some(plug) = &method.plugged {
            if plug.plugged.is_some() {
                return Err(CompileError {
                    method: method.name.clone(),
                    offset: 0,
                    error: LoweringError::Configuration {
                        message: "plugged descriptor itself carries a plug".into(),
                    },
                });
            }
        }

        let mut asm = AsmBuffer::new();
        for (offset, op) in ops.iter().enumerate() {
            self.lower_op(&mut asm, method, *op)
                .map_err(|error| CompileError {
                    method: method.name.clone(),
                    offset: offset as u32,
                    error,
                })?;
        }
        Ok(asm)
    }
}

impl Default for Lowerer {
    fn default() -> Self {
        Self::new()
    }
}
