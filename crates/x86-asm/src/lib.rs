//! x86 32-bit assembly surface for the managed-bytecode compiler.
//!
//! This crate provides:
//! - General-purpose registers (eax, ebp, ...)
//! - The instruction forms the lowering stages emit (push, movsx, movzx)
//! - `AsmBuffer`, the instruction sink that accumulates emitted instructions
//!
//! Binary encoding is out of scope here; instructions carry their operands
//! symbolically and render as listing text for diagnostics and tests.

#![no_std]

extern crate alloc;

mod buffer;
mod inst;
mod regs;

pub use buffer::AsmBuffer;
pub use inst::{Inst, Width};
pub use regs::Gpr;
