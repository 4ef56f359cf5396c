//! x86 32-bit target for the managed-bytecode compiler.
//!
//! This crate implements argument addressing for the target's fixed calling
//! convention:
//! - Stack-frame layout (frame-pointer-relative argument displacements)
//! - Argument type resolution (implicit receiver, plugs)
//! - Lowering of argument-load operations to x86 instructions

#![no_std]

extern crate alloc;

mod debug;
mod error;
mod frame;
mod lower;
mod resolve;

pub use error::{CompileError, LoweringError};
pub use frame::argument_displacement;
pub use lower::Lowerer;
pub use resolve::argument_type;
