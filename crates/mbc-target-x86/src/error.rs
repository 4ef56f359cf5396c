//! Error types for argument lowering.

use alloc::string::String;
use core::fmt;

use mbc_meta::Type;

/// Errors that can occur while lowering an argument access.
///
/// Every variant indicates inconsistent metadata produced earlier in the
/// pipeline; none are recoverable at this layer, and no instructions are
/// emitted for the failing occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoweringError {
    /// Decoded argument index outside the effective signature.
    IndexOutOfRange {
        index: u16,
        param_count: usize,
        is_static: bool,
    },
    /// A type this target cannot pass as an argument.
    UnsupportedType { ty: Type, reason: String },
    /// Descriptor state that violates the lowering contract.
    Configuration { message: String },
}

impl fmt::Display for LoweringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoweringError::IndexOutOfRange {
                index,
                param_count,
                is_static,
            } => {
                let kind = if *is_static { "static" } else { "instance" };
                write!(
                    f,
                    "argument index {} out of range for {} method with {} parameter(s)",
                    index, kind, param_count
                )
            }
            LoweringError::UnsupportedType { ty, reason } => {
                write!(f, "unsupported argument type {}: {}", ty, reason)
            }
            LoweringError::Configuration { message } => {
                write!(f, "descriptor configuration error: {}", message)
            }
        }
    }
}

impl core::error::Error for LoweringError {}

/// A lowering failure tagged with the originating method and operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    /// Name of the method being compiled.
    pub method: String,
    /// Program-order offset of the offending bytecode operation.
    pub offset: u32,
    /// The underlying failure.
    pub error: LoweringError,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in method %{} at op {}: {}",
            self.method, self.offset, self.error
        )
    }
}

impl core::error::Error for CompileError {}
