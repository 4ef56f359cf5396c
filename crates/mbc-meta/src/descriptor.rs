//! Method descriptors.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::types::Type;

/// Immutable description of a method's native signature.
///
/// `params` lists the declared parameters in logical order and never includes
/// the implicit receiver; instance methods carry their declaring type in
/// `declaring` instead. If `plugged` is set, the method's body is substituted
/// at compile time and all layout and type resolution must use the plug's
/// signature, which may differ from the logical one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Method name, for diagnostics.
    pub name: String,
    /// Declared parameter types in logical order, receiver excluded.
    pub params: Vec<Type>,
    /// Return type, `None` for void.
    pub ret: Option<Type>,
    /// Declaring type for instance methods, `None` for static methods.
    pub declaring: Option<Type>,
    /// Substituted descriptor whose native signature replaces this one.
    pub plugged: Option<Box<MethodDescriptor>>,
}

impl MethodDescriptor {
    /// Create a static method descriptor.
    pub fn new_static(name: impl Into<String>, params: Vec<Type>, ret: Option<Type>) -> Self {
        Self {
            name: name.into(),
            params,
            ret,
            declaring: None,
            plugged: None,
        }
    }

    /// Create an instance method descriptor on the given declaring type.
    pub fn new_instance(
        name: impl Into<String>,
        declaring: Type,
        params: Vec<Type>,
        ret: Option<Type>,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            ret,
            declaring: Some(declaring),
            plugged: None,
        }
    }

    /// Attach a plug whose native signature replaces this method's.
    pub fn with_plug(mut self, plug: MethodDescriptor) -> Self {
        self.plugged = Some(Box::new(plug));
        self
    }

    /// Whether this method has no implicit receiver.
    pub fn is_static(&self) -> bool {
        self.declaring.is_none()
    }

    /// Get the number of declared parameters (receiver excluded).
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Resolve the descriptor layout and type resolution must use: the plug
    /// if one is attached, otherwise this descriptor itself.
    pub fn effective(&self) -> &MethodDescriptor {
        self.plugged.as_deref().unwrap_or(self)
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static() {
            write!(f, "static ")?;
        }
        write!(f, "%{}(", self.name)?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, ")")?;
        if let Some(ret) = &self.ret {
            write!(f, " -> {}", ret)?;
        }
        if let Some(declaring) = &self.declaring {
            write!(f, " on {}", declaring)?;
        }
        Ok(())
    }
}
