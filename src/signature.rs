//! Function-signature introspection.
//!
//! Every wrappable entry point is a plain, non-overloaded C function pointer.
//! The [`Signature`] trait is implemented for `unsafe extern "C" fn` pointer
//! types up to arity 10 and exposes the return type plus an ordered runtime
//! description of the parameter list. Anything that is not such a pointer
//! (closures, methods, overload tricks) simply does not implement the trait,
//! so non-eligibility is a build-time condition, never a runtime one.
//!
//! Monomorphization instantiates `signature()` once per function pointer
//! type; no per-identity registry is needed.

use std::any::{TypeId, type_name};

use crate::cl;

/// One parameter (or return) type: identity plus a diagnostic name.
///
/// Equality is by type identity; the name is only for messages.
#[derive(Debug, Clone, Copy)]
pub struct ParamType {
    id: TypeId,
    name: &'static str,
}

impl ParamType {
    pub fn of<T: 'static>() -> Self {
        ParamType {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True iff this is the native status type itself.
    pub fn is_status(&self) -> bool {
        self.id == TypeId::of::<cl::cl_int>()
    }

    /// True iff this is a mutable pointer to the native status type.
    pub fn is_status_pointer(&self) -> bool {
        self.id == TypeId::of::<*mut cl::cl_int>()
    }
}

impl PartialEq for ParamType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ParamType {}

/// The introspected shape of one native function: return type, noexcept-ness
/// and the ordered parameter list. Immutable once derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub return_type: ParamType,
    /// C entry points never unwind; always true by domain assumption.
    pub is_noexcept: bool,
    pub params: Vec<ParamType>,
}

impl FunctionSignature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn last_param(&self) -> Option<&ParamType> {
        self.params.last()
    }
}

/// Implemented for every plain C function pointer type the engine can wrap.
pub trait Signature: Copy + 'static {
    type Ret: 'static;
    const ARITY: usize;

    fn signature() -> FunctionSignature;
}

macro_rules! impl_signature {
    ($($p:ident),*) => {
        impl<R: 'static, $($p: 'static),*> Signature
            for unsafe extern "C" fn($($p),*) -> R
        {
            type Ret = R;
            const ARITY: usize = {
                let names: &[&str] = &[$(stringify!($p)),*];
                names.len()
            };

            fn signature() -> FunctionSignature {
                FunctionSignature {
                    return_type: ParamType::of::<R>(),
                    is_noexcept: true,
                    params: vec![$(ParamType::of::<$p>()),*],
                }
            }
        }
    };
}

impl_signature!();
impl_signature!(P1);
impl_signature!(P1, P2);
impl_signature!(P1, P2, P3);
impl_signature!(P1, P2, P3, P4);
impl_signature!(P1, P2, P3, P4, P5);
impl_signature!(P1, P2, P3, P4, P5, P6);
impl_signature!(P1, P2, P3, P4, P5, P6, P7);
impl_signature!(P1, P2, P3, P4, P5, P6, P7, P8);
impl_signature!(P1, P2, P3, P4, P5, P6, P7, P8, P9);
impl_signature!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10);
// One past the wrapper arity limit: the value-returning wrapper shape
// appends its status-pointer parameter before introspecting.
impl_signature!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11);
