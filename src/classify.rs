//! Calling-convention classification.
//!
//! An eligible native function reports errors in exactly one of two ways:
//! by returning the status directly, or by writing it through a trailing
//! `*mut cl_int` parameter while returning the produced value. A function
//! returning the status type is always `ReturnsErrorCode`, even when its
//! last parameter happens to be a status pointer too; that precedence is
//! what keeps a both-shaped signature unambiguous.

use thiserror::Error;

use crate::signature::FunctionSignature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallingConvention {
    /// The function returns the native status directly.
    ReturnsErrorCode,
    /// The function returns a value and writes the status through its last
    /// parameter.
    OutputsErrorViaPointer,
}

/// The signature matches neither convention; no wrapper can be synthesized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "function returning `{}` matches neither status-reporting convention",
    .signature.return_type.name()
)]
pub struct Ineligible {
    pub signature: FunctionSignature,
}

/// Pure classification of an introspected signature.
pub fn classify(sig: &FunctionSignature) -> Result<CallingConvention, Ineligible> {
    if sig.return_type.is_status() {
        return Ok(CallingConvention::ReturnsErrorCode);
    }

    if sig.last_param().is_some_and(|p| p.is_status_pointer()) {
        return Ok(CallingConvention::OutputsErrorViaPointer);
    }

    Err(Ineligible {
        signature: sig.clone(),
    })
}

mod sealed {
    pub trait Sealed {}
}

/// Return types an `OutputsErrorViaPointer` function may declare.
///
/// Sealed, and deliberately not implemented for `cl_int`: a function
/// returning the status type is classified `ReturnsErrorCode` regardless of
/// its parameters, so the value-returning wrapper shape must not be
/// synthesizable for it. OpenCL's creation entry points (`clCreate*`)
/// return object handles (raw pointers) or wide scalars; that is the whole
/// set.
pub trait ValueReturn: sealed::Sealed + Copy + 'static {}

impl<T: 'static> sealed::Sealed for *mut T {}
impl<T: 'static> ValueReturn for *mut T {}

impl<T: 'static> sealed::Sealed for *const T {}
impl<T: 'static> ValueReturn for *const T {}

impl sealed::Sealed for u64 {}
impl ValueReturn for u64 {}

impl sealed::Sealed for usize {}
impl ValueReturn for usize {}
