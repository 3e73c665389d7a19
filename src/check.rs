//! Checked-call wrapper synthesis.
//!
//! [`Checked`] binds exactly one native function. Which call protocol it
//! gets is decided by the function's own shape: functions returning the
//! status type get `call(args..) -> Result<()>`, functions writing the
//! status through a trailing `*mut cl_int` get `call(args..) -> Result<R>`
//! with that trailing parameter removed from the public list (the wrapper
//! passes its own status slot). A function matching neither shape has no
//! `call` at all, so ineligibility is a build failure, not a runtime error.
//!
//! Wrappers are stateless `Copy` values; calling one is a single native
//! call plus the status check, reentrant and safe to share across threads
//! to the extent the native function itself is.

use crate::cl::{self, cl_int};
use crate::classify::{CallingConvention, ValueReturn};
use crate::diag::{self, CallSite, LoggingPolicy};
use crate::error::{ErrorCode, Result};
use crate::pass::ForwardArg;
use crate::signature::{FunctionSignature, Signature};

/// A checked wrapper around one native function.
///
/// A function matching neither status-reporting convention gets no `call`
/// at all; trying to invoke one is rejected at build time:
///
/// ```compile_fail
/// use clcheck::cl::{cl_mem, cl_uint};
/// use clcheck::checked;
///
/// unsafe extern "C" fn clOddball(_: *mut cl_uint) -> cl_mem {
///     std::ptr::null_mut()
/// }
///
/// let oddball = checked!(clOddball: unsafe extern "C" fn(*mut cl_uint) -> cl_mem);
/// // Returns a handle but reports no status anywhere: no `call` exists.
/// let _ = oddball.call(std::ptr::null_mut::<cl_uint>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Checked<F> {
    api: F,
    name: &'static str,
}

impl<F: Copy> Checked<F> {
    /// Binds a native function under its own name.
    ///
    /// Prefer [`checked!`](crate::checked); it derives `name` from the
    /// function identity token rather than trusting the caller to.
    pub const fn named(api: F, name: &'static str) -> Self {
        Checked { api, name }
    }

    /// The wrapped function's name, as used in diagnostic traces.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Synthesizes a [`Checked`] wrapper for a native function.
///
/// The trace name is taken from the function path itself. The one-argument
/// form relies on inference to pin the function pointer type; the two-part
/// form spells it out for contexts with nothing to infer from:
///
/// ```
/// use clcheck::cl::cl_int;
/// use clcheck::checked;
///
/// unsafe extern "C" fn clRetain(_: u32) -> cl_int {
///     clcheck::cl::CL_SUCCESS
/// }
///
/// let retain = checked!(clRetain: unsafe extern "C" fn(u32) -> cl_int);
/// assert!(retain.call(1u32).is_ok());
/// ```
#[macro_export]
macro_rules! checked {
    ($api:path) => {
        $crate::Checked::named($api, stringify!($api))
    };
    ($api:path : unsafe extern "C" fn($($param:ty),* $(,)?) -> $ret:ty) => {
        $crate::Checked::named(
            $api as unsafe extern "C" fn($($param),*) -> $ret,
            stringify!($api),
        )
    };
}

macro_rules! impl_checked_call {
    ($($p:ident: $ty:ident),*) => {
        impl<$($ty: Copy + 'static),*> Checked<unsafe extern "C" fn($($ty),*) -> cl_int> {
            /// Invokes the native function and translates its returned
            /// status, tracing per the process-wide policy. Each argument
            /// may be given as `T` or `&T`; see
            /// [`optimize`](crate::pass::optimize) for the recommended
            /// mode per type.
            #[track_caller]
            pub fn call(&self, $($p: impl ForwardArg<$ty>),*) -> Result<()> {
                self.invoke(diag::LOGGING, CallSite::here(self.name) $(, $p.forward())*)
            }

            /// Like `call`, but never traces, even under `log-always`.
            /// For probes where failure is expected and not worth reporting.
            #[track_caller]
            pub fn call_quiet(&self, $($p: impl ForwardArg<$ty>),*) -> Result<()> {
                self.invoke(LoggingPolicy::Never, CallSite::here(self.name) $(, $p.forward())*)
            }

            pub fn convention(&self) -> CallingConvention {
                CallingConvention::ReturnsErrorCode
            }

            pub fn signature(&self) -> FunctionSignature {
                <unsafe extern "C" fn($($ty),*) -> cl_int as Signature>::signature()
            }

            fn invoke(
                &self,
                logging: LoggingPolicy,
                site: CallSite
                $(, $p: $ty)*
            ) -> Result<()> {
                if logging == LoggingPolicy::Always {
                    diag::emit_trace(&site);
                }

                let status = unsafe { (self.api)($($p),*) };

                if status == cl::CL_SUCCESS {
                    Ok(())
                } else {
                    if logging == LoggingPolicy::OnError {
                        diag::emit_trace(&site);
                    }
                    Err(ErrorCode::from_raw(status))
                }
            }
        }

        impl<R: ValueReturn, $($ty: Copy + 'static),*>
            Checked<unsafe extern "C" fn($($ty,)* *mut cl_int) -> R>
        {
            /// Invokes the native function with a wrapper-owned status slot
            /// appended and returns its value on success. The trailing
            /// status pointer is not part of the public parameter list.
            #[track_caller]
            pub fn call(&self, $($p: impl ForwardArg<$ty>),*) -> Result<R> {
                self.invoke(diag::LOGGING, CallSite::here(self.name) $(, $p.forward())*)
            }

            /// Like `call`, but never traces, even under `log-always`.
            #[track_caller]
            pub fn call_quiet(&self, $($p: impl ForwardArg<$ty>),*) -> Result<R> {
                self.invoke(LoggingPolicy::Never, CallSite::here(self.name) $(, $p.forward())*)
            }

            pub fn convention(&self) -> CallingConvention {
                CallingConvention::OutputsErrorViaPointer
            }

            pub fn signature(&self) -> FunctionSignature {
                <unsafe extern "C" fn($($ty,)* *mut cl_int) -> R as Signature>::signature()
            }

            fn invoke(
                &self,
                logging: LoggingPolicy,
                site: CallSite
                $(, $p: $ty)*
            ) -> Result<R> {
                if logging == LoggingPolicy::Always {
                    diag::emit_trace(&site);
                }

                let mut status = cl::CL_SUCCESS;
                let value = unsafe { (self.api)($($p,)* &mut status) };

                if status == cl::CL_SUCCESS {
                    Ok(value)
                } else {
                    if logging == LoggingPolicy::OnError {
                        diag::emit_trace(&site);
                    }
                    Err(ErrorCode::from_raw(status))
                }
            }
        }
    };
}

impl_checked_call!();
impl_checked_call!(p1: T1);
impl_checked_call!(p1: T1, p2: T2);
impl_checked_call!(p1: T1, p2: T2, p3: T3);
impl_checked_call!(p1: T1, p2: T2, p3: T3, p4: T4);
impl_checked_call!(p1: T1, p2: T2, p3: T3, p4: T4, p5: T5);
impl_checked_call!(p1: T1, p2: T2, p3: T3, p4: T4, p5: T5, p6: T6);
impl_checked_call!(p1: T1, p2: T2, p3: T3, p4: T4, p5: T5, p6: T6, p7: T7);
impl_checked_call!(p1: T1, p2: T2, p3: T3, p4: T4, p5: T5, p6: T6, p7: T7, p8: T8);
impl_checked_call!(p1: T1, p2: T2, p3: T3, p4: T4, p5: T5, p6: T6, p7: T7, p8: T8, p9: T9);
impl_checked_call!(
    p1: T1, p2: T2, p3: T3, p4: T4, p5: T5, p6: T6, p7: T7, p8: T8, p9: T9, p10: T10
);
