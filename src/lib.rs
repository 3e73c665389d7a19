//! Statically-checked call wrappers for OpenCL-style status-code APIs.
//!
//! OpenCL entry points report errors one of two ways: by returning a
//! `cl_int` status directly, or by returning a value and writing the status
//! through a trailing `*mut cl_int` parameter. This crate classifies a
//! native function's signature into one of those two conventions at compile
//! time and synthesizes a [`Checked`] wrapper whose `call` forwards the
//! arguments, invokes the function, and turns any non-success status into a
//! typed [`ErrorCode`] instead of a raw integer:
//!
//! ```
//! use clcheck::cl::{CL_SUCCESS, cl_int, cl_uint};
//! use clcheck::checked;
//!
//! unsafe extern "C" fn clGetWidgetCount(count: *mut cl_uint) -> cl_int {
//!     unsafe { *count = 3 };
//!     CL_SUCCESS
//! }
//!
//! let get_count = checked!(
//!     clGetWidgetCount: unsafe extern "C" fn(*mut cl_uint) -> cl_int
//! );
//!
//! let mut count = 0u32;
//! assert!(get_count.call(&mut count as *mut cl_uint).is_ok());
//! assert_eq!(count, 3);
//! ```
//!
//! Failing calls may be traced to stderr under a process-wide, compile-time
//! logging policy (cargo features `log-always` / `log-never`; default is
//! on-error). `call_quiet` suppresses the trace for one invocation when a
//! failure is expected, such as probing an optional capability.

pub mod check;
pub mod cl;
pub mod classify;
pub mod diag;
pub mod error;
pub mod pass;
pub mod signature;

pub use check::Checked;
pub use classify::{CallingConvention, Ineligible, ValueReturn, classify};
pub use diag::{CallSite, LOGGING, LoggingPolicy, SOURCE_TRACKING, SourceTrackingPolicy};
pub use error::{ErrorCode, Result};
pub use pass::{ForwardArg, PassingMode, optimize, optimize_with};
pub use signature::{FunctionSignature, ParamType, Signature};
