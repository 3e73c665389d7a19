use crate::cl;
use thiserror::Error;

pub type Result<T = ()> = std::result::Result<T, ErrorCode>;

/// A failing native status, kept distinct from plain integers.
///
/// There is deliberately no `From<cl_int>` for comparisons and no
/// `PartialEq<cl_int>`: an `ErrorCode` only ever compares with another
/// `ErrorCode`, so unrelated integers cannot leak into error checks by
/// accident. Comparing against a raw status constant requires the explicit
/// [`raw_compare::CompareRawStatus`] import.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[error("{} ({})", code_name(.0), .0)]
pub struct ErrorCode(cl::cl_int);

impl ErrorCode {
    /// Wraps a raw status reported by a native call.
    pub const fn from_raw(status: cl::cl_int) -> Self {
        ErrorCode(status)
    }

    /// The underlying native status value.
    pub const fn raw(self) -> cl::cl_int {
        self.0
    }
}

fn code_name(status: &cl::cl_int) -> &'static str {
    match *status {
        cl::CL_DEVICE_NOT_FOUND => "CL_DEVICE_NOT_FOUND",
        cl::CL_OUT_OF_RESOURCES => "CL_OUT_OF_RESOURCES",
        cl::CL_OUT_OF_HOST_MEMORY => "CL_OUT_OF_HOST_MEMORY",
        cl::CL_INVALID_VALUE => "CL_INVALID_VALUE",
        cl::CL_INVALID_PLATFORM => "CL_INVALID_PLATFORM",
        cl::CL_INVALID_DEVICE => "CL_INVALID_DEVICE",
        _ => "CL_ERROR",
    }
}

/// Opt-in comparison between [`ErrorCode`] and raw `cl_int` constants.
///
/// Importing the trait is the explicit acknowledgement that mixing the two
/// domains is intended at this call site:
///
/// ```
/// use clcheck::cl;
/// use clcheck::error::raw_compare::CompareRawStatus;
///
/// let err = clcheck::ErrorCode::from_raw(cl::CL_DEVICE_NOT_FOUND);
/// assert!(err.eq_raw(cl::CL_DEVICE_NOT_FOUND));
/// ```
pub mod raw_compare {
    use super::ErrorCode;
    use crate::cl;

    pub trait CompareRawStatus {
        fn eq_raw(&self, status: cl::cl_int) -> bool;
    }

    impl CompareRawStatus for ErrorCode {
        fn eq_raw(&self, status: cl::cl_int) -> bool {
            self.raw() == status
        }
    }
}
