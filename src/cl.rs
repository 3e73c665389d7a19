//! The OpenCL-facing surface: status codes, handle aliases and the few
//! constants the wrappers and the enumeration demo need.
//!
//! Kept hand-written rather than generated; the engine itself never links
//! against a driver, so everything here must be usable on a machine without
//! any GPU SDK installed.

#![allow(non_camel_case_types)]

use std::ffi::c_void;

use bitflags::bitflags;

/// The native status type every OpenCL entry point reports through.
pub type cl_int = i32;
pub type cl_uint = u32;
pub type cl_ulong = u64;
pub type cl_bool = u32;
pub type cl_bitfield = u64;

/// Opaque platform handle. Passed through unchanged; never dereferenced here.
pub type cl_platform_id = *mut c_void;
pub type cl_device_id = *mut c_void;
pub type cl_context = *mut c_void;
pub type cl_mem = *mut c_void;

pub type cl_platform_info = cl_uint;
pub type cl_device_info = cl_uint;
pub type cl_device_type = cl_bitfield;

/// The success sentinel: the one status value meaning "no error".
pub const CL_SUCCESS: cl_int = 0;

pub const CL_DEVICE_NOT_FOUND: cl_int = -1;
pub const CL_OUT_OF_RESOURCES: cl_int = -5;
pub const CL_OUT_OF_HOST_MEMORY: cl_int = -6;
pub const CL_INVALID_VALUE: cl_int = -30;
pub const CL_INVALID_PLATFORM: cl_int = -32;
pub const CL_INVALID_DEVICE: cl_int = -33;

pub const CL_PLATFORM_PROFILE: cl_platform_info = 0x0900;
pub const CL_PLATFORM_NAME: cl_platform_info = 0x0902;

pub const CL_DEVICE_TYPE: cl_device_info = 0x1000;
pub const CL_DEVICE_AVAILABLE: cl_device_info = 0x1027;
pub const CL_DEVICE_NAME: cl_device_info = 0x102B;
pub const CL_DEVICE_PROFILE: cl_device_info = 0x102E;

bitflags! {
    /// Device-type mask for `clGetDeviceIDs`-shaped queries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DeviceType: cl_device_type {
        const DEFAULT     = 1 << 0;
        const CPU         = 1 << 1;
        const GPU         = 1 << 2;
        const ACCELERATOR = 1 << 3;
        const ALL         = 0xFFFF_FFFF;
    }
}

/// Real entry points, only declared when the demo links the ICD loader.
#[cfg(feature = "opencl")]
#[link(name = "OpenCL")]
unsafe extern "C" {
    pub fn clGetPlatformIDs(
        num_entries: cl_uint,
        platforms: *mut cl_platform_id,
        num_platforms: *mut cl_uint,
    ) -> cl_int;

    pub fn clGetDeviceIDs(
        platform: cl_platform_id,
        device_type: cl_device_type,
        num_entries: cl_uint,
        devices: *mut cl_device_id,
        num_devices: *mut cl_uint,
    ) -> cl_int;

    pub fn clGetPlatformInfo(
        platform: cl_platform_id,
        param_name: cl_platform_info,
        param_value_size: usize,
        param_value: *mut c_void,
        param_value_size_ret: *mut usize,
    ) -> cl_int;

    pub fn clGetDeviceInfo(
        device: cl_device_id,
        param_name: cl_device_info,
        param_value_size: usize,
        param_value: *mut c_void,
        param_value_size_ret: *mut usize,
    ) -> cl_int;
}
