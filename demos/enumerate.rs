//! Lists OpenCL platforms and their devices through the checked wrappers.
//!
//! Requires a real ICD loader: `cargo run --example enumerate --features opencl`.

use std::ffi::c_void;
use std::ptr;

use clcheck::cl::{
    self, DeviceType, cl_device_id, cl_device_info, cl_int, cl_platform_id, cl_uint,
    clGetDeviceIDs, clGetDeviceInfo, clGetPlatformIDs, clGetPlatformInfo,
};
use clcheck::error::raw_compare::CompareRawStatus;
use clcheck::{Result, checked};

fn platforms() -> Result<Vec<cl_platform_id>> {
    let get = checked!(
        clGetPlatformIDs:
        unsafe extern "C" fn(cl_uint, *mut cl_platform_id, *mut cl_uint) -> cl_int
    );

    let mut count = 0u32;
    get.call(0u32, ptr::null_mut::<cl_platform_id>(), &mut count as *mut cl_uint)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut ids = vec![ptr::null_mut(); count as usize];
    get.call(count, ids.as_mut_ptr(), ptr::null_mut::<cl_uint>())?;
    Ok(ids)
}

fn devices(platform: cl_platform_id, kind: DeviceType) -> Result<Vec<cl_device_id>> {
    let get = checked!(
        clGetDeviceIDs:
        unsafe extern "C" fn(
            cl_platform_id,
            cl::cl_device_type,
            cl_uint,
            *mut cl_device_id,
            *mut cl_uint,
        ) -> cl_int
    );

    let mut count = 0u32;
    // A platform with no devices of this type reports CL_DEVICE_NOT_FOUND
    // instead of a zero count. That is an expected probe failure, so keep it
    // out of the diagnostic trace and yield an empty listing.
    if let Err(e) = get.call_quiet(
        platform,
        kind.bits(),
        0u32,
        ptr::null_mut::<cl_device_id>(),
        &mut count as *mut cl_uint,
    ) {
        if e.eq_raw(cl::CL_DEVICE_NOT_FOUND) {
            return Ok(Vec::new());
        }
        return Err(e);
    }

    let mut ids = vec![ptr::null_mut(); count as usize];
    get.call(
        platform,
        kind.bits(),
        count,
        ids.as_mut_ptr(),
        ptr::null_mut::<cl_uint>(),
    )?;
    Ok(ids)
}

fn platform_name(platform: cl_platform_id) -> Result<String> {
    let info = checked!(
        clGetPlatformInfo:
        unsafe extern "C" fn(cl_platform_id, cl::cl_platform_info, usize, *mut c_void, *mut usize)
            -> cl_int
    );

    let mut len = 0usize;
    info.call(
        platform,
        cl::CL_PLATFORM_NAME,
        0usize,
        ptr::null_mut::<c_void>(),
        &mut len as *mut usize,
    )?;

    let mut buf = vec![0u8; len];
    info.call(
        platform,
        cl::CL_PLATFORM_NAME,
        len,
        buf.as_mut_ptr() as *mut c_void,
        ptr::null_mut::<usize>(),
    )?;

    buf.pop(); // trailing NUL
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn device_info(device: cl_device_id, selector: cl_device_info, buf: &mut [u8]) -> Result {
    let info = checked!(
        clGetDeviceInfo:
        unsafe extern "C" fn(cl_device_id, cl_device_info, usize, *mut c_void, *mut usize)
            -> cl_int
    );

    info.call(
        device,
        selector,
        buf.len(),
        buf.as_mut_ptr() as *mut c_void,
        ptr::null_mut::<usize>(),
    )
}

fn device_name(device: cl_device_id) -> Result<String> {
    let mut buf = [0u8; 256];
    device_info(device, cl::CL_DEVICE_NAME, &mut buf)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}

fn device_available(device: cl_device_id) -> Result<bool> {
    let mut raw = [0u8; 4];
    device_info(device, cl::CL_DEVICE_AVAILABLE, &mut raw)?;
    Ok(u32::from_ne_bytes(raw) != 0)
}

fn main() -> Result {
    let platforms = platforms()?;
    if platforms.is_empty() {
        println!("No OpenCL platforms found");
        return Ok(());
    }

    println!("The OpenCL discovered devices (per-platform) are:");
    for platform in platforms {
        println!("Platform: {}", platform_name(platform)?);

        for kind in [DeviceType::GPU, DeviceType::CPU] {
            for device in devices(platform, kind)? {
                let label = if kind == DeviceType::GPU { "GPU" } else { "CPU" };
                println!("  {} device : {}", label, device_name(device)?);
                println!("      available: {}\n", device_available(device)?);
            }
        }
    }

    Ok(())
}
