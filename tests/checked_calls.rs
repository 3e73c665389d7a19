//! Behavioral tests for the wrapper engine, driven by local C-ABI shims so
//! no OpenCL driver is needed.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use clcheck::cl::{self, cl_int, cl_uint};
use clcheck::error::raw_compare::CompareRawStatus;
use clcheck::{CallingConvention, ErrorCode, PassingMode, Signature, checked, classify, optimize};

// --- classification ---------------------------------------------------------

fn classify_fn<F: Signature>() -> Option<CallingConvention> {
    classify(&F::signature()).ok()
}

#[test]
fn classification_follows_the_two_conventions() {
    // Returning the status type always classifies as ReturnsErrorCode,
    // whatever the parameters look like.
    assert_eq!(
        classify_fn::<unsafe extern "C" fn() -> cl_int>(),
        Some(CallingConvention::ReturnsErrorCode)
    );
    assert_eq!(
        classify_fn::<unsafe extern "C" fn(cl_uint, *mut cl_uint) -> cl_int>(),
        Some(CallingConvention::ReturnsErrorCode)
    );
    // Even when the last parameter is itself a status pointer.
    assert_eq!(
        classify_fn::<unsafe extern "C" fn(cl_uint, *mut cl_int) -> cl_int>(),
        Some(CallingConvention::ReturnsErrorCode)
    );

    // Non-status return plus trailing status pointer.
    assert_eq!(
        classify_fn::<unsafe extern "C" fn(cl_uint, *mut cl_int) -> cl::cl_mem>(),
        Some(CallingConvention::OutputsErrorViaPointer)
    );

    // Neither shape: no convention, no wrapper.
    assert_eq!(
        classify_fn::<unsafe extern "C" fn(*mut cl_uint) -> cl::cl_mem>(),
        None
    );
    assert_eq!(classify_fn::<unsafe extern "C" fn() -> cl::cl_mem>(), None);
}

// --- the section 8 enumerate/fetch scenario ---------------------------------

unsafe extern "C" fn get_widget_count(count: *mut cl_uint) -> cl_int {
    unsafe { *count = 3 };
    cl::CL_SUCCESS
}

unsafe extern "C" fn fetch_widgets(num_entries: cl_uint, out: *mut u32) -> cl_int {
    for i in 0..num_entries {
        unsafe { *out.add(i as usize) = 100 + i };
    }
    cl::CL_SUCCESS
}

unsafe extern "C" fn get_widget_count_absent(_count: *mut cl_uint) -> cl_int {
    cl::CL_DEVICE_NOT_FOUND
}

#[test]
fn enumerate_then_fetch() {
    let count_fn = checked!(get_widget_count: unsafe extern "C" fn(*mut cl_uint) -> cl_int);
    let fetch_fn = checked!(fetch_widgets: unsafe extern "C" fn(cl_uint, *mut u32) -> cl_int);

    let mut count = 0u32;
    assert_eq!(count_fn.call(&mut count as *mut cl_uint), Ok(()));
    assert_eq!(count, 3);

    let mut entries = vec![0u32; count as usize];
    assert_eq!(fetch_fn.call(count, entries.as_mut_ptr()), Ok(()));
    assert_eq!(entries, vec![100, 101, 102]);
}

#[test]
fn absent_devices_surface_as_a_probe_failure() {
    let count_fn =
        checked!(get_widget_count_absent: unsafe extern "C" fn(*mut cl_uint) -> cl_int);

    let mut count = 0u32;
    let err = count_fn
        .call_quiet(&mut count as *mut cl_uint)
        .unwrap_err();

    // The caller decides what CL_DEVICE_NOT_FOUND means; the wrapper only
    // reports it, via the explicit raw-comparison opt-in.
    assert!(err.eq_raw(cl::CL_DEVICE_NOT_FOUND));
}

// --- error codes pass through unaltered -------------------------------------

unsafe extern "C" fn always_code_seven() -> cl_int {
    7
}

#[test]
fn a_fixed_failure_code_is_never_altered() {
    let f = checked!(always_code_seven: unsafe extern "C" fn() -> cl_int);

    for _ in 0..5 {
        assert_eq!(f.call_quiet(), Err(ErrorCode::from_raw(7)));
    }
}

// --- value-returning convention ----------------------------------------------

static CREATE_CALLS: AtomicU32 = AtomicU32::new(0);

unsafe extern "C" fn create_buffer(size: usize, status: *mut cl_int) -> cl::cl_mem {
    CREATE_CALLS.fetch_add(1, Ordering::Relaxed);
    if size == 0 {
        unsafe { *status = cl::CL_INVALID_VALUE };
        return std::ptr::null_mut();
    }
    unsafe { *status = cl::CL_SUCCESS };
    size as cl::cl_mem
}

#[test]
fn output_pointer_convention_returns_the_native_value() {
    let create =
        checked!(create_buffer: unsafe extern "C" fn(usize, *mut cl_int) -> cl::cl_mem);
    assert_eq!(create.convention(), CallingConvention::OutputsErrorViaPointer);

    // The status slot is the wrapper's own; the caller never sees it.
    assert_eq!(create.call(64usize), Ok(64 as cl::cl_mem));
    assert_eq!(
        create.call(0usize),
        Err(ErrorCode::from_raw(cl::CL_INVALID_VALUE))
    );
    assert_eq!(CREATE_CALLS.load(Ordering::Relaxed), 2);
}

// --- parameter passing --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
struct Rgba {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

static RECEIVED_RGBA: AtomicU32 = AtomicU32::new(0);

unsafe extern "C" fn set_color(px: Rgba) -> cl_int {
    let bits = u32::from_ne_bytes([px.r, px.g, px.b, px.a]);
    RECEIVED_RGBA.store(bits, Ordering::Relaxed);
    cl::CL_SUCCESS
}

#[test]
fn small_struct_goes_by_value_with_its_bits_intact() {
    assert_eq!(optimize::<Rgba>(), PassingMode::ByValue);

    let set = checked!(set_color: unsafe extern "C" fn(Rgba) -> cl_int);
    let px = Rgba {
        r: 0xDE,
        g: 0xAD,
        b: 0xBE,
        a: 0xEF,
    };

    assert_eq!(set.call(px), Ok(()));
    assert_eq!(
        RECEIVED_RGBA.load(Ordering::Relaxed),
        u32::from_ne_bytes([0xDE, 0xAD, 0xBE, 0xEF])
    );
}

#[derive(Debug, Clone, Copy)]
#[repr(C)]
struct LaunchConfig {
    grid: [u64; 4],
    block: [u64; 4],
}

static RECEIVED_SUM: AtomicU64 = AtomicU64::new(0);

unsafe extern "C" fn launch(cfg: LaunchConfig) -> cl_int {
    let sum = cfg.grid.iter().chain(cfg.block.iter()).sum();
    RECEIVED_SUM.store(sum, Ordering::Relaxed);
    cl::CL_SUCCESS
}

#[test]
fn large_struct_may_be_handed_over_by_reference() {
    assert_eq!(optimize::<LaunchConfig>(), PassingMode::ByReference);

    let launch_fn = checked!(launch: unsafe extern "C" fn(LaunchConfig) -> cl_int);
    let cfg = LaunchConfig {
        grid: [1, 2, 3, 4],
        block: [5, 6, 7, 8],
    };

    // By-reference at the wrapper boundary; the native call still receives
    // the identical value.
    assert_eq!(launch_fn.call(&cfg), Ok(()));
    assert_eq!(RECEIVED_SUM.load(Ordering::Relaxed), 36);
}

// --- wrapper identity ---------------------------------------------------------

#[test]
fn wrapper_carries_the_function_name() {
    let f = checked!(always_code_seven: unsafe extern "C" fn() -> cl_int);
    assert_eq!(f.name(), "always_code_seven");
}
