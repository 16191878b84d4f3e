//! C ABI exports, declared in `include/some_c_code.h`.
//!
//! The legacy symbols keep their original signatures. Misuse that used to
//! read out of bounds or through null pointers is logged and answered with 0.
//! The `*Checked` symbols report failures through [`Status`] instead.

#![allow(non_snake_case)]

use std::slice;

use crate::error::Error;
use crate::{arith, checked};

/// Return code of the checked C entry points.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    NullPointer = 1,
    Overflow = 2,
    InvalidLength = 3,
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::Overflow { .. } => Status::Overflow,
            Error::LengthMismatch { .. } => Status::InvalidLength,
            Error::NullSequence { .. } | Error::NullArgument { .. } => Status::NullPointer,
        }
    }
}

/// Borrows `len` elements at `arr`. A zero length never touches the pointer.
unsafe fn sequence<'a>(arr: *const u32, len: usize) -> Result<&'a [u32], Error> {
    if len == 0 {
        return Ok(&[]);
    }
    if arr.is_null() {
        return Err(Error::NullSequence { len });
    }
    Ok(unsafe { slice::from_raw_parts(arr, len) })
}

unsafe fn write_out(out: *mut u64, result: Result<u64, Error>, symbol: &str) -> Status {
    if out.is_null() {
        log::debug!("{}: {}", symbol, Error::NullArgument { name: "out" });
        return Status::NullPointer;
    }
    match result {
        Ok(value) => {
            unsafe { *out = value };
            Status::Ok
        }
        Err(err) => {
            log::debug!("{}: {}", symbol, err);
            Status::from(&err)
        }
    }
}

#[no_mangle]
pub extern "C" fn relatedCode(aNumber: usize) {
    arith::announce(aNumber);
}

/// # Safety
///
/// `a` and `b` must each be null or point to a readable value.
#[no_mangle]
pub unsafe extern "C" fn multiplyU64byU32(a: *const u64, b: *const u32) -> u64 {
    if a.is_null() || b.is_null() {
        let name = if a.is_null() { "a" } else { "b" };
        log::error!("multiplyU64byU32: {}", Error::NullArgument { name });
        return 0;
    }
    unsafe { arith::multiply_widen(*a, *b) }
}

/// # Safety
///
/// Unless `arrlen` is 0, `arr` must be null or point to `arrlen` readable
/// elements.
#[no_mangle]
pub unsafe extern "C" fn multiplyAndAdd(arr: *const u32, arrlen: usize, mult: u32) -> u64 {
    match unsafe { sequence(arr, arrlen) } {
        Ok(values) => arith::dot_product_scaled(values, mult),
        Err(err) => {
            log::error!("multiplyAndAdd: {}", err);
            0
        }
    }
}

#[no_mangle]
pub extern "C" fn fac(n: u64) -> u64 {
    arith::factorial(n)
}

/// # Safety
///
/// `out` must be null or point to writable storage for a `uint64_t`.
#[no_mangle]
pub unsafe extern "C" fn multiplyU64byU32Checked(a: u64, b: u32, out: *mut u64) -> Status {
    unsafe {
        write_out(
            out,
            checked::checked_multiply_widen(a, b),
            "multiplyU64byU32Checked",
        )
    }
}

/// # Safety
///
/// As for [`multiplyAndAdd`]; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn multiplyAndAddChecked(
    arr: *const u32,
    arrlen: usize,
    mult: u32,
    out: *mut u64,
) -> Status {
    let result = unsafe { sequence(arr, arrlen) }
        .and_then(|values| checked::checked_dot_product_scaled(values, mult));
    unsafe { write_out(out, result, "multiplyAndAddChecked") }
}

/// # Safety
///
/// `out` must be null or point to writable storage for a `uint64_t`.
#[no_mangle]
pub unsafe extern "C" fn facChecked(n: u64, out: *mut u64) -> Status {
    unsafe { write_out(out, checked::checked_factorial(n), "facChecked") }
}
