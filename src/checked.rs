//! Variants of the fixture operations that report overflow and misuse
//! instead of wrapping.

use crate::arith;
use crate::error::{Error, Operation};

pub fn checked_multiply_widen(a: u64, b: u32) -> Result<u64, Error> {
    a.checked_mul(u64::from(b)).ok_or(Error::Overflow {
        op: Operation::MultiplyWiden,
    })
}

/// Like [`arith::dot_product_scaled`], but fails when a per-element product
/// leaves 32 bits or the sum leaves 64 bits.
pub fn checked_dot_product_scaled(values: &[u32], multiplier: u32) -> Result<u64, Error> {
    let overflow = Error::Overflow {
        op: Operation::DotProductScaled,
    };
    values.iter().try_fold(0u64, |acc, &value| {
        let product = value.checked_mul(multiplier).ok_or_else(|| overflow.clone())?;
        acc.checked_add(u64::from(product))
            .ok_or_else(|| overflow.clone())
    })
}

/// Legacy wrapping dot product behind an explicit length contract.
///
/// `declared_len` is the count a caller believes `values` holds. A mismatch is
/// rejected rather than trusted.
pub fn dot_product_scaled_exact(
    values: &[u32],
    declared_len: usize,
    multiplier: u32,
) -> Result<u64, Error> {
    if declared_len != values.len() {
        return Err(Error::LengthMismatch {
            declared: declared_len,
            actual: values.len(),
        });
    }
    Ok(arith::dot_product_scaled(values, multiplier))
}

pub fn checked_factorial(n: u64) -> Result<u64, Error> {
    (2..=n).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or(Error::Overflow {
            op: Operation::Factorial,
        })
    })
}
