//! The four fixture operations with fixed-width wrapping semantics.
//!
//! Every result is reduced modulo 2^64 exactly as unsigned C arithmetic would,
//! so a program linked against either implementation sees the same values.

use std::io::{self, Write};

/// Writes the greeting line for `count` to `out`.
pub fn announce_to<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    writeln!(out, "Hallo! This is some output from Rust code! ({})", count)
}

/// Prints the greeting line for `count` to standard output.
///
/// Write failures are ignored.
pub fn announce(count: usize) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let _ = announce_to(&mut lock, count).and_then(|_| lock.flush());
}

/// `a * b` with `b` widened to 64 bits, wrapping on overflow.
pub fn multiply_widen(a: u64, b: u32) -> u64 {
    a.wrapping_mul(u64::from(b))
}

/// Sums `value * multiplier` over `values`.
///
/// Each product is taken at 32-bit width and wraps before it is widened into
/// the 64-bit accumulator. Large elements therefore contribute
/// `(value * multiplier) mod 2^32`, not their exact product.
pub fn dot_product_scaled(values: &[u32], multiplier: u32) -> u64 {
    values.iter().fold(0u64, |acc, &value| {
        acc.wrapping_add(u64::from(value.wrapping_mul(multiplier)))
    })
}

/// `n!` modulo 2^64, with `0! == 1`.
pub fn factorial(n: u64) -> u64 {
    let mut acc = 1u64;
    for k in 2..=n {
        acc = acc.wrapping_mul(k);
        // From 66! on there are at least 64 factors of two: the product stays 0.
        if acc == 0 {
            break;
        }
    }
    acc
}
