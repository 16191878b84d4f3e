//! A small arithmetic library built to be linked into foreign test programs.
//!
//! The plain functions wrap on overflow and are bit-compatible with the legacy
//! C behavior. The `checked_*` functions report overflow and length errors as
//! [`Error`]. With the `ffi` feature the same operations are exported under
//! their C symbol names.

mod arith;
mod checked;
mod error;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use arith::{announce, announce_to, dot_product_scaled, factorial, multiply_widen};
pub use checked::{
    checked_dot_product_scaled, checked_factorial, checked_multiply_widen,
    dot_product_scaled_exact,
};
pub use error::{Error, Operation};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<Error>();
        assert_send_sync::<Operation>();
    }

    #[test]
    fn calls_are_independent_across_threads() {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                std::thread::spawn(move || (factorial(10 + i), dot_product_scaled(&[1, 2, 3], 10)))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let (f, d) = handle.join().unwrap();
            assert_eq!(f, factorial(10 + i as u64));
            assert_eq!(d, 60);
        }
    }
}
