//! The legacy C sources, compiled by the host C compiler, as a reference for
//! the Rust implementation in `some_c_code`.

mod sys {
    extern "C" {
        pub fn legacy_related_code(a_number: usize);
        pub fn legacy_multiply_u64_by_u32(a: *mut u64, b: *mut u32) -> u64;
        pub fn legacy_multiply_and_add(arr: *mut u32, arrlen: usize, mult: u32) -> u64;
        pub fn legacy_fac(n: u64) -> u64;
    }
}

pub fn related_code(count: usize) {
    unsafe { sys::legacy_related_code(count) }
}

pub fn multiply_u64_by_u32(mut a: u64, mut b: u32) -> u64 {
    unsafe { sys::legacy_multiply_u64_by_u32(&mut a, &mut b) }
}

pub fn multiply_and_add(values: &[u32], mult: u32) -> u64 {
    // The C side never writes through `arr`.
    unsafe { sys::legacy_multiply_and_add(values.as_ptr() as *mut u32, values.len(), mult) }
}

/// Recursive in C: keep `n` small.
pub fn fac(n: u64) -> u64 {
    unsafe { sys::legacy_fac(n) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const U64_SAMPLES: [u64; 8] = [
        0,
        1,
        2,
        0xffff_ffff,
        0x1_0000_0000,
        0x8000_0000_0000_0000,
        0x0123_4567_89ab_cdef,
        u64::MAX,
    ];
    const U32_SAMPLES: [u32; 7] = [0, 1, 2, 10, 0xffff, 0x1_0000, u32::MAX];

    #[test]
    fn multiply_matches_c() {
        for &a in U64_SAMPLES.iter() {
            for &b in U32_SAMPLES.iter() {
                assert_eq!(
                    some_c_code::multiply_widen(a, b),
                    multiply_u64_by_u32(a, b),
                    "a = {:#x}, b = {:#x}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn dot_product_matches_c() {
        let sequences: [&[u32]; 5] = [
            &[],
            &[1, 2, 3],
            &[0x1_0000, 0xffff, 7],
            &[u32::MAX, u32::MAX, u32::MAX, u32::MAX],
            &[0xdead_beef, 0x1234_5678, 0, 1],
        ];
        for values in sequences.iter() {
            for &mult in U32_SAMPLES.iter() {
                assert_eq!(
                    some_c_code::dot_product_scaled(values, mult),
                    multiply_and_add(values, mult),
                    "values = {:?}, mult = {}",
                    values,
                    mult
                );
            }
        }
    }

    #[test]
    fn factorial_matches_c() {
        for n in 0..=100 {
            assert_eq!(some_c_code::factorial(n), fac(n), "n = {}", n);
        }
    }

    #[test]
    fn announce_links() {
        related_code(3);
        some_c_code::announce(3);
    }

    #[test]
    fn rust_symbols_match_c() {
        let values = [4u32, 5, 6];
        let (a, b) = (u64::MAX, 3u32);
        unsafe {
            assert_eq!(
                some_c_code::ffi::multiplyAndAdd(values.as_ptr(), values.len(), 0xffff_ffff),
                multiply_and_add(&values, 0xffff_ffff)
            );
            assert_eq!(
                some_c_code::ffi::multiplyU64byU32(&a, &b),
                multiply_u64_by_u32(a, b)
            );
        }
        assert_eq!(some_c_code::ffi::fac(25), fac(25));
    }
}
