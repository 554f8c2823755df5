use std::mem;

/// Greatest common divisor by Stein's binary algorithm.
///
/// Shifts, comparisons and subtraction only — the remainder operator never
/// runs. The power-of-two factor shared by both operands is extracted first
/// and restored by the final shift.
#[inline]
pub fn gcd_stein(mut a: u64, mut b: u64) -> u64 {
    // gcd(a, 0) = gcd(0, a) = a
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    // gcd(2^k a, 2^k b) = 2^k gcd(a, b)
    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        // Invariant: a odd.
        debug_assert!(a % 2 == 1, "a = {a} is even");

        b >>= b.trailing_zeros();
        if a > b {
            mem::swap(&mut a, &mut b);
        }
        b -= a;

        if b == 0 {
            return a << shift;
        }
    }
}
