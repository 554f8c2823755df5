/// Greatest common divisor by the Euclidean algorithm.
///
/// Repeated remainder reduction: `(a, b)` becomes `(b, a % b)` until `b`
/// reaches zero. O(log(min(a, b))) iterations. Zero operands need no special
/// case here: `gcd_euclid(x, 0) == x` and `gcd_euclid(0, x) == x`.
#[inline]
pub fn gcd_euclid(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
