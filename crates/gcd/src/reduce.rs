use std::time::{Duration, Instant};

use thiserror::Error;

use crate::GcdAlgorithm;

/// Error for the sequence-form entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GcdError {
    /// The operand sequence itself is unset. An empty sequence is a valid
    /// input and folds to 0; an absent one is not.
    #[error("operand sequence is unset")]
    NullSequence,
}

/// Greatest common divisor of two signed operands.
///
/// Signs are discarded up front, so the selected core only ever sees
/// magnitudes, larger operand first. By convention `gcd(algo, 0, 0) == 0`,
/// and `gcd(algo, a, 0) == |a|`.
///
/// The result is non-negative with one unrepresentable corner: when every
/// operand is `0` or `i64::MIN`, with at least one `i64::MIN`, the
/// mathematical result 2^63 has no positive `i64` form and wraps to
/// `i64::MIN`. All other inputs, `i64::MIN` included, produce the exact
/// answer because the interior arithmetic runs on `u64` magnitudes.
pub fn gcd(algo: GcdAlgorithm, a: i64, b: i64) -> i64 {
    let a = a.unsigned_abs();
    let b = b.unsigned_abs();

    if a == b {
        return b as i64;
    }
    if a == 0 {
        return b as i64;
    }
    if b == 0 {
        return a as i64;
    }

    let g = if a < b {
        algo.compute(b, a)
    } else {
        algo.compute(a, b)
    };
    g as i64
}

/// Same computation as [`gcd`], bracketed by one monotonic-clock read pair;
/// returns the result together with the elapsed time.
pub fn gcd_timed(algo: GcdAlgorithm, a: i64, b: i64) -> (i64, Duration) {
    let start = Instant::now();
    let result = gcd(algo, a, b);
    (result, start.elapsed())
}

/// Folds [`gcd`] across a sequence of operands.
///
/// The accumulator starts at 0, the fold identity (`gcd(0, x) == |x|`), so an
/// empty sequence yields 0 and a one-element sequence yields that element's
/// magnitude. `None` means the sequence itself is absent and fails with
/// [`GcdError::NullSequence`].
pub fn gcd_fold(algo: GcdAlgorithm, values: Option<&[i64]>) -> Result<i64, GcdError> {
    let values = values.ok_or(GcdError::NullSequence)?;

    let mut acc = 0_i64;
    for &value in values {
        acc = gcd(algo, acc, value);
    }
    Ok(acc)
}

/// Same fold as [`gcd_fold`], also reporting elapsed time: the sum of every
/// pairwise reduction's own measurement, not one outer bracket.
pub fn gcd_fold_timed(
    algo: GcdAlgorithm,
    values: Option<&[i64]>,
) -> Result<(i64, Duration), GcdError> {
    let values = values.ok_or(GcdError::NullSequence)?;

    let mut acc = 0_i64;
    let mut total = Duration::ZERO;
    for &value in values {
        let (next, took) = gcd_timed(algo, acc, value);
        acc = next;
        total += took;
    }
    Ok((acc, total))
}
