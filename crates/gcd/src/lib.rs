mod euclidean;
mod reduce;
mod stein;

pub use euclidean::gcd_euclid;
pub use reduce::{GcdError, gcd, gcd_fold, gcd_fold_timed, gcd_timed};
pub use stein::gcd_stein;

/// Core selector for the signed entry points. Both variants compute the same
/// function; they differ only in how.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GcdAlgorithm {
    Euclidean,
    Stein,
}

pub const ALL_ALGORITHMS: [GcdAlgorithm; 2] = [GcdAlgorithm::Euclidean, GcdAlgorithm::Stein];

pub fn all_algorithms() -> &'static [GcdAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: GcdAlgorithm) -> &'static str {
    match algo {
        GcdAlgorithm::Euclidean => "euclidean",
        GcdAlgorithm::Stein => "stein",
    }
}

impl GcdAlgorithm {
    /// Runs the bare core on unsigned operands, with no normalization pass.
    #[inline]
    pub fn compute(self, a: u64, b: u64) -> u64 {
        match self {
            Self::Euclidean => gcd_euclid(a, b),
            Self::Stein => gcd_stein(a, b),
        }
    }
}
