//! LABS energy kernel.
//!
//! The sidelobe energy of a sequence s of length N is
//!
//!   E(s) = Σ_{k=1}^{N-1} C_k(s)²,   C_k(s) = Σ_{i=0}^{N-k-1} s_i · s_{i+k}
//!
//! E is a non-negative integer, invariant under global sign flip and
//! under sequence reversal. The figure of merit F = N² / (2·E) grows as
//! the sidelobes shrink; the asymptotically best known sequences reach
//! F ≈ 6.34.

use crate::sequence::Sequence;

/// The aperiodic autocorrelation C_k of a sequence at lag `k`.
///
/// Lags outside 1..N contribute nothing and return 0.
pub fn autocorrelation(seq: &Sequence, k: usize) -> i64 {
    let s = seq.spins();
    if k == 0 || k >= s.len() {
        return 0;
    }
    s.iter()
        .zip(&s[k..])
        .map(|(&a, &b)| i64::from(a) * i64::from(b))
        .sum()
}

/// The LABS sidelobe energy E(s).
pub fn energy(seq: &Sequence) -> u64 {
    let n = seq.len();
    let mut e = 0u64;
    for k in 1..n {
        let ck = autocorrelation(seq, k);
        e += (ck * ck) as u64;
    }
    e
}

/// The merit factor F = N² / (2·E).
///
/// Returns `f64::INFINITY` for a zero-energy sequence (only possible at
/// N = 1) rather than dividing by zero.
pub fn merit_factor(seq: &Sequence) -> f64 {
    let e = energy(seq);
    if e == 0 {
        return f64::INFINITY;
    }
    let n = seq.len() as f64;
    n * n / (2.0 * e as f64)
}
