//! Exhaustive ground-truth search.
//!
//! Scans all 2^n sequences and keeps the first one attaining the minimal
//! energy (first-found-wins, matching the search core's tie-break). Only
//! feasible for small n; the hard cap keeps an accidental large `n` from
//! running for hours.

use crate::energy::energy;
use crate::error::{CoreError, CoreResult};
use crate::sequence::Sequence;

/// Largest length accepted by [`brute_force_minimum`].
pub const BRUTE_FORCE_MAX: usize = 24;

/// Find a minimal-energy sequence of length `n` by exhaustive search.
///
/// Iterates basis indices in ascending order, so ties resolve to the
/// lexicographically first basis encoding.
pub fn brute_force_minimum(n: usize) -> CoreResult<(Sequence, u64)> {
    if n == 0 {
        return Err(CoreError::Empty);
    }
    if n > BRUTE_FORCE_MAX {
        return Err(CoreError::TooLong {
            n,
            max: BRUTE_FORCE_MAX,
        });
    }

    let mut best: Option<(Sequence, u64)> = None;
    for index in 0usize..1 << n {
        let seq = Sequence::from_basis_index(index, n)?;
        let e = energy(&seq);
        match &best {
            Some((_, best_e)) if e >= *best_e => {}
            _ => best = Some((seq, e)),
        }
    }
    // n >= 1 guarantees at least one candidate.
    Ok(best.expect("non-empty search space"))
}
