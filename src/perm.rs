//! Conversion between pivot records and explicit row permutations.
//!
//! `pivots[j]` records the row exchanged with row `offset + j` when column
//! `j` of the trailing block was eliminated, where `offset = m - pivots.len()`.
//! Elimination visits `j` from last to first, so the swaps compose in that
//! order.

use crate::error::{Error, Result};
use crate::mat::Mat;
use crate::traits::Scalar;

/// Order in which recorded row swaps are replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOrder {
    /// Last pivot first, as elimination applied them. Maps `b` to `b[p]`.
    Elimination,
    /// First pivot first. Undoes [`SwapOrder::Elimination`].
    Reverse,
}

/// Checks that `pivots` is a valid record for `m` rows: at most `m`
/// entries, and `pivots[j] <= offset + j`.
pub fn check_pivots(pivots: &[usize], m: usize) -> Result<()> {
    if pivots.len() > m {
        return Err(Error::DimensionMismatch {
            expected: m,
            found: pivots.len(),
        });
    }
    let offset = m - pivots.len();
    for (j, &kp) in pivots.iter().enumerate() {
        if kp > offset + j {
            return Err(Error::DimensionMismatch {
                expected: offset + j,
                found: kp,
            });
        }
    }
    Ok(())
}

// Pivots must have passed `check_pivots`.
fn replay(pivots: &[usize], m: usize, order: SwapOrder, mut swap: impl FnMut(usize, usize)) {
    let offset = m - pivots.len();
    match order {
        SwapOrder::Elimination => {
            for (j, &kp) in pivots.iter().enumerate().rev() {
                if kp != offset + j {
                    swap(offset + j, kp);
                }
            }
        }
        SwapOrder::Reverse => {
            for (j, &kp) in pivots.iter().enumerate() {
                if kp != offset + j {
                    swap(offset + j, kp);
                }
            }
        }
    }
}

/// Row permutation `p` such that the eliminated rows are `A[p, :]`.
pub fn pivots_to_permutation(pivots: &[usize], m: usize) -> Result<Vec<usize>> {
    check_pivots(pivots, m)?;
    Ok(compose(pivots, m))
}

pub(crate) fn compose(pivots: &[usize], m: usize) -> Vec<usize> {
    let mut p: Vec<usize> = (0..m).collect();
    replay(pivots, m, SwapOrder::Elimination, |row, kp| p.swap(row, kp));
    p
}

fn check_permutation(p: &[usize]) -> Result<()> {
    let mut seen = vec![false; p.len()];
    for &pi in p {
        if pi >= p.len() || seen[pi] {
            return Err(Error::DimensionMismatch {
                expected: p.len(),
                found: pi,
            });
        }
        seen[pi] = true;
    }
    Ok(())
}

/// `q` with `q[p[i]] == i`. Fails unless `p` is a permutation of `0..p.len()`.
pub fn invert_permutation(p: &[usize]) -> Result<Vec<usize>> {
    check_permutation(p)?;
    let mut q = vec![0; p.len()];
    for (i, &pi) in p.iter().enumerate() {
        q[pi] = i;
    }
    Ok(q)
}

/// Replays the recorded swaps on the entries of `v`.
pub fn apply_swaps<T>(v: &mut [T], pivots: &[usize], order: SwapOrder) -> Result<()> {
    check_pivots(pivots, v.len())?;
    replay(pivots, v.len(), order, |row, kp| v.swap(row, kp));
    Ok(())
}

/// Replays the recorded swaps on the rows of `b`.
pub fn apply_row_swaps<S: Copy>(b: &mut Mat<S>, pivots: &[usize], order: SwapOrder) -> Result<()> {
    check_pivots(pivots, b.rows())?;
    replay(pivots, b.rows(), order, |row, kp| b.swap_rows(row, kp));
    Ok(())
}

/// `true` if an odd number of recorded swaps exchanged distinct rows.
pub fn swap_parity_odd(pivots: &[usize], m: usize) -> Result<bool> {
    check_pivots(pivots, m)?;
    let mut odd = false;
    replay(pivots, m, SwapOrder::Reverse, |_, _| odd = !odd);
    Ok(odd)
}

/// The m×m matrix `P` with `P · A == A[p, :]`.
pub fn permutation_matrix<S: Scalar>(p: &[usize]) -> Result<Mat<S>> {
    check_permutation(p)?;
    Ok(matrix_of(p))
}

// Row `i` of `P` is row `p[i]` of the identity.
pub(crate) fn matrix_of<S: Scalar>(p: &[usize]) -> Mat<S> {
    let mut pm = Mat::zeros(p.len(), p.len());
    for (i, &pi) in p.iter().enumerate() {
        pm[(i, pi)] = S::one();
    }
    pm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_runs_last_pivot_first() {
        // Step 2 swaps rows 2 and 0, then step 1 swaps rows 1 and 0.
        let pivots = [0, 0, 0];
        let p = pivots_to_permutation(&pivots, 3).unwrap();
        assert_eq!(p, vec![1, 2, 0]);

        // Composing first-to-last gives a different, wrong, answer.
        let mut wrong: Vec<usize> = (0..3).collect();
        for (j, &kp) in pivots.iter().enumerate() {
            wrong.swap(j, kp);
        }
        assert_ne!(p, wrong);
    }

    #[test]
    fn swaps_match_permutation() {
        let pivots = [0, 0, 1, 2];
        let p = pivots_to_permutation(&pivots, 4).unwrap();

        let mut v = vec![10, 11, 12, 13];
        apply_swaps(&mut v, &pivots, SwapOrder::Elimination).unwrap();
        assert_eq!(v, p.iter().map(|&i| 10 + i).collect::<Vec<_>>());

        apply_swaps(&mut v, &pivots, SwapOrder::Reverse).unwrap();
        assert_eq!(v, vec![10, 11, 12, 13]);
    }

    #[test]
    fn offset_for_tall_pivots() {
        // Two pivots for a four row matrix act on rows 2 and 3.
        let pivots = [0, 1];
        let p = pivots_to_permutation(&pivots, 4).unwrap();
        assert_eq!(p, vec![2, 3, 0, 1]);
        assert!(!swap_parity_odd(&pivots, 4).unwrap());
        assert!(!swap_parity_odd(&[0, 1], 2).unwrap());
        assert!(swap_parity_odd(&[0, 0], 2).unwrap());
    }

    #[test]
    fn inverse_and_matrix() {
        let p = vec![2, 0, 1];
        let q = invert_permutation(&p).unwrap();
        assert_eq!(q, vec![1, 2, 0]);
        for i in 0..3 {
            assert_eq!(p[q[i]], i);
        }

        let a: Mat<f64> = Mat::from_rows(&[[1.0], [2.0], [3.0]]).unwrap();
        let pm: Mat<f64> = permutation_matrix(&p).unwrap();
        assert_eq!(pm.matmul(&a).unwrap(), a.select_rows(&p));
    }

    #[test]
    fn row_swaps_on_matrix() {
        let mut b = Mat::from_rows(&[[1, 4], [2, 5], [3, 6]]).unwrap();
        let pivots = [0, 0, 0];
        apply_row_swaps(&mut b, &pivots, SwapOrder::Elimination).unwrap();
        let p = pivots_to_permutation(&pivots, 3).unwrap();
        let a = Mat::from_rows(&[[1, 4], [2, 5], [3, 6]]).unwrap();
        assert_eq!(b, a.select_rows(&p));
    }

    #[test]
    fn invalid_records_are_errors() {
        // Row 2 does not exist, and step 0 of a square record may not
        // reach past row 0.
        assert_eq!(
            pivots_to_permutation(&[2, 1], 2).unwrap_err(),
            Error::DimensionMismatch { expected: 0, found: 2 }
        );
        assert_eq!(
            swap_parity_odd(&[1, 1], 2).unwrap_err(),
            Error::DimensionMismatch { expected: 0, found: 1 }
        );
        // More pivots than rows.
        let mut v = vec![1, 2];
        assert_eq!(
            apply_swaps(&mut v, &[0, 0, 0], SwapOrder::Reverse).unwrap_err(),
            Error::DimensionMismatch { expected: 2, found: 3 }
        );
        assert_eq!(v, vec![1, 2]);

        assert!(invert_permutation(&[0, 3, 1]).is_err());
        assert!(invert_permutation(&[1, 1, 0]).is_err());
        assert!(permutation_matrix::<f64>(&[0, 0]).is_err());
    }
}
