use crate::error::{Error, Result};
use crate::rul::{solve_packed, Trans};
use crate::traits::Scalar;
use crate::UL;

use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;

/// Solve `op(A) X = B` for one or more right-hand-sides given the
/// factorization of A, solving the columns of `rhs` concurrently.
///
/// `rhs` is column-major, each consecutive run of n values is one
/// right-hand side. The factorization is only read.
pub fn par_solve<S: Scalar + Send + Sync>(ul: &UL<S>, rhs: &mut [S], trans: Trans) -> Result<()> {
    let (m, n) = ul.shape();
    if m != n {
        return Err(Error::NotSquare { rows: m, cols: n });
    }
    if n == 0 {
        return Ok(());
    }
    if rhs.len() % n != 0 {
        return Err(Error::DimensionMismatch {
            expected: rhs.len() - rhs.len() % n,
            found: rhs.len(),
        });
    }

    rhs.par_chunks_exact_mut(n)
        .try_for_each(|b| solve_packed(ul.factors(), ul.pivots(), trans, b))
}
