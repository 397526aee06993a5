use crate::debug::debug;
use crate::error::{Error, Result};
use crate::mat::Mat;
use crate::perm::{apply_swaps, SwapOrder};
use crate::traits::Scalar;
use crate::UL;

/// Operation applied to the factorized matrix before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trans {
    /// `A x = b`
    #[default]
    Plain,
    /// `Aᵀ x = b`
    Transposed,
    /// `Aᴴ x = b`. Same as [`Trans::Transposed`] for real element types.
    ConjugateTransposed,
}

/// Solve `A X = B` (or the transposed system), overwriting `b`.
pub fn solve<S: Scalar>(a: Mat<S>, b: &mut Mat<S>, trans: Trans) -> Result<()> {
    let ul = UL::new_in_place(a, true, true)?;
    ul.solve_in_place(trans, b)
}

// 1. for k := n downto 1 do
// 2.   kp := argmax |a(1:k, k)|;
// 3.   swap rows k and kp;
// 4.   a(1:k-1, k) := a(1:k-1, k) / a(k, k);
// 5.   a(1:k-1, 1:k-1) -= a(1:k-1, k) * a(k, 1:k-1);
// 6. od

// UL decomposition, backward Gaussian elimination.
//
// Overwrites `a` (m×n) with the packed factors and fills `pivots`
// (length min(m,n)). Elimination is anchored at the bottom-right corner:
// step `j` pivots on row `m-r+j` and column `n-r+j` where r = min(m,n).
// Column `n-r+j` above the pivot receives the U multipliers and row
// `m-r+j` left of (and including) the pivot holds the row of L.
//
// Returns the column of the first exactly zero pivot, if any. Elimination
// still runs to completion in that case.
pub fn ul_decomposition<S: Scalar>(
    a: &mut Mat<S>,
    pivots: &mut [usize],
    pivot: bool,
) -> Result<Option<usize>> {
    let (m, n) = a.shape();
    let r = m.min(n);
    if pivots.len() != r {
        return Err(Error::DimensionMismatch {
            expected: r,
            found: pivots.len(),
        });
    }

    let mut info: Option<usize> = None;

    for j in (0..r).rev() {
        let k = m - r + j; // pivot row
        let c = n - r + j; // pivot column

        // Partial pivoting, first occurrence of the largest magnitude.
        let kp = if pivot {
            let col = a.col(c);
            let mut kp = 0;
            let mut amax = col[0].norm();
            for (i, x) in col.iter().enumerate().take(k + 1).skip(1) {
                let absi = x.norm();
                if absi > amax {
                    kp = i;
                    amax = absi;
                }
            }
            kp
        } else {
            k
        };
        pivots[j] = kp;

        debug!("\nj = {}, k = {}, c = {}, kp = {}", j, k, c, kp);

        let d = a[(kp, c)];
        if !d.is_zero() {
            if kp != k {
                a.swap_rows(k, kp);
            }
            for (i, x) in a.col_mut(c)[..k].iter_mut().enumerate() {
                *x = x
                    .checked_quotient(d)
                    .ok_or(Error::NonRepresentable { row: i, column: c })?;
            }
        } else if info.is_none() {
            info = Some(c);
            debug!("zero pivot in column {}", c);
        }

        // Schur complement of the leading k×c block.
        let (left, right) = a.as_mut_slice().split_at_mut(c * m);
        let l_col = &right[..k];
        for jj in 0..c {
            let akj = left[jj * m + k];
            if akj.is_zero() {
                continue;
            }
            let dst = &mut left[jj * m..jj * m + k];
            for (i, (x, &l)) in dst.iter_mut().zip(l_col).enumerate() {
                *x = mul_sub(*x, l, akj, i, jj)?;
            }
        }

        #[cfg(feature = "debug")]
        print!("A =\n{}", crate::matrix_table(a));
    }
    debug!("pivots = {:?}, info = {:?}", pivots, info);

    Ok(info)
}

/// Solves the packed square factorization against one right-hand side.
pub fn solve_packed<S: Scalar>(
    factors: &Mat<S>,
    pivots: &[usize],
    trans: Trans,
    b: &mut [S],
) -> Result<()> {
    check_factors(factors, b.len())?;
    match trans {
        Trans::Plain => {
            apply_swaps(b, pivots, SwapOrder::Elimination)?;
            usolve(factors, b)?;
            lsolve(factors, b)?;
        }
        Trans::Transposed | Trans::ConjugateTransposed => {
            let conj = trans == Trans::ConjugateTransposed;
            ltsolve(factors, b, conj)?;
            utsolve(factors, b, conj)?;
            apply_swaps(b, pivots, SwapOrder::Reverse)?;
        }
    }
    Ok(())
}

fn check_factors<S: Scalar>(factors: &Mat<S>, n: usize) -> Result<()> {
    let (rows, cols) = factors.shape();
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    if rows != n {
        return Err(Error::DimensionMismatch {
            expected: rows,
            found: n,
        });
    }
    Ok(())
}

fn divide<S: Scalar>(x: S, d: S, row: usize) -> Result<S> {
    x.checked_quotient(d)
        .ok_or(Error::NonRepresentable { row, column: row })
}

fn mul_sub<S: Scalar>(x: S, a: S, b: S, row: usize, column: usize) -> Result<S> {
    x.checked_mul_sub(a, b)
        .ok_or(Error::NonRepresentable { row, column })
}

/// Forward substitution with the lower triangle (diagonal included).
///
/// Floating point types divide by a zero diagonal without complaint and
/// leave infinities or NaN in `b`. Integer types cannot, so a zero
/// diagonal (like any inexact quotient) is reported as
/// [`Error::NonRepresentable`].
pub fn lsolve<S: Scalar>(l_mat: &Mat<S>, b: &mut [S]) -> Result<()> {
    check_factors(l_mat, b.len())?;
    for j in 0..b.len() {
        b[j] = divide(b[j], l_mat[(j, j)], j)?;
        let bj = b[j];
        let col = l_mat.col(j);
        for i in j + 1..b.len() {
            b[i] = mul_sub(b[i], col[i], bj, i, j)?;
        }
    }
    Ok(())
}

/// Backward substitution with the transposed lower triangle.
pub fn ltsolve<S: Scalar>(l_mat: &Mat<S>, b: &mut [S], conj: bool) -> Result<()> {
    check_factors(l_mat, b.len())?;
    let cj = |x: S| if conj { x.conj() } else { x };
    for j in (0..b.len()).rev() {
        let col = l_mat.col(j);
        let mut s = b[j];
        for i in j + 1..b.len() {
            s = mul_sub(s, cj(col[i]), b[i], i, j)?;
        }
        b[j] = divide(s, cj(col[j]), j)?;
    }
    Ok(())
}

/// Backward substitution with the strict upper triangle, unit diagonal.
pub fn usolve<S: Scalar>(u_mat: &Mat<S>, b: &mut [S]) -> Result<()> {
    check_factors(u_mat, b.len())?;
    for j in (0..b.len()).rev() {
        let bj = b[j];
        let col = u_mat.col(j);
        for i in 0..j {
            b[i] = mul_sub(b[i], col[i], bj, i, j)?;
        }
    }
    Ok(())
}

/// Forward substitution with the transposed strict upper triangle.
pub fn utsolve<S: Scalar>(u_mat: &Mat<S>, b: &mut [S], conj: bool) -> Result<()> {
    check_factors(u_mat, b.len())?;
    for j in 0..b.len() {
        let col = u_mat.col(j);
        let mut s = b[j];
        for i in 0..j {
            let u = if conj { col[i].conj() } else { col[i] };
            s = mul_sub(s, u, b[i], i, j)?;
        }
        b[j] = s;
    }
    Ok(())
}
