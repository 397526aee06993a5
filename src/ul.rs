use num_traits::Float;

use crate::debug::debug;
use crate::error::{Error, Result};
use crate::mat::Mat;
use crate::perm::{check_pivots, compose, matrix_of, swap_parity_odd};
use crate::rul::{solve_packed, ul_decomposition, Trans};
use crate::traits::{Promote, Scalar};

/// UL factorization of an m×n matrix: `U · L == A[p, :]`.
///
/// `U` is unit upper-triangular, `L` is lower-triangular and `p` is a row
/// permutation. Both factors live in one packed buffer and are only
/// separated on read.
///
/// ```
/// use rul::{Mat, UL};
///
/// let a: Mat<f64> = Mat::from_rows(&[[4.0, 3.0], [6.0, 3.0]]).unwrap();
/// let ul = UL::new(&a, true, true).unwrap();
///
/// let ul_prod = ul.u().matmul(&ul.l()).unwrap();
/// assert_eq!(ul.row_permutation(), vec![1, 0]);
/// assert!(ul_prod.approx_eq(&a.select_rows(&[1, 0]), 1e-12));
/// assert!((ul.det().unwrap() + 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct UL<S> {
    factors: Mat<S>,
    pivots: Vec<usize>,
    info: Option<usize>,
}

impl<S: Scalar> UL<S> {
    /// Factorizes a promoted copy of `a`, leaving `a` untouched.
    ///
    /// With `check`, a zero pivot is reported as [`Error::Singular`].
    pub fn new<T>(a: &Mat<T>, pivot: bool, check: bool) -> Result<Self>
    where
        T: Promote<Output = S>,
    {
        Self::new_in_place(a.map(T::promote), pivot, check)
    }

    /// Factorizes `a`, reusing its buffer for the packed factors.
    ///
    /// Fails with [`Error::NonRepresentable`] when a multiplier or an
    /// updated entry cannot be stored in `S`: an inexact integer quotient
    /// or an integer overflow.
    pub fn new_in_place(mut a: Mat<S>, pivot: bool, check: bool) -> Result<Self> {
        let mut pivots = vec![0; a.rows().min(a.cols())];
        let info = ul_decomposition(&mut a, &mut pivots, pivot)?;

        if check {
            if let Some(column) = info {
                return Err(Error::Singular { column });
            }
        }
        Ok(Self {
            factors: a,
            pivots,
            info,
        })
    }

    /// Reassembles a factorization from its packed parts.
    ///
    /// `pivots` must hold one entry per step with `pivots[j] <= m - r + j`,
    /// as elimination records them.
    pub fn from_parts(factors: Mat<S>, pivots: Vec<usize>, info: Option<usize>) -> Result<Self> {
        let r = factors.rows().min(factors.cols());
        if pivots.len() != r {
            return Err(Error::DimensionMismatch {
                expected: r,
                found: pivots.len(),
            });
        }
        check_pivots(&pivots, factors.rows())?;
        Ok(Self {
            factors,
            pivots,
            info,
        })
    }

    pub fn into_parts(self) -> (Mat<S>, Vec<usize>, Option<usize>) {
        (self.factors, self.pivots, self.info)
    }

    /// The packed factors.
    pub fn factors(&self) -> &Mat<S> {
        &self.factors
    }

    /// `pivots[j]` is the row exchanged with row `m - r + j` at step `j`.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Column of the first zero pivot met during elimination.
    pub fn status(&self) -> Option<usize> {
        self.info
    }

    pub fn is_successful(&self) -> bool {
        self.info.is_none()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.factors.shape()
    }

    fn rank_dims(&self) -> (usize, usize, usize) {
        let (m, n) = self.factors.shape();
        (m, n, m.min(n))
    }

    /// Unit upper-triangular factor, m×min(m,n).
    pub fn u(&self) -> Mat<S> {
        let (m, n, r) = self.rank_dims();
        let mut u = Mat::zeros(m, r);
        for j in 0..r {
            let k = m - r + j;
            let src = self.factors.col(n - r + j);
            let dst = u.col_mut(j);
            dst[..k].copy_from_slice(&src[..k]);
            dst[k] = S::one();
        }
        u
    }

    /// Lower-triangular factor, min(m,n)×n.
    pub fn l(&self) -> Mat<S> {
        let (m, n, r) = self.rank_dims();
        let mut l = Mat::zeros(r, n);
        for j in 0..r {
            let k = m - r + j;
            for c in 0..=n - r + j {
                l[(j, c)] = self.factors[(k, c)];
            }
        }
        l
    }

    /// Row permutation `p` with `U · L == A[p, :]`.
    pub fn row_permutation(&self) -> Vec<usize> {
        compose(&self.pivots, self.factors.rows())
    }

    /// `P` with `P · A == U · L`.
    pub fn permutation_matrix(&self) -> Mat<S> {
        matrix_of(&self.row_permutation())
    }

    fn square(&self) -> Result<usize> {
        let (m, n) = self.factors.shape();
        if m != n {
            return Err(Error::NotSquare { rows: m, cols: n });
        }
        Ok(n)
    }

    /// Solves `op(A) X = B` in place, one column of `b` at a time.
    pub fn solve_in_place(&self, trans: Trans, b: &mut Mat<S>) -> Result<()> {
        let n = self.square()?;
        if b.rows() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.rows(),
            });
        }
        debug!("solve {:?}, nrhs = {}", trans, b.cols());

        for j in 0..b.cols() {
            solve_packed(&self.factors, &self.pivots, trans, b.col_mut(j))?;
        }
        Ok(())
    }

    /// Solves `op(A) x = b` for a single right-hand side.
    pub fn solve_vec(&self, trans: Trans, b: &mut [S]) -> Result<()> {
        let n = self.square()?;
        if b.len() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: b.len(),
            });
        }
        solve_packed(&self.factors, &self.pivots, trans, b)
    }

    /// `A \ B`
    pub fn solve(&self, b: &Mat<S>) -> Result<Mat<S>> {
        let mut x = b.clone();
        self.solve_in_place(Trans::Plain, &mut x)?;
        Ok(x)
    }

    /// `Aᵀ \ B`
    pub fn solve_transpose(&self, b: &Mat<S>) -> Result<Mat<S>> {
        let mut x = b.clone();
        self.solve_in_place(Trans::Transposed, &mut x)?;
        Ok(x)
    }

    /// `Aᴴ \ B`
    pub fn solve_conj_transpose(&self, b: &Mat<S>) -> Result<Mat<S>> {
        let mut x = b.clone();
        self.solve_in_place(Trans::ConjugateTransposed, &mut x)?;
        Ok(x)
    }

    /// `B / A`, the `X` with `X · A == B`, via `Aᵀ · Xᵀ == Bᵀ`.
    pub fn solve_right(&self, b: &Mat<S>) -> Result<Mat<S>> {
        let mut xt = b.transpose();
        self.solve_in_place(Trans::Transposed, &mut xt)?;
        Ok(xt.transpose())
    }

    /// Determinant, zero if elimination met a zero pivot.
    ///
    /// Integer factorizations report an overflowing product as
    /// [`Error::NonRepresentable`] at the diagonal entry where it happened.
    pub fn det(&self) -> Result<S> {
        let n = self.square()?;
        if !self.is_successful() {
            return Ok(S::zero());
        }
        let overflow = |i| Error::NonRepresentable { row: i, column: i };
        let mut d = S::one();
        for i in 0..n {
            d = d.checked_product(self.factors[(i, i)]).ok_or(overflow(i))?;
        }
        if swap_parity_odd(&self.pivots, n)? {
            d = S::zero()
                .checked_mul_sub(S::one(), d)
                .ok_or(overflow(n - 1))?;
        }
        Ok(d)
    }

    /// `(log|det A|, sign)` with `det A == sign * exp(log|det A|)`.
    ///
    /// The two parts are kept apart so that determinants outside the range
    /// of `S` still have a finite logarithm. A singular factorization gives
    /// `(-inf, 1)`.
    pub fn logabsdet(&self) -> Result<(S::Norm, S)>
    where
        S::Norm: Float,
    {
        let n = self.square()?;
        if !self.is_successful() {
            return Ok((<S::Norm as Float>::neg_infinity(), S::one()));
        }
        let mut abs_log: S::Norm = num_traits::Zero::zero();
        let mut sign = S::one();
        for i in 0..n {
            let d = self.factors[(i, i)];
            let a = d.norm();
            abs_log = abs_log + a.ln();
            sign *= d.phase();
        }
        if swap_parity_odd(&self.pivots, n)? {
            sign = S::zero() - sign;
        }
        Ok((abs_log, sign))
    }

    /// `A⁻¹`, by solving against the identity.
    pub fn inverse(&self) -> Result<Mat<S>> {
        let n = self.square()?;
        let mut x = Mat::identity(n);
        self.solve_in_place(Trans::Plain, &mut x)?;
        Ok(x)
    }
}
