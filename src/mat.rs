use std::ops;

use crate::error::{Error, Result};
use crate::traits::Scalar;

/// Owned dense matrix in column-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat<S> {
    rows: usize,
    cols: usize,
    data: Vec<S>,
}

/// Which triangle of a matrix holds the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uplo {
    Upper,
    Lower,
}

impl<S: Copy> Mat<S> {
    pub fn from_col_major(rows: usize, cols: usize, data: Vec<S>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DimensionMismatch {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[S]>>(rows: &[R]) -> Result<Self> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.as_ref().len());

        if let Some(row) = rows.iter().find(|r| r.as_ref().len() != n) {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: row.as_ref().len(),
            });
        }

        let mut data = Vec::with_capacity(m * n);
        for j in 0..n {
            data.extend(rows.iter().map(|row| row.as_ref()[j]));
        }
        Ok(Self {
            rows: m,
            cols: n,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<S> {
        self.data
    }

    pub fn col(&self, j: usize) -> &[S] {
        &self.data[j * self.rows..(j + 1) * self.rows]
    }

    pub fn col_mut(&mut self, j: usize) -> &mut [S] {
        &mut self.data[j * self.rows..(j + 1) * self.rows]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(j * self.rows + a, j * self.rows + b);
        }
    }

    pub fn transpose(&self) -> Self {
        self.map_transposed(|x| x)
    }

    /// Matrix whose row `i` is row `p[i]` of `self`, i.e. `A[p, :]`.
    pub fn select_rows(&self, p: &[usize]) -> Self {
        let mut data = Vec::with_capacity(p.len() * self.cols);
        for j in 0..self.cols {
            let col = self.col(j);
            data.extend(p.iter().map(|&i| col[i]));
        }
        Self {
            rows: p.len(),
            cols: self.cols,
            data,
        }
    }

    pub fn map<T>(&self, f: impl FnMut(S) -> T) -> Mat<T> {
        Mat {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    fn map_transposed(&self, f: impl Fn(S) -> S) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..self.rows {
            for j in 0..self.cols {
                data.push(f(self[(i, j)]));
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<S: Scalar> Mat<S> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![S::zero(); rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut eye = Self::zeros(n, n);
        for i in 0..n {
            eye[(i, i)] = S::one();
        }
        eye
    }

    pub fn conj_transpose(&self) -> Self {
        self.map_transposed(|x| x.conj())
    }

    pub fn matmul(&self, rhs: &Mat<S>) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::DimensionMismatch {
                expected: self.cols,
                found: rhs.rows,
            });
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for j in 0..rhs.cols {
            for k in 0..self.cols {
                let b = rhs[(k, j)];
                if b.is_zero() {
                    continue;
                }
                let a = self.col(k);
                let c = out.col_mut(j);
                for i in 0..a.len() {
                    c[i] = c[i] + a[i] * b;
                }
            }
        }
        Ok(out)
    }

    /// Element-wise comparison: every `|a - b| <= tol`.
    pub fn approx_eq(&self, other: &Mat<S>, tol: S::Norm) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (*a - *b).norm() <= tol)
    }

    /// Full symmetric matrix from the `uplo` triangle of a square matrix.
    pub fn symmetric(&self, uplo: Uplo) -> Result<Self> {
        self.mirror(uplo, |x| x)
    }

    /// Full Hermitian matrix from the `uplo` triangle of a square matrix.
    pub fn hermitian(&self, uplo: Uplo) -> Result<Self> {
        self.mirror(uplo, |x| x.conj())
    }

    fn mirror(&self, uplo: Uplo, f: impl Fn(S) -> S) -> Result<Self> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut full = self.clone();
        for j in 0..self.cols {
            for i in 0..j {
                match uplo {
                    Uplo::Upper => full[(j, i)] = f(self[(i, j)]),
                    Uplo::Lower => full[(i, j)] = f(self[(j, i)]),
                }
            }
        }
        Ok(full)
    }
}

impl<S> Mat<S> {
    // A row past the end would otherwise alias the next column.
    fn check_index(&self, i: usize, j: usize) {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.rows,
            self.cols
        );
    }
}

impl<S> ops::Index<(usize, usize)> for Mat<S> {
    type Output = S;

    fn index(&self, (i, j): (usize, usize)) -> &S {
        self.check_index(i, j);
        &self.data[j * self.rows + i]
    }
}

impl<S> ops::IndexMut<(usize, usize)> for Mat<S> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut S {
        self.check_index(i, j);
        &mut self.data[j * self.rows + i]
    }
}
