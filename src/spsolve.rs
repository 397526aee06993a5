use anyhow::{format_err, Result};

use num_traits::NumAssignOps;
use spsolve::Solver;

use crate::{Int, Mat, Scalar, Trans, UL};

/// Dense UL solver behind the compressed-column [`Solver`] interface.
pub struct RUL {
    pub pivot: bool,
}

impl Default for RUL {
    fn default() -> Self {
        Self { pivot: true }
    }
}

impl<I, S> Solver<I, S> for RUL
where
    I: Int + NumAssignOps,
    S: Scalar,
{
    fn solve(
        &self,
        n: usize,
        a_i: &[I],
        a_p: &[I],
        a_x: &[S],
        b: &mut [S],
        trans: bool,
    ) -> Result<()> {
        if a_p.len() != n + 1 {
            return Err(format_err!(
                "len colptr ({}) must be n + 1 ({})",
                a_p.len(),
                n + 1
            ));
        }

        // Scatter, summing duplicate entries.
        let nnz = a_i.len().min(a_x.len());
        let mut a = Mat::zeros(n, n);
        for j in 0..n {
            let (start, end) = (a_p[j].to_index(), a_p[j + 1].to_index());
            if start > end || end > nnz {
                return Err(format_err!(
                    "colptr of column {} spans {}..{}, outside 0..{}",
                    j,
                    start,
                    end,
                    nnz
                ));
            }
            for k in start..end {
                let i = a_i[k].to_index();
                if i >= n {
                    return Err(format_err!(
                        "row index {} in column {} must be less than n ({})",
                        i,
                        j,
                        n
                    ));
                }
                a[(i, j)] = a[(i, j)] + a_x[k];
            }
        }

        let ul = UL::new_in_place(a, self.pivot, true)?;
        let trans = if trans { Trans::Transposed } else { Trans::Plain };
        ul.solve_vec(trans, b)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csc_solve() {
        // |4 1 0|
        // |1 3 1|
        // |0 0 2|
        let colptr = vec![0usize, 2, 4, 6];
        let rowind = vec![0usize, 1, 0, 1, 1, 2];
        let data: Vec<f64> = vec![4.0, 1.0, 1.0, 3.0, 1.0, 2.0];

        let mut b = vec![6.0, 10.0, 6.0];
        RUL::default()
            .solve(3, &rowind, &colptr, &data, &mut b, false)
            .unwrap();
        for (x, e) in b.iter().zip([1.0, 2.0, 3.0]) {
            assert!((x - e).abs() < 1e-12);
        }

        let mut b = vec![6.0, 7.0, 2.0];
        RUL::default()
            .solve(3, &rowind, &colptr, &data, &mut b, true)
            .unwrap();
        for (x, e) in b.iter().zip([1.0, 2.0, 0.0]) {
            assert!((x - e).abs() < 1e-12);
        }
    }

    #[test]
    fn singular_is_an_error() {
        let colptr = vec![0usize, 1, 1];
        let rowind = vec![0usize];
        let data: Vec<f64> = vec![1.0];
        let mut b = vec![1.0, 1.0];
        assert!(RUL::default()
            .solve(2, &rowind, &colptr, &data, &mut b, false)
            .is_err());
    }

    #[test]
    fn malformed_structure_is_an_error() {
        let colptr = vec![0usize, 1, 2];
        let data: Vec<f64> = vec![1.0, 1.0];
        let mut b = vec![1.0, 1.0];

        // Row 2 of a 2x2 matrix would land in the next column.
        let rowind = vec![0usize, 2];
        let err = RUL::default()
            .solve(2, &rowind, &colptr, &data, &mut b, false)
            .unwrap_err();
        assert!(err.to_string().contains("row index 2"));

        // Column pointers past the stored entries.
        let rowind = vec![0usize, 1];
        let colptr = vec![0usize, 1, 3];
        assert!(RUL::default()
            .solve(2, &rowind, &colptr, &data, &mut b, false)
            .is_err());
        assert_eq!(b, vec![1.0, 1.0]);
    }
}
