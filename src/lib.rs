//! Dense UL Decomposition (backward Gaussian elimination with partial pivoting)

mod debug;
mod error;
mod mat;
pub mod perm;
mod rul;
mod traits;
mod ul;

#[cfg(feature = "rayon")]
mod par_solve;

#[cfg(feature = "spsolve")]
pub mod spsolve;

pub use error::*;
pub use mat::*;
pub use rul::*;
pub use traits::*;
pub use ul::*;

#[cfg(feature = "rayon")]
pub use par_solve::*;

#[cfg(feature = "debug")]
pub use debug::matrix_table;
