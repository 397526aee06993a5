#[cfg(feature = "debug")]
use std::io::Write;

#[cfg(feature = "debug")]
const MIN_WIDTH: usize = 5;

#[cfg(feature = "debug")]
const PADDING: usize = 1;

#[cfg(feature = "debug")]
const FLOAT_CONFIG: pretty_dtoa::FmtFloatConfig = pretty_dtoa::FmtFloatConfig::default()
    .add_point_zero(false)
    .max_significant_digits(6);

/// Renders a dense matrix as a right-aligned table, zeros shown as `-`.
#[cfg(feature = "debug")]
pub fn matrix_table<S: crate::Scalar>(m: &crate::Mat<S>) -> String {
    let mut tw = tabwriter::TabWriter::new(vec![])
        .minwidth(MIN_WIDTH)
        .padding(PADDING)
        .alignment(tabwriter::Alignment::Right);

    let (rows, cols) = m.shape();

    for r in 0..rows {
        for c in 0..cols {
            let x = m[(r, c)];
            if x.is_zero() {
                tw.write_all(b"-").unwrap();
            } else {
                let s = x.pretty_string(FLOAT_CONFIG);
                tw.write_all(s.as_bytes()).unwrap();
            }
            if c == cols - 1 {
                tw.write_all(b"\t\n").unwrap();
            } else {
                tw.write_all(b"\t").unwrap();
            }
        }
    }
    String::from_utf8(tw.into_inner().unwrap()).unwrap()
}

#[cfg(feature = "debug")]
macro_rules! debug {
    ($( $args:expr ),*) => { println!( $( $args ),* ); }
}

#[cfg(not(feature = "debug"))]
macro_rules! debug {
    ($( $args:expr ),*) => {};
}

pub(crate) use debug;
