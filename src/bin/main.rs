use rul::{Mat, Trans, UL};

fn main() -> rul::Result<()> {
    let n = 100;
    let mut a_mat = Mat::<f64>::zeros(n, n);
    for i in 0..n {
        if i == n - 1 {
            a_mat[(0, i)] = 1.0;
        }
        if i >= 2 {
            a_mat[(i - 2, i)] = 3.0;
        }
        if i >= 1 {
            a_mat[(i - 1, i)] = 4.0;
        }
        a_mat[(i, i)] = 5.0;
        if i + 1 < n {
            a_mat[(i + 1, i)] = 2.0;
        }
        if i == 0 {
            a_mat[(n - 1, i)] = 1.0;
        }
    }
    // M = |5 4 3     1|
    //     |2 5 4 3    |
    //     |  2 5 4 3  |
    //     |    2 5 4 3|
    //     |      2 5 4|
    //     |1       2 5|

    let x: Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();
    // x = [1,2,...,n]'
    let xm = Mat::from_col_major(n, 1, x.clone())?;
    let mut b = a_mat.matmul(&xm)?.into_vec();

    let ul = UL::new_in_place(a_mat, true, true)?;
    ul.solve_vec(Trans::Plain, &mut b)?;

    let (abs_log, sign) = ul.logabsdet()?;
    println!("log|det| = {}, sign = {}", abs_log, sign);

    for (i, (e, x)) in b.iter().zip(&x).enumerate() {
        println!("{} {} {:e}", i, e, (e - x).abs());
    }
    Ok(())
}
