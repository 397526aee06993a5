use rul::{Mat, Trans};

fn main() {
    let a: Mat<f64> = Mat::from_rows(&[[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 0.0, 2.0]]).unwrap();

    let mut b = Mat::from_col_major(3, 1, vec![6.0, 7.0, 8.0]).unwrap();
    rul::solve(a.clone(), &mut b, Trans::Plain).unwrap();

    println!("{:?}", b.as_slice());

    let mut b = Mat::from_col_major(3, 1, vec![6.0, 7.0, 8.0]).unwrap();
    rul::solve(a, &mut b, Trans::Transposed).unwrap();

    println!("{:?}", b.as_slice());
}
