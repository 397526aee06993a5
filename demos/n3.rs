use rul::{Mat, Trans, UL};

fn main() {
    let n = 3;

    let a: Mat<f64> = Mat::from_rows(&[[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 0.0, 2.0]]).unwrap();
    let ul = UL::new(&a, true, true).unwrap();

    let b = vec![6.0, 7.0, 8.0];
    let mut rhs = [b.clone(), b.clone()].concat();

    rul::par_solve(&ul, &mut rhs, Trans::Transposed).unwrap();

    rhs.chunks_exact(n).for_each(|x| {
        println!("{:?}", x);
    })
}
