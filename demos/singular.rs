use rul::{Error, Mat, UL};

fn main() {
    let a: Mat<f64> = Mat::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();

    match UL::new(&a, true, true) {
        Err(Error::Singular { column }) => println!("zero pivot in column {}", column),
        other => println!("unexpected: {:?}", other),
    }

    let ul = UL::new(&a, true, false).unwrap();
    println!("successful = {}", ul.is_successful());
    println!("det = {}", ul.det().unwrap());
    println!("logabsdet = {:?}", ul.logabsdet().unwrap());
}
