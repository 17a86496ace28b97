use numtype::{Id, Number};

fn main() {
    let a = Number::<i32, Id<0>>::new(5);
    let _ = a * 1.5f64;
}
