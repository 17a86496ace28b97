use numtype::{Id, Number};

fn main() {
    let b = Number::<i32, Id<2>>::new(1);
    let _ = Number::<i32, Id<1>>::from_equivalent(&b);
}
