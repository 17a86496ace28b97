use numtype::{Id, Number, capabilities};

capabilities! {
    struct Ordered = SPECIFIC_ORDERING;
}

fn main() {
    let mut a = Number::<i32, Id<0>, Ordered>::new(1);
    a.increment();
}
