use numtype::{Id, Number, capabilities};

capabilities! {
    struct Frozen = DEFAULT | DISABLE_MUTABILITY;
}

fn main() {
    let mut a = Number::<i32, Id<0>, Frozen>::new(1);
    a.increment();
}
