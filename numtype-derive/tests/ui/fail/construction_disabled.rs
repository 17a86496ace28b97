use numtype::{Id, Number, capabilities};

capabilities! {
    struct Sealed = ALL | DISABLE_CONSTRUCTION;
}

fn main() {
    let _ = Number::<u64, Id<0>, Sealed>::new(1);
}
