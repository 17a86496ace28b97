use numtype::{Capabilities, Number, Tag};

#[derive(Tag)]
struct Distance;

#[derive(Capabilities)]
#[numtype(default, general_plus_minus)]
struct Shiftable;

fn main() {
    let mut a = Number::<i32, Distance, Shiftable>::new(5);
    let b = Number::<i32, Distance, Shiftable>::new(3);
    assert_eq!((a + b).get(), 8);
    assert!(a > b);
    a += b;
    a -= 2i32;
    assert_eq!(a.get(), 6);
}
