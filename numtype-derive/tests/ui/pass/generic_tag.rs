use std::marker::PhantomData;

use numtype::{Number, Tag};

#[derive(Tag)]
struct Scaled<U: 'static>(PhantomData<U>);

#[derive(Tag)]
#[numtype(name = "m")]
enum Meters {}

fn main() {
    let a = Number::<i32, Scaled<u8>>::new(3);
    assert_eq!(format!("{a:?}"), "Scaled(3)");
    assert_eq!(<Meters as Tag>::NAME, "m");
}
