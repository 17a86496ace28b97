use numtype::Capabilities;

#[derive(Capabilities)]
#[numtype(ordering, inc_dec, multiplication)]
struct Counting;

fn main() {
    let _ = Counting;
}
