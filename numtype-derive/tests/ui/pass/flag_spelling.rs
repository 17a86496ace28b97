use numtype::{Capabilities, Flags};

#[derive(Capabilities)]
#[numtype(specific_equality, SPECIFIC_ORDERING, IncDec)]
struct Mixed;

#[derive(Capabilities)]
#[numtype(all,)]
#[numtype(disable_mutability)]
struct Everything;

fn main() {
    assert_eq!(Mixed::FLAGS, Flags::SPECIFIC_ORDERING | Flags::INC_DEC);
    assert_eq!(Everything::FLAGS, Flags::ALL | Flags::DISABLE_MUTABILITY);
}
