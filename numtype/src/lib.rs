#![doc = include_str!("../README.md")]

mod caps;
mod error;
mod flags;
pub mod helper;
mod number;
mod policy;
mod primitive;
mod tag;

pub use caps::{
    AllCaps, Capabilities, Constructible, DefaultCaps, DefaultConstructible, DivBy, GeneralAddSub, GeneralConstructible,
    GeneralEq, GeneralOrd, GeneralRem, IncDec, LateAssignable, MulBy, Mutable, SpecificAddSub, SpecificDiv, SpecificEq,
    SpecificMul, SpecificOrd, SpecificRem,
};
pub use error::ParseNumberError;
pub use flags::Flags;
pub use number::Number;
#[cfg(feature = "derive")]
pub use numtype_derive::{Capabilities, Tag};
pub use policy::{FixedPoint, Plain, Policy};
pub use primitive::{Floating, Integral, Kind, Primitive, Wide};
pub use tag::{Id, SameTag, Tag};
