mod capabilities;
mod meta;
mod tag;

pub use capabilities::derive_capabilities;
pub use tag::derive_tag;
