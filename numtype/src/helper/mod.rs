//! Helper utilities for internal implementation details.
//!
//! ## Contents
//!
//! - [`Bit`], [`Yes`], [`No`] - Type-level booleans, one per capability of a capability set
//! - [`Flag`], [`Select`] - Conversion from a `const bool` to a type-level boolean
//! - [`capabilities!`](crate::capabilities) and its hidden helpers, which lift a [`Flags`](crate::Flags)
//!   mask into a [`Capabilities`](crate::Capabilities) implementation

mod bit;
pub(crate) mod macros;

pub use bit::{Bit, Flag, No, Select, Yes};
