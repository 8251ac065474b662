//! The utility tool transforms.
//!
//! Each submodule holds the pure logic behind one tool page: a string or
//! format transform with no I/O and no shared state. The HTTP handlers in
//! `crate::api::tools` are thin wrappers over these functions.

pub mod calc;
pub mod codec;
pub mod color;
pub mod generate;
pub mod hashing;
pub mod json;
pub mod timestamp;
