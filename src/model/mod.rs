//! Runtime value model
//!
//! The [`Value`] type shared by path resolution, evaluation and the builtin
//! functions, plus JSON decoding and encoding that keep numbers exact.

pub mod value;

pub use value::{DecodeError, Object, Value};
