//! Minimal lazy pipeline library.
//!
//! A small, self-contained take on the stream idiom: build a [`Pipeline`]
//! over a sequence, chain element transforms with [`Pipeline::map`], then
//! finish with one terminal aggregation, either [`Pipeline::fold`] (with an
//! identity value) or [`Pipeline::reduce`] (returning an [`Optional`]).
//!
//! Transforms and operators are expressed through the [`Function`] and
//! [`BinaryOperator`] traits, which closures, function pointers and
//! hand-written function objects all implement.

pub mod function;
pub mod optional;
pub mod stream;

pub use function::{lift, lift_operator, BinaryOperator, Function, Named};
pub use optional::Optional;
pub use stream::Pipeline;
