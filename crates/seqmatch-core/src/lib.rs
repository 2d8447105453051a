#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core types shared by the seqmatch query builder and engine.
//!
//! - [`Context`]: scan position handed to every predicate evaluation
//! - [`Match`]: the predicate capability an element type is tested with
//! - [`Predicate`]: cheap-to-clone, labelled handle around a `Match`
//! - [`Colors`]: ANSI palette for graph dumps and traces

mod colors;
mod context;
mod predicate;


pub use colors::Colors;
pub use context::Context;
pub use predicate::{Match, Predicate};
