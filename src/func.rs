//! Small function-level helpers: value pipelines, a call-at-most-once guard,
//! and a call-counting completion barrier.
//!
//! [`JustOnce`] and [`Cut`] keep their state in the instance, so two call sites
//! never share a counter unless they share the instance. Neither does any locking.

mod cut;
mod just_once;
mod pipe;

pub use cut::*;
pub use just_once::*;
pub use pipe::*;
