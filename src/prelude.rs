//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits and types.
//!
//! # Example
//!
//! ```
//! use groupwise::prelude::*;
//! ```

pub use crate::collector::{Collector, CollectorBase, IteratorExt};
pub use crate::func::Pipe;
pub use crate::record::{PropertyKey, Record};
pub use crate::shape::{Rebuild, Shape, ShapeKind};
