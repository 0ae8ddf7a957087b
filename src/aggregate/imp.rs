mod bucket;
mod count;

pub use bucket::*;
pub use count::*;
