mod bookmark;
mod resolve;
mod tree;

pub use bookmark::*;
pub use resolve::*;
pub use tree::*;
