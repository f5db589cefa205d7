pub mod artifact;
pub mod graph;

pub use artifact::*;
pub use graph::*;
