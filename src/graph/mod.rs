pub mod traits;
pub mod directed;
pub mod generators;
pub mod overlay;

pub use traits::{Graph, MutableGraph, Weight};
pub use directed::DirectedGraph;
pub use overlay::{Reweighted, VirtualSource};
