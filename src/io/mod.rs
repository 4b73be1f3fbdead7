//! Edge-list input and distance-matrix output.

pub mod edge_list;
pub mod matrix;

pub use edge_list::{EdgeList, EdgeListReader};
pub use matrix::write_matrix;
