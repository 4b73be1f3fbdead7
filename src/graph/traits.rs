use std::fmt::Debug;
use std::ops::{Add, Sub};
use num_traits::Zero;
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Edge weight usable by every algorithm in this crate.
///
/// Weights must be totally ordered and support addition and subtraction, so `i64` and
/// `OrderedFloat<f64>` both qualify. `Send + Sync` lets rows be computed on worker threads.
///
/// The algorithms only combine weights through [`Weight::checked_add`] and
/// [`Weight::checked_sub`]: a sum that leaves the representable range (integer overflow, or a
/// float that is no longer finite) is reported instead of wrapping or turning into NaN.
pub trait Weight:
    Copy + Debug + Ord + Zero + Add<Output = Self> + Sub<Output = Self> + Send + Sync + 'static
{
    /// False for infinite and NaN floats; always true for integers
    fn is_finite(&self) -> bool;

    /// `self + rhs`, or `None` if the result is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if the result is not representable
    fn checked_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            fn is_finite(&self) -> bool {
                true
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for OrderedFloat<$t> {
            fn is_finite(&self) -> bool {
                self.0.is_finite()
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                let sum = self.0 + rhs.0;
                sum.is_finite().then_some(OrderedFloat(sum))
            }

            fn checked_sub(self, rhs: Self) -> Option<Self> {
                let difference = self.0 - rhs.0;
                difference.is_finite().then_some(OrderedFloat(difference))
            }
        }
    )*};
}

integer_weight!(i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);

/// Trait representing a weighted directed graph over dense vertex ids `0..vertex_count()`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex.
    /// Out-of-range vertices yield nothing.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge, failing with [`Error::MissingEdge`] if it is absent
    fn weight_of(&self, from: usize, to: usize) -> Result<W> {
        self.get_edge_weight(from, to)
            .ok_or(Error::MissingEdge(from, to))
    }

    /// Returns every edge as `(tail, head, weight)`
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new((0..self.vertex_count()).flat_map(move |tail| {
            self.outgoing_edges(tail)
                .map(move |(head, weight)| (tail, head, weight))
        }))
    }

    /// Returns true if any edge carries a negative weight
    fn has_negative_weights(&self) -> bool {
        self.edges().any(|(_, _, weight)| weight < W::zero())
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex to the graph and returns its ID
    fn add_vertex(&mut self) -> usize;

    /// Adds a directed edge, overwriting the weight of an existing one.
    /// Returns the weight that was replaced, if any. Infinite and NaN weights are rejected
    /// with [`Error::NonFiniteWeight`].
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<Option<W>>;

    /// Removes an edge from the graph and returns its weight
    fn remove_edge(&mut self, from: usize, to: usize) -> Result<W>;
}
