//! Errors reported by the checked operations of [`PolygonGraph`].
//!
//! Most operations of a [`PolygonGraph`] treat invalid handles as a
//! precondition violation and panic. The `try_*` variants check their
//! arguments first and report problems via [`GraphError`] instead, without
//! mutating the graph.
//!
//! [`PolygonGraph`]: crate::PolygonGraph

use derive_more::Display;
use failure::Fail;

use crate::handle::hsize;


/// The three kinds of elements in a polygon graph.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    #[display(fmt = "vertex")]
    Vertex,
    #[display(fmt = "edge")]
    Edge,
    #[display(fmt = "polygon")]
    Polygon,
}

/// Errors that can happen when calling one of the `try_*` methods of
/// [`PolygonGraph`][crate::PolygonGraph].
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A polygon was supposed to be created from fewer than three vertices.
    #[fail(display = "a polygon needs at least 3 vertices, but {} were given", count)]
    TooFewVertices {
        count: usize,
    },

    /// A handle does not refer to an existing element of the graph, either
    /// because the element was removed or because the handle was never
    /// handed out by this graph.
    #[fail(display = "{} handle with index {} does not refer to an existing element", element, idx)]
    StaleHandle {
        element: Element,
        idx: hsize,
    },
}

impl GraphError {
    pub(crate) fn stale(element: Element, idx: hsize) -> Self {
        GraphError::StaleHandle { element, idx }
    }
}
