//! A topological polygon graph.
//!
//! [`PolygonGraph`] stores a set of polygons that share vertices. Each
//! polygon's boundary is a closed ring of directed *half edges*, and each
//! vertex keeps an adjacency index of the half edges that start at it. The
//! graph is purely topological: it stores no positions or normals. Instead,
//! arbitrary payloads can be attached to vertices, edges and polygons via the
//! three type parameters of [`PolygonGraph`].
//!
//! ```
//! use polygraph::PolygonGraph;
//!
//! let mut graph: PolygonGraph<&str> = PolygonGraph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//!
//! let triangle = graph.add_default_polygon(&[a, b, c]).into_option().expect("three vertices");
//! assert_eq!(graph.ring_len(triangle), 3);
//! assert_eq!(graph.find_outgoing_edges(a, b).len(), 1);
//!
//! // Removing a vertex removes all polygons around it.
//! graph.remove_vertex(a);
//! assert_eq!(graph.num_polygons(), 0);
//! assert_eq!(graph.remove_isolated_vertices(), 2);
//! ```
//!
//! # Handles
//!
//! Elements are referred to by small, copyable handles ([`VertexHandle`],
//! [`EdgeHandle`] and [`PolygonHandle`]). A handle stays valid until the
//! element it refers to is removed. Storage slots are never reused within one
//! graph, so a stale handle never silently refers to a different element.
//! Handles are only meaningful for the graph that created them.

#![deny(missing_debug_implementations)]

#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod error;
pub mod graph;
pub mod handle;
pub mod store;

pub use optional::Optioned as Opt;

pub use crate::{
    error::{Element, GraphError},
    graph::{Edge, Polygon, PolygonGraph, Vertex},
    handle::{hsize, EdgeHandle, Handle, PolygonHandle, VertexHandle},
};
