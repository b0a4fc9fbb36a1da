//! Deep copy of a [`PolygonGraph`].

use fxhash::FxHashMap;
use log::debug;

use crate::handle::{EdgeHandle, VertexHandle};
use super::{PolygonGraph, Store};


impl<V: Clone, E: Clone, P: Clone> Clone for PolygonGraph<V, E, P> {
    /// Creates an independent copy of this graph.
    ///
    /// Vertices are copied in store order. Then every polygon is rebuilt via
    /// the same code path as `add_polygon`, with the vertex handles mapped to
    /// the new vertices. The rotational order of each ring is preserved: the
    /// start edge of a copied polygon corresponds to the start edge of the
    /// original. Payloads are cloned.
    fn clone(&self) -> Self {
        let mut out = Self {
            vertices: Store::with_capacity(self.vertices.num_elements() as usize),
            polygons: Store::with_capacity(self.polygons.num_elements() as usize),
            edges: Store::with_capacity(self.edges.num_elements() as usize),
        };

        let mut vertex_map = FxHashMap::default();
        vertex_map.reserve(self.vertices.num_elements() as usize);
        for (old, vertex) in self.vertices.iter() {
            let new = out.add_vertex(vertex.payload.clone());
            vertex_map.insert(old, new);
        }

        // Reused for all polygons
        let mut vertices = Vec::<VertexHandle>::new();
        let mut edges = Vec::<EdgeHandle>::new();

        for (ph, polygon) in self.polygons.iter() {
            vertices.clear();
            edges.clear();

            // Walk the ring once, starting at the start edge. Each edge
            // contributes its source, which is the target of its predecessor.
            let mut prev = self.edges[polygon.start].prev;
            for eh in self.ring(ph) {
                let source = self.edges[prev].target;
                vertices.push(vertex_map[&source]);
                edges.push(eh);
                prev = eh;
            }

            // The i-th new edge goes from `vertices[i]` to `vertices[i + 1]`,
            // just like `edges[i]` in the original, so the edge payloads can
            // be copied in lockstep.
            out.insert_polygon(&vertices, polygon.payload.clone(), |i| {
                self.edges[edges[i]].payload.clone()
            });
        }

        debug!(
            "copied polygon graph ({} vertices, {} polygons, {} edges)",
            out.num_vertices(),
            out.num_polygons(),
            out.num_edges(),
        );
        out
    }
}
