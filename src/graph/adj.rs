//! The per-vertex adjacency index and iterators over adjacent elements.

use std::{fmt, iter::FusedIterator, ops::Range, slice};

use smallvec::SmallVec;

use crate::handle::{EdgeHandle, PolygonHandle, VertexHandle};
use super::{Edge, PolygonGraph};


/// Most vertices in typical meshes have a valence of six or less, so the
/// index of such vertices lives inline.
const INLINE_ENTRIES: usize = 6;

/// One outgoing half edge, keyed by its target vertex.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) struct Entry {
    pub(super) target: VertexHandle,
    pub(super) edge: EdgeHandle,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}->{:?}", self.edge, self.target)
    }
}

/// Multiset of the outgoing half edges of one vertex, sorted by target
/// vertex handle.
///
/// Several entries can have the same target: that's the case when multiple
/// polygons share the same directed vertex pair (a non-manifold
/// configuration). Entries with the same target are kept in insertion order.
///
/// The index does not own the edges; it only refers to them.
#[derive(Clone, Default)]
pub(super) struct AdjacencyIndex {
    entries: SmallVec<[Entry; INLINE_ENTRIES]>,
}

impl AdjacencyIndex {
    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(super) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the index range of all entries with the given target.
    fn range_of(&self, target: VertexHandle) -> Range<usize> {
        let start = self.entries.partition_point(|e| e.target < target);
        let end = start + self.entries[start..].partition_point(|e| e.target == target);
        start..end
    }

    /// Returns all entries with the given target.
    pub(super) fn find(&self, target: VertexHandle) -> &[Entry] {
        &self.entries[self.range_of(target)]
    }

    /// Registers `edge` as an outgoing edge towards `target`. It is placed
    /// after all existing entries with the same target.
    pub(super) fn insert(&mut self, target: VertexHandle, edge: EdgeHandle) {
        let pos = self.entries.partition_point(|e| e.target <= target);
        self.entries.insert(pos, Entry { target, edge });
    }

    /// Removes the entry for `edge` (which points to `target`). Returns
    /// `false` if there is no such entry.
    pub(super) fn remove(&mut self, target: VertexHandle, edge: EdgeHandle) -> bool {
        let range = self.range_of(target);
        match self.entries[range.clone()].iter().position(|e| e.edge == edge) {
            Some(offset) => {
                self.entries.remove(range.start + offset);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for AdjacencyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}


// ===========================================================================
// ===== Iterators
// ===========================================================================

/// Iterator over outgoing half edges of a vertex, ordered by the handle of
/// their target vertex.
///
/// Returned by [`PolygonGraph::outgoing_edges`] and
/// [`PolygonGraph::find_outgoing_edges`].
#[derive(Debug, Clone)]
pub struct OutgoingEdges<'a> {
    it: slice::Iter<'a, Entry>,
}

impl<'a> OutgoingEdges<'a> {
    pub(super) fn new(entries: &'a [Entry]) -> Self {
        Self { it: entries.iter() }
    }
}

impl Iterator for OutgoingEdges<'_> {
    type Item = EdgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| e.edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl DoubleEndedIterator for OutgoingEdges<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.it.next_back().map(|e| e.edge)
    }
}

impl ExactSizeIterator for OutgoingEdges<'_> {}
impl FusedIterator for OutgoingEdges<'_> {}


/// Iterator over the half edges of a polygon's ring in `next` order,
/// starting with the polygon's start edge.
///
/// Returned by [`PolygonGraph::ring`].
pub struct Ring<'a, V, E, P> {
    graph: &'a PolygonGraph<V, E, P>,
    start: EdgeHandle,
    current: Option<EdgeHandle>,
}

impl<'a, V, E, P> Ring<'a, V, E, P> {
    pub(super) fn new(graph: &'a PolygonGraph<V, E, P>, start: EdgeHandle) -> Self {
        Self {
            graph,
            start,
            current: Some(start),
        }
    }

    fn edge(&self, eh: EdgeHandle) -> &'a Edge<E> {
        &self.graph.edges[eh]
    }
}

impl<V, E, P> Iterator for Ring<'_, V, E, P> {
    type Item = EdgeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.current?;
        let next = self.edge(out).next;
        self.current = if next == self.start { None } else { Some(next) };
        Some(out)
    }
}

impl<V, E, P> FusedIterator for Ring<'_, V, E, P> {}

impl<V, E, P> Clone for Ring<'_, V, E, P> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            start: self.start,
            current: self.current,
        }
    }
}

impl<V, E, P> fmt::Debug for Ring<'_, V, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Ring")
            .field("start", &self.start)
            .field("current", &self.current)
            .finish()
    }
}


/// Iterator over the vertices of a polygon in ring order, starting with the
/// source vertex of the polygon's start edge.
///
/// Returned by [`PolygonGraph::polygon_vertices`].
#[derive(Debug)]
pub struct PolygonVertices<'a, V, E, P> {
    ring: Ring<'a, V, E, P>,
}

impl<'a, V, E, P> PolygonVertices<'a, V, E, P> {
    pub(super) fn new(ring: Ring<'a, V, E, P>) -> Self {
        Self { ring }
    }
}

impl<V, E, P> Iterator for PolygonVertices<'_, V, E, P> {
    type Item = VertexHandle;

    fn next(&mut self) -> Option<Self::Item> {
        // The source of an edge is the target of its predecessor.
        self.ring.next().map(|eh| {
            let prev = self.ring.edge(eh).prev;
            self.ring.edge(prev).target
        })
    }
}

impl<V, E, P> FusedIterator for PolygonVertices<'_, V, E, P> {}

impl<V, E, P> Clone for PolygonVertices<'_, V, E, P> {
    fn clone(&self) -> Self {
        Self { ring: self.ring.clone() }
    }
}


/// Iterator over the distinct polygons adjacent to a vertex, ordered by
/// polygon handle.
///
/// Returned by [`PolygonGraph::polygons_around_vertex`].
#[derive(Debug)]
pub struct PolygonsAroundVertex {
    it: smallvec::IntoIter<[PolygonHandle; INLINE_ENTRIES]>,
}

impl PolygonsAroundVertex {
    pub(super) fn new<V, E, P>(graph: &PolygonGraph<V, E, P>, vh: VertexHandle) -> Self {
        let mut polygons = graph.vertices[vh].outgoing.entries()
            .iter()
            .map(|e| graph.edges[e.edge].polygon)
            .collect::<SmallVec<[_; INLINE_ENTRIES]>>();

        // A ring that visits the vertex more than once has more than one
        // outgoing edge here.
        polygons.sort_unstable();
        polygons.dedup();

        Self { it: polygons.into_iter() }
    }
}

impl Iterator for PolygonsAroundVertex {
    type Item = PolygonHandle;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl ExactSizeIterator for PolygonsAroundVertex {}
impl FusedIterator for PolygonsAroundVertex {}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::Handle;

    fn v(i: usize) -> VertexHandle {
        VertexHandle::from_usize(i)
    }
    fn e(i: usize) -> EdgeHandle {
        EdgeHandle::from_usize(i)
    }

    fn edges_of(index: &AdjacencyIndex, target: VertexHandle) -> Vec<EdgeHandle> {
        index.find(target).iter().map(|e| e.edge).collect()
    }

    #[test]
    fn sorted_by_target() {
        let mut index = AdjacencyIndex::default();
        index.insert(v(5), e(0));
        index.insert(v(1), e(1));
        index.insert(v(3), e(2));

        let targets = index.entries().iter().map(|e| e.target).collect::<Vec<_>>();
        assert_eq!(targets, [v(1), v(3), v(5)]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn parallel_entries() {
        let mut index = AdjacencyIndex::default();
        index.insert(v(2), e(0));
        index.insert(v(7), e(1));
        index.insert(v(2), e(2));
        index.insert(v(2), e(3));

        assert_eq!(edges_of(&index, v(2)), [e(0), e(2), e(3)]);
        assert_eq!(edges_of(&index, v(7)), [e(1)]);
        assert!(edges_of(&index, v(4)).is_empty());
        assert!(edges_of(&index, v(9)).is_empty());

        assert!(index.remove(v(2), e(2)));
        assert_eq!(edges_of(&index, v(2)), [e(0), e(3)]);
    }

    #[test]
    fn remove_checks_edge_and_target() {
        let mut index = AdjacencyIndex::default();
        index.insert(v(1), e(0));

        assert!(!index.remove(v(1), e(1)));
        assert!(!index.remove(v(2), e(0)));
        assert!(index.remove(v(1), e(0)));
        assert!(index.is_empty());
        assert!(!index.remove(v(1), e(0)));
    }

    #[test]
    fn outgoing_edges_iter() {
        let mut index = AdjacencyIndex::default();
        index.insert(v(3), e(4));
        index.insert(v(1), e(8));

        let it = OutgoingEdges::new(index.entries());
        assert_eq!(it.len(), 2);
        assert_eq!(it.clone().collect::<Vec<_>>(), [e(8), e(4)]);
        assert_eq!(it.rev().collect::<Vec<_>>(), [e(4), e(8)]);
    }
}
