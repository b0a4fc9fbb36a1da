//! Everything related to the [`PolygonGraph`].

// # Some notes for developers about this implementation
//
// - Three stores hold all elements: vertices, polygons and half edges. Every
//   cross reference is a handle into one of these stores.
// - Half edges are owned by the ring of their polygon. The adjacency index of
//   a vertex only refers to them.
// - The source vertex of a half edge is not stored. It is the target of the
//   previous half edge in the ring, or equivalently, the vertex in whose
//   adjacency index the half edge is registered.
// - The half edges of one polygon are pushed in one go, so they have
//   consecutive handle indices. `add_polygon` uses this to link the ring
//   without a second pass. Nothing else relies on it.

use std::{fmt, ops};

use log::{debug, trace};
use smallvec::SmallVec;

use crate::{
    Opt,
    error::{Element, GraphError},
    handle::{consecutive, hsize, opt, EdgeHandle, Handle, PolygonHandle, VertexHandle},
    store::{self, Store},
};
use self::adj::AdjacencyIndex;

pub use self::adj::{OutgoingEdges, PolygonsAroundVertex, PolygonVertices, Ring};


mod adj;
mod copy;


/// The minimal number of vertices (and thus half edges) of a polygon.
pub const MIN_POLYGON_LEN: usize = 3;


// ===============================================================================================
// ===== Definition of types stored inside the data structure
// ===============================================================================================

/// A vertex: a payload plus the adjacency index of its outgoing half edges.
///
/// Obtained via [`PolygonGraph::vertex`] or by indexing the graph with a
/// [`VertexHandle`]. The payload can be changed via
/// [`PolygonGraph::vertex_payload_mut`].
pub struct Vertex<V> {
    outgoing: AdjacencyIndex,
    payload: V,
}

impl<V> Vertex<V> {
    /// The number of outgoing half edges.
    pub fn degree(&self) -> hsize {
        self.outgoing.len() as hsize
    }

    /// Returns `true` if no half edge starts at this vertex. Isolated vertices
    /// are not part of any polygon.
    pub fn is_isolated(&self) -> bool {
        self.outgoing.is_empty()
    }

    /// The outgoing half edges, ordered by the handle of their target.
    pub fn outgoing_edges(&self) -> OutgoingEdges<'_> {
        OutgoingEdges::new(self.outgoing.entries())
    }

    pub fn payload(&self) -> &V {
        &self.payload
    }
}

/// A directed half edge in the boundary ring of exactly one polygon.
///
/// Obtained via [`PolygonGraph::edge`] or by indexing the graph with an
/// [`EdgeHandle`]. The payload can be changed via
/// [`PolygonGraph::edge_payload_mut`].
pub struct Edge<E> {
    target: VertexHandle,
    polygon: PolygonHandle,
    next: EdgeHandle,
    prev: EdgeHandle,
    payload: E,
}

impl<E> Edge<E> {
    /// The vertex this half edge points to.
    pub fn target(&self) -> VertexHandle {
        self.target
    }

    /// The polygon whose ring this half edge is part of.
    pub fn polygon(&self) -> PolygonHandle {
        self.polygon
    }

    /// The next half edge in the polygon's ring. Its source is this edge's
    /// target.
    pub fn next(&self) -> EdgeHandle {
        self.next
    }

    /// The previous half edge in the polygon's ring. Its target is this
    /// edge's source.
    pub fn prev(&self) -> EdgeHandle {
        self.prev
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}

/// A polygon: a payload plus a designated start edge of its ring.
///
/// Obtained via [`PolygonGraph::polygon`] or by indexing the graph with a
/// [`PolygonHandle`]. The payload can be changed via
/// [`PolygonGraph::polygon_payload_mut`].
pub struct Polygon<P> {
    start: EdgeHandle,
    payload: P,
}

impl<P> Polygon<P> {
    /// The start edge of the ring. It's the edge from the first to the second
    /// vertex passed to [`PolygonGraph::add_polygon`].
    pub fn start_edge(&self) -> EdgeHandle {
        self.start
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }
}


// ===============================================================================================
// ===== The graph itself
// ===============================================================================================

/// A set of polygons sharing vertices, represented by rings of directed half
/// edges.
///
/// Each polygon's boundary is a closed ring of at least three half edges.
/// Each half edge knows its target vertex, its polygon and its two neighbors
/// in the ring. Each vertex keeps an [adjacency index](Self::find_outgoing_edges)
/// of the half edges that start at it, sorted by target vertex.
///
/// Arbitrary payloads can be attached to vertices (`V`), half edges (`E`)
/// and polygons (`P`). The graph never looks at them.
///
/// The structure does not enforce manifoldness: two polygons may share the
/// same directed vertex pair, and any number of polygons may meet at a
/// vertex or an edge.
///
/// # Handles and removal
///
/// All elements are stored in node-stable stores (see [`Store`]): adding or
/// removing elements never invalidates handles to other elements, and
/// storage slots are never reused. Removing an element invalidates only the
/// handles to that element (and, for polygons, to its half edges).
///
/// Methods taking handles panic if a handle does not refer to an existing
/// element of this graph. Passing a handle obtained from another graph is a
/// logic error: it might refer to an unrelated element. The `try_*` methods
/// check their arguments and return a [`GraphError`] instead of panicking.
///
/// # Copies
///
/// Cloning a graph creates an independent graph with the same topology and
/// payloads. Polygons are rebuilt with the same algorithm as
/// [`add_polygon`](Self::add_polygon), so the copy is exactly as consistent
/// as a freshly built graph. Handles of the copy are *not* guaranteed to
/// equal the handles of the original. Moving a graph (or using
/// [`std::mem::take`]) transfers the stores without touching any element.
pub struct PolygonGraph<V = (), E = (), P = ()> {
    vertices: Store<VertexHandle, Vertex<V>>,
    polygons: Store<PolygonHandle, Polygon<P>>,
    edges: Store<EdgeHandle, Edge<E>>,
}

impl<V, E, P> PolygonGraph<V, E, P> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Store::new(),
            polygons: Store::new(),
            edges: Store::new(),
        }
    }

    /// Creates an empty graph with memory reserved for the given number of
    /// vertices and polygons. Memory for `3 * num_polygons` half edges is
    /// reserved as well.
    pub fn with_capacity(num_vertices: usize, num_polygons: usize) -> Self {
        Self {
            vertices: Store::with_capacity(num_vertices),
            polygons: Store::with_capacity(num_polygons),
            edges: Store::with_capacity(MIN_POLYGON_LEN * num_polygons),
        }
    }

    // ===== Counts and element access =======================================

    pub fn num_vertices(&self) -> hsize {
        self.vertices.num_elements()
    }

    pub fn num_polygons(&self) -> hsize {
        self.polygons.num_elements()
    }

    /// Returns the number of half edges, which is the sum of all ring lengths.
    pub fn num_edges(&self) -> hsize {
        self.edges.num_elements()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, vh: VertexHandle) -> bool {
        self.vertices.contains_handle(vh)
    }

    pub fn contains_polygon(&self, ph: PolygonHandle) -> bool {
        self.polygons.contains_handle(ph)
    }

    pub fn contains_edge(&self, eh: EdgeHandle) -> bool {
        self.edges.contains_handle(eh)
    }

    pub fn vertex(&self, vh: VertexHandle) -> &Vertex<V> {
        &self.vertices[vh]
    }

    pub fn polygon(&self, ph: PolygonHandle) -> &Polygon<P> {
        &self.polygons[ph]
    }

    pub fn edge(&self, eh: EdgeHandle) -> &Edge<E> {
        &self.edges[eh]
    }

    // Only payloads are handed out mutably: a `&mut Vertex` would allow
    // swapping out adjacency information.

    pub fn vertex_payload_mut(&mut self, vh: VertexHandle) -> &mut V {
        &mut self.vertices[vh].payload
    }

    pub fn polygon_payload_mut(&mut self, ph: PolygonHandle) -> &mut P {
        &mut self.polygons[ph].payload
    }

    pub fn edge_payload_mut(&mut self, eh: EdgeHandle) -> &mut E {
        &mut self.edges[eh].payload
    }

    /// Returns the vertex `eh` starts at.
    pub fn edge_source(&self, eh: EdgeHandle) -> VertexHandle {
        self.edges[self.edges[eh].prev].target
    }

    /// Returns the number of outgoing half edges of `vh`.
    pub fn degree(&self, vh: VertexHandle) -> hsize {
        self.vertices[vh].degree()
    }

    /// Returns the number of half edges (which equals the number of vertices)
    /// of the given polygon. This walks the ring.
    pub fn ring_len(&self, ph: PolygonHandle) -> usize {
        self.ring(ph).count()
    }

    // ===== Iteration =======================================================

    /// Iterator over all vertex handles in store order.
    pub fn vertex_handles(&self) -> store::Handles<'_, VertexHandle, Vertex<V>> {
        self.vertices.handles()
    }

    /// Iterator over all polygon handles in store order.
    pub fn polygon_handles(&self) -> store::Handles<'_, PolygonHandle, Polygon<P>> {
        self.polygons.handles()
    }

    /// Iterator over all half edge handles in store order.
    pub fn edge_handles(&self) -> store::Handles<'_, EdgeHandle, Edge<E>> {
        self.edges.handles()
    }

    /// Iterator over all vertices (with handles) in store order.
    pub fn vertices(&self) -> store::Iter<'_, VertexHandle, Vertex<V>> {
        self.vertices.iter()
    }

    /// Iterator over mutable references to all vertex payloads in store
    /// order.
    pub fn vertex_payloads_mut(&mut self) -> impl Iterator<Item = (VertexHandle, &mut V)> + '_ {
        self.vertices.iter_mut().map(|(vh, v)| (vh, &mut v.payload))
    }

    /// Iterator over all polygons (with handles) in store order.
    pub fn polygons(&self) -> store::Iter<'_, PolygonHandle, Polygon<P>> {
        self.polygons.iter()
    }

    /// Iterator over mutable references to all polygon payloads in store
    /// order.
    pub fn polygon_payloads_mut(&mut self) -> impl Iterator<Item = (PolygonHandle, &mut P)> + '_ {
        self.polygons.iter_mut().map(|(ph, p)| (ph, &mut p.payload))
    }

    /// Iterator over all half edges (with handles) in store order.
    pub fn edges(&self) -> store::Iter<'_, EdgeHandle, Edge<E>> {
        self.edges.iter()
    }

    /// Returns the first vertex with an index ≥ `start`'s index. This is a
    /// low level building block for iterating while mutating the graph.
    pub fn next_vertex_handle_from(&self, start: VertexHandle) -> Opt<VertexHandle> {
        opt(self.vertices.next_handle_from(start))
    }

    /// Returns the first polygon with an index ≥ `start`'s index. This is a
    /// low level building block for iterating while mutating the graph.
    pub fn next_polygon_handle_from(&self, start: PolygonHandle) -> Opt<PolygonHandle> {
        opt(self.polygons.next_handle_from(start))
    }

    /// Iterator over the half edges of the polygon's ring, starting with its
    /// start edge.
    pub fn ring(&self, ph: PolygonHandle) -> Ring<'_, V, E, P> {
        Ring::new(self, self.polygons[ph].start)
    }

    /// Iterator over the vertices of the polygon in ring order. The first
    /// vertex is the source of the start edge, so this yields the vertices in
    /// the order in which they were passed to `add_polygon`.
    pub fn polygon_vertices(&self, ph: PolygonHandle) -> PolygonVertices<'_, V, E, P> {
        PolygonVertices::new(self.ring(ph))
    }

    /// Iterator over all half edges starting at `vh`, ordered by the handle
    /// of their target vertex.
    pub fn outgoing_edges(&self, vh: VertexHandle) -> OutgoingEdges<'_> {
        self.vertices[vh].outgoing_edges()
    }

    /// Iterator over the distinct polygons that have `vh` in their ring.
    pub fn polygons_around_vertex(&self, vh: VertexHandle) -> PolygonsAroundVertex {
        PolygonsAroundVertex::new(self, vh)
    }

    // ===== Adjacency query =================================================

    /// Returns all half edges from `from` to `to`.
    ///
    /// This is a range lookup in the adjacency index of `from`, keyed by the
    /// identity of `to`; payloads are never compared. The result is empty if
    /// no polygon steps from `from` to `to`. More than one result means that
    /// several polygons share this directed vertex pair (non-manifold
    /// adjacency); they can be distinguished by [`Edge::polygon`].
    ///
    /// Note that half edges from `to` to `from` are not returned: the
    /// opposite direction is a different key in a different index.
    pub fn find_outgoing_edges(&self, from: VertexHandle, to: VertexHandle) -> OutgoingEdges<'_> {
        OutgoingEdges::new(self.vertices[from].outgoing.find(to))
    }

    // ===== Vertex lifecycle ================================================

    /// Adds a new isolated vertex with the given payload and returns its
    /// handle.
    pub fn add_vertex(&mut self, payload: V) -> VertexHandle {
        let vh = self.vertices.push(Vertex {
            outgoing: AdjacencyIndex::default(),
            payload,
        });
        trace!("added vertex {:?}", vh);
        vh
    }

    /// Adds a new isolated vertex with `V::default()` as payload.
    pub fn add_default_vertex(&mut self) -> VertexHandle
    where
        V: Default,
    {
        self.add_vertex(V::default())
    }

    /// Removes the vertex and all polygons that have it in their ring.
    ///
    /// Other vertices of the removed polygons are not removed, even if they
    /// become isolated (see [`remove_isolated_vertices`][Self::remove_isolated_vertices]).
    ///
    /// Returns the next vertex in store order (the sentinel if `vh` was the
    /// last one), which allows removing vertices while iterating.
    ///
    /// # Panics
    ///
    /// If `vh` does not refer to an existing vertex.
    pub fn remove_vertex(&mut self, vh: VertexHandle) -> Opt<VertexHandle> {
        // Every ring passing through the vertex contributes at least one
        // outgoing edge, so this finds all adjacent polygons.
        let incident = self.polygons_around_vertex(vh).collect::<SmallVec<[_; 8]>>();
        if !incident.is_empty() {
            debug!("removing vertex {:?} removes {} polygon(s): {:?}", vh, incident.len(), incident);
        }
        for ph in incident {
            self.remove_polygon(ph);
        }

        debug_assert!(self.vertices[vh].is_isolated());
        self.vertices.remove(vh);
        trace!("removed vertex {:?}", vh);

        opt(self.vertices.next_handle_after(vh))
    }

    /// Like [`remove_vertex`][Self::remove_vertex], but returns an error
    /// instead of panicking if `vh` does not refer to an existing vertex.
    pub fn try_remove_vertex(&mut self, vh: VertexHandle) -> Result<Opt<VertexHandle>, GraphError> {
        if !self.contains_vertex(vh) {
            return Err(GraphError::stale(Element::Vertex, vh.idx()));
        }

        Ok(self.remove_vertex(vh))
    }

    /// Removes all vertices without outgoing half edges (i.e. vertices that
    /// are not part of any polygon) and returns how many were removed.
    pub fn remove_isolated_vertices(&mut self) -> hsize {
        let isolated = self.vertices.iter()
            .filter(|(_, v)| v.is_isolated())
            .map(|(vh, _)| vh)
            .collect::<Vec<_>>();

        for &vh in &isolated {
            self.vertices.remove(vh);
        }

        debug!("removed {} isolated vertices", isolated.len());
        isolated.len() as hsize
    }

    // ===== Polygon lifecycle ===============================================

    /// Adds a polygon with the given vertices and payload. The half edges of
    /// the new polygon get `E::default()` as payload.
    ///
    /// The polygon's ring consists of one half edge for each consecutive pair
    /// of `vertices`, including the pair `(last, first)`. The start edge is
    /// the one from `vertices[0]` to `vertices[1]`.
    ///
    /// If fewer than three vertices are given, nothing is changed and the
    /// sentinel `Opt::none()` is returned. That's the same value that
    /// [`remove_polygon`][Self::remove_polygon] returns when there is no next
    /// polygon. Use [`try_add_polygon`][Self::try_add_polygon] to get a
    /// distinct error instead.
    ///
    /// A vertex may appear more than once in `vertices`; no manifoldness
    /// checks are performed.
    ///
    /// # Panics
    ///
    /// If one of the handles does not refer to an existing vertex. The check
    /// is done before anything is changed.
    pub fn add_polygon(&mut self, vertices: &[VertexHandle], payload: P) -> Opt<PolygonHandle>
    where
        E: Default,
    {
        if vertices.len() < MIN_POLYGON_LEN {
            debug!(
                "rejected polygon with {} vertices (at least {} required)",
                vertices.len(),
                MIN_POLYGON_LEN,
            );
            return Opt::none();
        }

        for &vh in vertices {
            assert!(self.vertices.contains_handle(vh), "vertex {:?} of new polygon does not exist", vh);
        }

        Opt::some(self.insert_polygon(vertices, payload, |_| E::default()))
    }

    /// Adds a polygon with `P::default()` as payload. See
    /// [`add_polygon`][Self::add_polygon].
    pub fn add_default_polygon(&mut self, vertices: &[VertexHandle]) -> Opt<PolygonHandle>
    where
        E: Default,
        P: Default,
    {
        self.add_polygon(vertices, P::default())
    }

    /// Like [`add_polygon`][Self::add_polygon], but returns an error if fewer
    /// than three vertices are given or if one of the vertex handles is
    /// invalid. The graph is not changed in the error case.
    pub fn try_add_polygon(
        &mut self,
        vertices: &[VertexHandle],
        payload: P,
    ) -> Result<PolygonHandle, GraphError>
    where
        E: Default,
    {
        if vertices.len() < MIN_POLYGON_LEN {
            return Err(GraphError::TooFewVertices { count: vertices.len() });
        }

        if let Some(&vh) = vertices.iter().find(|&&vh| !self.contains_vertex(vh)) {
            return Err(GraphError::stale(Element::Vertex, vh.idx()));
        }

        Ok(self.insert_polygon(vertices, payload, |_| E::default()))
    }

    /// Creates the polygon, its half edges and the adjacency entries. The
    /// caller has to make sure that `vertices` has at least three elements
    /// and that all of them exist. `edge_payload` is called with the position
    /// of each half edge in the ring (0 is the start edge).
    fn insert_polygon(
        &mut self,
        vertices: &[VertexHandle],
        payload: P,
        mut edge_payload: impl FnMut(usize) -> E,
    ) -> PolygonHandle {
        debug_assert!(vertices.len() >= MIN_POLYGON_LEN);

        let len = vertices.len();
        let first = self.edges.next_push_handle().to_usize();
        // Checked here, before anything is pushed.
        let edge_at = consecutive::<EdgeHandle>(first, len);

        let ph = self.polygons.push(Polygon {
            start: edge_at(0),
            payload,
        });

        for i in 0..len {
            let source = vertices[i];
            let target = vertices[(i + 1) % len];

            let eh = self.edges.push(Edge {
                target,
                polygon: ph,
                next: edge_at((i + 1) % len),
                prev: edge_at((i + len - 1) % len),
                payload: edge_payload(i),
            });
            debug_assert_eq!(eh, edge_at(i));

            self.vertices[source].outgoing.insert(target, eh);
            trace!("added edge {:?}: {:?} -> {:?}", eh, source, target);
        }

        debug!("added polygon {:?} with {} vertices", ph, len);
        ph
    }

    /// Removes the polygon and all of its half edges.
    ///
    /// The vertices of the polygon are not removed, even if they become
    /// isolated. Returns the next polygon in store order (the sentinel if
    /// `ph` was the last one), which allows removing polygons while
    /// iterating.
    ///
    /// # Panics
    ///
    /// If `ph` does not refer to an existing polygon.
    pub fn remove_polygon(&mut self, ph: PolygonHandle) -> Opt<PolygonHandle> {
        let start = self.polygons[ph].start;

        // We start right after the start edge and stop after processing the
        // start edge itself. The source of each edge is the target of the
        // edge processed before it, so we never have to look at a removed
        // edge.
        let mut source = self.edges[start].target;
        let mut current = self.edges[start].next;
        let mut removed = 0;
        loop {
            let edge = match self.edges.remove(current) {
                Some(edge) => edge,
                None => panic!("bug: ring of {:?} refers to missing edge {:?}", ph, current),
            };
            debug_assert_eq!(edge.polygon, ph);

            let deregistered = self.vertices[source].outgoing.remove(edge.target, current);
            debug_assert!(deregistered, "edge {:?} missing in adjacency index", current);
            trace!("removed edge {:?}: {:?} -> {:?}", current, source, edge.target);
            removed += 1;

            if current == start {
                break;
            }
            source = edge.target;
            current = edge.next;
        }

        self.polygons.remove(ph);
        debug!("removed polygon {:?} with {} edges", ph, removed);

        opt(self.polygons.next_handle_after(ph))
    }

    /// Like [`remove_polygon`][Self::remove_polygon], but returns an error
    /// instead of panicking if `ph` does not refer to an existing polygon.
    pub fn try_remove_polygon(
        &mut self,
        ph: PolygonHandle,
    ) -> Result<Opt<PolygonHandle>, GraphError> {
        if !self.contains_polygon(ph) {
            return Err(GraphError::stale(Element::Polygon, ph.idx()));
        }

        Ok(self.remove_polygon(ph))
    }

    /// Removes all polygons (via [`remove_polygon`][Self::remove_polygon])
    /// and then all vertices.
    ///
    /// Handles handed out before this call are not handed out again
    /// afterwards.
    pub fn clear(&mut self) {
        let mut next = self.next_polygon_handle_from(PolygonHandle::new(0));
        while let Some(ph) = next.into_option() {
            next = self.remove_polygon(ph);
        }

        // All edges are gone, so there is nothing to deregister.
        debug_assert!(self.edges.is_empty());
        self.vertices.remove_all();
        debug!("cleared polygon graph");
    }

    // ===== Integrity =======================================================

    /// Checks all invariants of the data structure and panics if one of them
    /// is violated. This is mostly useful for tests and debugging.
    ///
    /// The following is checked:
    /// - Every half edge belongs to exactly one polygon ring and is
    ///   registered in exactly one adjacency index.
    /// - `next` and `prev` are inverse to each other and form one cycle per
    ///   polygon with at least three half edges.
    /// - An adjacency entry `(target, edge)` in vertex `v`'s index means
    ///   that `edge` steps from `v` to `target`.
    /// - Every handle stored in an element refers to an existing element.
    /// - Each adjacency index is sorted by target.
    pub fn check_integrity(&self) {
        let num_edges = self.edges.num_elements() as usize;

        // Rings
        let mut visited = vec![false; self.edges.next_push_handle().to_usize()];
        let mut ring_edges = 0;
        for (ph, polygon) in self.polygons.iter() {
            let start = polygon.start;
            let mut current = start;
            let mut len = 0;
            loop {
                let edge = match self.edges.get(current) {
                    Some(edge) => edge,
                    None => panic!("ring of {:?} refers to missing edge {:?}", ph, current),
                };
                assert_eq!(edge.polygon, ph, "edge {:?} in ring of {:?} has wrong polygon", current, ph);
                assert!(
                    !visited[current.to_usize()],
                    "edge {:?} visited twice (ring of {:?})",
                    current,
                    ph,
                );
                visited[current.to_usize()] = true;
                assert!(self.vertices.contains_handle(edge.target), "target of {:?} missing", current);

                let next = match self.edges.get(edge.next) {
                    Some(next) => next,
                    None => panic!("next of {:?} is missing edge {:?}", current, edge.next),
                };
                assert_eq!(next.prev, current, "next/prev of {:?} are not inverse", current);

                len += 1;
                current = edge.next;
                if current == start {
                    break;
                }
            }

            assert!(len >= MIN_POLYGON_LEN, "ring of {:?} has only {} edges", ph, len);
            ring_edges += len;
        }
        assert_eq!(ring_edges, num_edges, "some edges are not part of any ring");

        // Adjacency indices
        let mut registered = 0;
        for (vh, vertex) in self.vertices.iter() {
            let entries = vertex.outgoing.entries();
            assert!(
                entries.windows(2).all(|w| w[0].target <= w[1].target),
                "adjacency index of {:?} is not sorted: {:?}",
                vh,
                vertex.outgoing,
            );

            for entry in entries {
                let edge = match self.edges.get(entry.edge) {
                    Some(edge) => edge,
                    None => panic!("index of {:?} refers to missing edge {:?}", vh, entry.edge),
                };
                assert_eq!(edge.target, entry.target, "index of {:?}: wrong key for {:?}", vh, entry.edge);
                assert_eq!(
                    self.edges[edge.prev].target,
                    vh,
                    "edge {:?} is registered at {:?}, but starts somewhere else",
                    entry.edge,
                    vh,
                );
                registered += 1;
            }
        }
        assert_eq!(registered, num_edges, "number of adjacency entries and edges differ");
    }
}

impl<V, E, P> Default for PolygonGraph<V, E, P> {
    fn default() -> Self {
        Self::new()
    }
}


// ===============================================================================================
// ===== Trait impls
// ===============================================================================================

macro_rules! impl_index {
    ($handle:ident, $field:ident, $out:ident<$param:ident>) => {
        impl<V, E, P> ops::Index<$handle> for PolygonGraph<V, E, P> {
            type Output = $out<$param>;
            fn index(&self, idx: $handle) -> &Self::Output {
                &self.$field[idx]
            }
        }
    }
}

impl_index!(VertexHandle, vertices, Vertex<V>);
impl_index!(PolygonHandle, polygons, Polygon<P>);
impl_index!(EdgeHandle, edges, Edge<E>);


impl<V: fmt::Debug> fmt::Debug for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("outgoing", &self.outgoing)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<E: fmt::Debug> fmt::Debug for Edge<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Edge")
            .field("target", &self.target)
            .field("polygon", &self.polygon)
            .field("next", &self.next)
            .field("prev", &self.prev)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<P: fmt::Debug> fmt::Debug for Polygon<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Polygon")
            .field("start", &self.start)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<V: fmt::Debug, E: fmt::Debug, P: fmt::Debug> fmt::Debug for PolygonGraph<V, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PolygonGraph")
            .field("vertices", &self.vertices)
            .field("polygons", &self.polygons)
            .field("edges", &self.edges)
            .finish()
    }
}
