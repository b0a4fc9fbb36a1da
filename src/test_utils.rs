use crate::{Handle, PolygonGraph, VertexHandle};


/// Checks the integrity of a graph and compares the number of elements and
/// the degrees of the given vertices with the expected values.
macro_rules! check_graph {
    ($g:expr; {
        vertices: $nv:expr,
        polygons: $np:expr,
        edges: $ne:expr,
        degrees: { $($v:ident => $deg:expr),* $(,)? } $(,)?
    }) => {{
        let g = &$g;
        g.check_integrity();
        assert_eq!(g.num_vertices() as usize, $nv, "wrong number of vertices");
        assert_eq!(g.num_polygons() as usize, $np, "wrong number of polygons");
        assert_eq!(g.num_edges() as usize, $ne, "wrong number of edges");
        $(
            assert_eq!(g.degree($v) as usize, $deg, "wrong degree of `{}`", stringify!($v));
        )*
    }};
}

/// Creates a graph with `N` vertices whose payloads are their position.
pub(crate) fn graph_with_vertices<const N: usize>() -> (PolygonGraph<usize>, [VertexHandle; N]) {
    let mut g = PolygonGraph::new();
    let mut handles = [VertexHandle::from_usize(0); N];
    for (i, h) in handles.iter_mut().enumerate() {
        *h = g.add_vertex(i);
    }

    (g, handles)
}

