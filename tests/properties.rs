//! Randomized tests that build graphs from arbitrary polygon lists and check
//! that the structure stays consistent under removals and copies.

use proptest::prelude::*;

use polygraph::{PolygonGraph, PolygonHandle, VertexHandle};


/// A random graph description: the number of vertices and a list of polygons,
/// each given as vertex indices. Vertices may repeat within a polygon.
fn graph_desc() -> impl Strategy<Value = (usize, Vec<Vec<usize>>)> {
    (3usize..12).prop_flat_map(|n| {
        let polygon = prop::collection::vec(0..n, 3..7);
        (Just(n), prop::collection::vec(polygon, 0..10))
    })
}

fn build(n: usize, polygons: &[Vec<usize>]) -> (PolygonGraph<usize, (), usize>, Vec<VertexHandle>, Vec<PolygonHandle>) {
    let mut g = PolygonGraph::new();
    let vertices = (0..n).map(|i| g.add_vertex(i)).collect::<Vec<_>>();
    let handles = polygons.iter()
        .enumerate()
        .map(|(i, indices)| {
            let ring = indices.iter().map(|&vi| vertices[vi]).collect::<Vec<_>>();
            g.add_polygon(&ring, i).into_option().expect("at least three vertices")
        })
        .collect();

    (g, vertices, handles)
}

/// Returns `(polygon payload, vertex payloads in ring order)` for all polygons.
fn rings(g: &PolygonGraph<usize, (), usize>) -> Vec<(usize, Vec<usize>)> {
    g.polygons()
        .map(|(ph, p)| {
            let vertices = g.polygon_vertices(ph).map(|vh| *g[vh].payload()).collect();
            (*p.payload(), vertices)
        })
        .collect()
}


proptest! {
    #[test]
    fn construction((n, polygons) in graph_desc()) {
        let (g, vertices, handles) = build(n, &polygons);
        g.check_integrity();

        let total = polygons.iter().map(|p| p.len()).sum::<usize>();
        prop_assert_eq!(g.num_vertices() as usize, n);
        prop_assert_eq!(g.num_polygons() as usize, polygons.len());
        prop_assert_eq!(g.num_edges() as usize, total);

        let degree_sum = vertices.iter().map(|&vh| g.degree(vh) as usize).sum::<usize>();
        prop_assert_eq!(degree_sum, total);

        for (ph, indices) in handles.iter().zip(&polygons) {
            let expected = indices.iter().map(|&vi| vertices[vi]).collect::<Vec<_>>();
            prop_assert_eq!(g.ring_len(*ph), indices.len());
            prop_assert_eq!(g.polygon_vertices(*ph).collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn adjacency_matches_polygons((n, polygons) in graph_desc()) {
        let (g, vertices, _) = build(n, &polygons);

        for from in 0..n {
            for to in 0..n {
                let expected = polygons.iter()
                    .flat_map(|p| (0..p.len()).map(move |i| (p[i], p[(i + 1) % p.len()])))
                    .filter(|&pair| pair == (from, to))
                    .count();
                let found = g.find_outgoing_edges(vertices[from], vertices[to]).collect::<Vec<_>>();

                prop_assert_eq!(found.len(), expected);
                for eh in found {
                    prop_assert_eq!(g.edge_source(eh), vertices[from]);
                    prop_assert_eq!(g[eh].target(), vertices[to]);
                }
            }
        }
    }

    #[test]
    fn remove_vertex_cascades((n, polygons) in graph_desc(), victim in 0usize..12) {
        let victim = victim % n;
        let (mut g, vertices, handles) = build(n, &polygons);

        let incident = polygons.iter().filter(|p| p.contains(&victim)).count();
        g.remove_vertex(vertices[victim]);
        g.check_integrity();

        prop_assert_eq!(g.num_vertices() as usize, n - 1);
        prop_assert_eq!(g.num_polygons() as usize, polygons.len() - incident);

        for (ph, indices) in handles.iter().zip(&polygons) {
            prop_assert_eq!(g.contains_polygon(*ph), !indices.contains(&victim));
        }
        let remaining_len = polygons.iter()
            .filter(|p| !p.contains(&victim))
            .map(|p| p.len())
            .sum::<usize>();
        prop_assert_eq!(g.num_edges() as usize, remaining_len);
    }

    #[test]
    fn remove_polygons_in_any_order(
        (n, polygons) in graph_desc(),
        order in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
    ) {
        let (mut g, _, mut handles) = build(n, &polygons);
        let mut expected_edges = g.num_edges() as usize;

        for idx in order {
            if handles.is_empty() {
                break;
            }
            let ph = handles.remove(idx.index(handles.len()));
            expected_edges -= g.ring_len(ph);
            g.remove_polygon(ph);
            g.check_integrity();

            prop_assert_eq!(g.num_polygons() as usize, handles.len());
            prop_assert_eq!(g.num_edges() as usize, expected_edges);
        }
    }

    #[test]
    fn copy_is_equal_and_independent((n, polygons) in graph_desc()) {
        let (g, vertices, _) = build(n, &polygons);
        let mut copy = g.clone();
        copy.check_integrity();

        prop_assert_eq!(copy.num_vertices(), g.num_vertices());
        prop_assert_eq!(copy.num_polygons(), g.num_polygons());
        prop_assert_eq!(copy.num_edges(), g.num_edges());
        prop_assert_eq!(rings(&copy), rings(&g));

        copy.clear();
        copy.check_integrity();
        prop_assert!(copy.is_empty());
        prop_assert_eq!(g.num_polygons() as usize, polygons.len());
        prop_assert!(vertices.iter().all(|&vh| g.contains_vertex(vh)));
    }

    #[test]
    fn isolated_sweep((n, polygons) in graph_desc()) {
        let (mut g, vertices, _) = build(n, &polygons);

        let isolated = (0..n).filter(|vi| !polygons.iter().any(|p| p.contains(vi))).count();
        prop_assert_eq!(g.remove_isolated_vertices() as usize, isolated);
        g.check_integrity();

        prop_assert_eq!(g.num_vertices() as usize, n - isolated);
        prop_assert!(g.vertices().all(|(_, v)| !v.is_isolated()));
        prop_assert_eq!(g.num_polygons() as usize, polygons.len());
        prop_assert!(vertices.iter().filter(|&&vh| g.contains_vertex(vh)).count() == n - isolated);
    }
}
