use heap_paths::{
    graphs::{adjacency_list_graph::AdjacencyListGraph, Distance, Graph, WeightedEdge},
    search::{
        collections::{indexed_min_heap::IndexedMinHeap, search_data::SearchData},
        dijkstra::{
            dijkstra_one_to_all, dijkstra_one_to_one, dijkstra_one_to_one_path,
            dijkstra_search, shortest_path_distances_par, Dijkstra,
        },
        path::{ShortestPathRequest, ShortestPathTestCase},
        PathFinding,
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn get_small_graph() -> AdjacencyListGraph {
    AdjacencyListGraph::from_edges(
        5,
        &[
            WeightedEdge::new(0, 1, 4),
            WeightedEdge::new(0, 2, 1),
            WeightedEdge::new(2, 1, 1),
            WeightedEdge::new(1, 3, 1),
            WeightedEdge::new(2, 3, 5),
        ],
    )
}

fn random_graph(rng: &mut StdRng, number_of_vertices: u32, number_of_edges: usize) -> AdjacencyListGraph {
    let edges: Vec<_> = (0..number_of_edges)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..20),
            )
        })
        .collect();
    AdjacencyListGraph::from_edges(number_of_vertices, &edges)
}

fn bellman_ford(graph: &dyn Graph, source: u32) -> Vec<Option<Distance>> {
    let mut distances = vec![None; graph.number_of_vertices() as usize];
    distances[source as usize] = Some(0);

    for _ in graph.vertices() {
        for tail in graph.vertices() {
            let Some(distance_tail) = distances[tail as usize] else {
                continue;
            };
            for edge in graph.edges(tail) {
                let alternative: Distance = distance_tail + edge.weight as Distance;
                let current = &mut distances[edge.head as usize];
                if current.map_or(true, |current| alternative < current) {
                    *current = Some(alternative);
                }
            }
        }
    }

    distances
}

#[test]
fn shortest_distance_on_small_graph() {
    let graph = get_small_graph();
    assert_eq!(dijkstra_one_to_one(&graph, 0, 3), Some(3));
    assert_eq!(dijkstra_one_to_one(&graph, 0, 1), Some(2));
    assert_eq!(dijkstra_one_to_one(&graph, 2, 3), Some(2));
}

#[test]
fn shortest_path_on_small_graph() {
    let graph = get_small_graph();
    let path = dijkstra_one_to_one_path(&graph, 0, 3).unwrap();

    assert_eq!(path.vertices, vec![0, 2, 1, 3]);
    assert_eq!(path.distance, 3);
    assert_eq!(graph.get_path_distance(&path.vertices), Some(3));
}

#[test]
fn isolated_vertex_is_unreachable() {
    let graph = get_small_graph();
    assert_eq!(dijkstra_one_to_one(&graph, 0, 4), None);
    assert_eq!(dijkstra_one_to_one_path(&graph, 0, 4), None);
}

#[test]
fn edges_are_directed() {
    let graph = get_small_graph();
    assert_eq!(dijkstra_one_to_one(&graph, 3, 0), None);
}

#[test]
fn source_equals_target() {
    let graph = get_small_graph();
    assert_eq!(dijkstra_one_to_one(&graph, 4, 4), Some(0));

    let path = dijkstra_one_to_one_path(&graph, 1, 1).unwrap();
    assert_eq!(path.vertices, vec![1]);
    assert_eq!(path.distance, 0);
}

#[test]
fn self_loops_and_parallel_edges() {
    let graph = AdjacencyListGraph::from_edges(
        2,
        &[
            WeightedEdge::new(0, 0, 1),
            WeightedEdge::new(0, 1, 9),
            WeightedEdge::new(0, 1, 2),
        ],
    );
    assert_eq!(dijkstra_one_to_one(&graph, 0, 1), Some(2));
}

#[test]
fn one_to_all_distances() {
    let graph = get_small_graph();
    assert_eq!(
        dijkstra_one_to_all(&graph, 0),
        vec![Some(0), Some(2), Some(1), Some(3), None]
    );
}

#[test]
#[should_panic(expected = "target 5 out of range")]
fn out_of_range_target_panics() {
    let graph = get_small_graph();
    dijkstra_one_to_one(&graph, 0, 5);
}

#[test]
fn agrees_with_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let graph = random_graph(&mut rng, 30, 90);
        let source = rng.gen_range(0..30);

        let expected = bellman_ford(&graph, source);
        assert_eq!(dijkstra_one_to_all(&graph, source), expected);

        for target in graph.vertices() {
            assert_eq!(
                dijkstra_one_to_one(&graph, source, target),
                expected[target as usize]
            );
            if let Some(path) = dijkstra_one_to_one_path(&graph, source, target) {
                assert_eq!(path.vertices.first(), Some(&source));
                assert_eq!(path.vertices.last(), Some(&target));
                assert_eq!(graph.get_path_distance(&path.vertices), Some(path.distance));
            }
        }
    }
}

#[test]
fn parallel_queries_match_sequential_ones() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng, 100, 400);
    let requests: Vec<_> = (0..200)
        .map(|_| ShortestPathRequest::new(rng.gen_range(0..100), rng.gen_range(0..100)))
        .collect();

    let distances = shortest_path_distances_par(&graph, &requests);
    for (request, distance) in requests.iter().zip(distances) {
        assert_eq!(
            distance,
            dijkstra_one_to_one(&graph, request.source, request.target)
        );
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    // Many equal weights, so ties between queued vertices are common.
    let edges: Vec<_> = (0..200)
        .map(|_| WeightedEdge::new(rng.gen_range(0..40), rng.gen_range(0..40), rng.gen_range(1..3)))
        .collect();
    let graph = AdjacencyListGraph::from_edges(40, &edges);

    let first = dijkstra_one_to_one_path(&graph, 0, 39);
    for _ in 0..10 {
        assert_eq!(dijkstra_one_to_one_path(&graph, 0, 39), first);
    }
}

#[test]
fn path_finding_trait() {
    let graph = get_small_graph();
    let pathfinder: Box<dyn PathFinding + '_> = Box::new(Dijkstra::new(&graph));

    assert_eq!(pathfinder.shortest_path_distance(0, 3), Some(3));
    assert_eq!(
        pathfinder.shortest_path(0, 3).map(|path| path.vertices),
        Some(vec![0, 2, 1, 3])
    );
}

#[test]
fn test_cases_from_json() {
    let graph = get_small_graph();
    let test_cases: Vec<ShortestPathTestCase> = serde_json::from_str(
        r#"[
            {"request": {"source": 0, "target": 3}, "distance": 3},
            {"request": {"source": 0, "target": 4}, "distance": null},
            {"request": {"source": 2, "target": 1}, "distance": 1}
        ]"#,
    )
    .unwrap();

    test_cases.iter().for_each(
        |ShortestPathTestCase {
             request: ShortestPathRequest { source, target },
             distance,
         }| {
            assert_eq!(distance, &dijkstra_one_to_one(&graph, *source, *target));
        },
    );
}

#[test]
fn search_data_and_queue_can_be_reused_after_clear() {
    let graph = get_small_graph();
    let mut data = SearchData::new(graph.number_of_vertices());
    let mut queue = IndexedMinHeap::with_capacity(graph.number_of_vertices() as usize);

    // Stops at vertex 1 while vertex 3 is still queued.
    dijkstra_search(&graph, &mut data, &mut queue, 0, Some(1));
    assert_eq!(data.get_finalized_distance(1), Some(2));
    assert!(queue.contains(3));

    data.clear();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(data.get_finalized_distance(0), None);

    dijkstra_search(&graph, &mut data, &mut queue, 1, Some(3));
    assert_eq!(data.get_finalized_distance(3), dijkstra_one_to_one(&graph, 1, 3));
    assert_eq!(data.get_finalized_distance(3), Some(1));
    assert_eq!(data.get_finalized_distance(0), None);

    data.clear();
    queue.clear();
    dijkstra_search(&graph, &mut data, &mut queue, 2, None);
    for target in graph.vertices() {
        assert_eq!(
            data.get_finalized_distance(target),
            dijkstra_one_to_one(&graph, 2, target)
        );
    }
}
