#![no_main]

use libfuzzer_sys::fuzz_target;
use graphalgos::prelude::*;

// first byte: node count, then (from, to, weight) triples
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let n = u32::from(count % 16) + 1;

    let mut graph = AdjacencyMatrixDirectedGraph::new();
    for label in 0..n {
        graph.add_node(GraphNode::new(label));
    }
    for triple in rest.chunks_exact(3) {
        let from = u32::from(triple[0]) % n;
        let to = u32::from(triple[1]) % n;
        let _ = graph.add_edge(GraphEdge::new(from, to, true, f64::from(triple[2])));
    }

    let mut dijkstra = DijkstraShortestPathComputer::new(&graph).unwrap();
    dijkstra.compute_shortest_paths_from(&0).unwrap();
    // the computers share node scratch state, so keep Dijkstra's answers before rerunning
    let expected: Vec<f64> = (0..n)
        .map(|target| dijkstra.shortest_distance_to(&target).unwrap())
        .collect();

    let mut bellman_ford = BellmanFordShortestPathComputer::new(&graph).unwrap();
    bellman_ford.compute_shortest_paths_from(&0).unwrap();

    for (target, distance) in (0..n).zip(expected) {
        assert_eq!(distance, bellman_ford.shortest_distance_to(&target).unwrap());
    }
});
