//! Benchmarks for the graph algorithms.
//!
//! Measures the algorithms on generated graphs of increasing size:
//! - Dijkstra and Bellman-Ford from a single source
//! - Floyd-Warshall over all pairs
//! - Kruskal and Prim minimum spanning trees
//! - Raw heap insert/extract throughput

extern crate graphalgos;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphalgos::prelude::*;
use std::cell::Cell;
use std::hint::black_box;

/// Pseudo-random weight in `[1, 100]` for the edge `from -> to`.
fn weight(from: u32, to: u32) -> f64 {
    let mixed = (u64::from(from) * 2_654_435_761) ^ (u64::from(to) * 40_503);
    (mixed % 100 + 1) as f64
}

/// Directed graph where every node links to the next `fan_out` nodes, wrapping around.
fn ring_directed(n: u32, fan_out: u32) -> AdjacencyMatrixDirectedGraph<u32> {
    let mut graph = AdjacencyMatrixDirectedGraph::with_capacity(n as usize);
    for label in 0..n {
        graph.add_node(GraphNode::new(label));
    }
    for from in 0..n {
        for step in 1..=fan_out {
            let to = (from + step) % n;
            let _ = graph.add_edge(GraphEdge::new(from, to, true, weight(from, to)));
        }
    }
    graph
}

/// Undirected counterpart of [`ring_directed`].
fn ring_undirected(n: u32, fan_out: u32) -> AdjacencyListUndirectedGraph<u32> {
    let mut graph = AdjacencyListUndirectedGraph::new();
    for label in 0..n {
        graph.add_node(GraphNode::new(label));
    }
    for from in 0..n {
        for step in 1..=fan_out {
            let to = (from + step) % n;
            let _ = graph.add_edge(GraphEdge::new(from, to, false, weight(from, to)));
        }
    }
    graph
}

/// Benchmark single-source shortest paths.
fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");
    for n in [64u32, 256] {
        let graph = ring_directed(n, 4);

        group.bench_with_input(BenchmarkId::new("dijkstra", n), &graph, |b, graph| {
            let mut dijkstra = DijkstraShortestPathComputer::new(graph).unwrap();
            b.iter(|| {
                dijkstra.compute_shortest_paths_from(black_box(&0)).unwrap();
                black_box(dijkstra.shortest_distance_to(&(n - 1)).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("bellman_ford", n), &graph, |b, graph| {
            let mut bellman_ford =
                BellmanFordShortestPathComputer::with_config(graph, ShortestPathConfig::fast())
                    .unwrap();
            b.iter(|| {
                bellman_ford
                    .compute_shortest_paths_from(black_box(&0))
                    .unwrap();
                black_box(bellman_ford.shortest_distance_to(&(n - 1)).unwrap())
            });
        });
    }
    group.finish();
}

/// Benchmark all-pairs shortest paths.
fn bench_floyd_warshall(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    for n in [32u32, 96] {
        let graph = ring_directed(n, 3);
        group.bench_with_input(BenchmarkId::new("floyd_warshall", n), &graph, |b, graph| {
            b.iter(|| {
                let mut floyd_warshall =
                    FloydWarshallAllPairsShortestPathComputer::new(graph).unwrap();
                floyd_warshall.compute_shortest_paths().unwrap();
                black_box(floyd_warshall.shortest_path_cost(&0, &(n / 2)).unwrap())
            });
        });
    }
    group.finish();
}

/// Benchmark minimum spanning trees.
fn bench_spanning_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");
    for n in [64u32, 256] {
        let graph = ring_undirected(n, 3);

        group.bench_with_input(BenchmarkId::new("kruskal", n), &graph, |b, graph| {
            b.iter(|| {
                let tree = KruskalMSP::new().compute_msp(black_box(graph)).unwrap();
                black_box(total_weight(tree))
            });
        });

        group.bench_with_input(BenchmarkId::new("prim", n), &graph, |b, graph| {
            let mut prim = PrimMSP::new();
            b.iter(|| {
                prim.compute_msp(black_box(graph), &0).unwrap();
                black_box(graph.node_of(&(n - 1)).and_then(|node| node.previous()))
            });
        });
    }
    group.finish();
}

struct Entry {
    priority: Cell<f64>,
    handle: Cell<Option<usize>>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl PriorityQueueElement for Entry {
    fn priority(&self) -> f64 {
        self.priority.get()
    }

    fn set_priority(&self, priority: f64) {
        self.priority.set(priority);
    }

    fn handle(&self) -> Option<usize> {
        self.handle.get()
    }

    fn set_handle(&self, handle: Option<usize>) {
        self.handle.set(handle);
    }
}

/// Benchmark filling and draining the heap, with one priority decrease per element.
fn bench_heap(c: &mut Criterion) {
    let entries: Vec<Entry> = (0..1024u32)
        .map(|_| Entry {
            priority: Cell::new(f64::INFINITY),
            handle: Cell::new(None),
        })
        .collect();

    c.bench_function("heap_fill_decrease_drain_1024", |b| {
        b.iter(|| {
            let mut queue = BinaryHeapMinPriorityQueue::with_capacity(entries.len());
            for (i, entry) in (0u32..).zip(&entries) {
                entry.set_priority(weight(i, i + 1));
                queue.insert(entry).unwrap();
            }
            for entry in &entries {
                queue.decrease_priority(&entry, entry.priority() / 2.0).unwrap();
            }
            while let Ok(entry) = queue.extract_minimum() {
                black_box(entry);
            }
        });
    });
}

criterion_group!(
    benches,
    bench_single_source,
    bench_floyd_warshall,
    bench_spanning_trees,
    bench_heap
);
criterion_main!(benches);
