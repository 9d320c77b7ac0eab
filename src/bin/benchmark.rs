use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use yens_sssp::graph::generators::{generate_potential_digraph, generate_with_negative_cycle};
use yens_sssp::{BellmanFord, BellmanFordYens, DirectedGraph, Graph, ShortestPathAlgorithm};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &DirectedGraph<i32>, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<i32, DirectedGraph<i32>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute(graph, source);
    let duration = start.elapsed();

    match result {
        Ok(result) => match result.shortest_path_tree() {
            Some(tree) => {
                let reachable = (0..tree.vertex_count()).filter(|&v| tree.is_reachable(v)).count();
                println!("  - Found {} reachable vertices in {:?}", reachable, duration);
            }
            None => println!("  - Found a negative cycle in {:?}", duration),
        },
        Err(err) => println!("  - Failed: {}", err),
    }

    duration
}

fn main() -> yens_sssp::Result<()> {
    env_logger::init();

    let graph_sizes = vec![500, 1_000, 2_000, 5_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: Bellman-Ford-Yens vs classic Bellman-Ford");
    println!("Edge factor: {} edges per vertex", edge_factor);
    println!("=====================================================");

    let yens = BellmanFordYens::new();
    let classic = BellmanFord::new();
    let mut rng = StdRng::seed_from_u64(42);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        for (kind, graph) in [
            ("no cycle", generate_potential_digraph(size, edge_factor, 100, 50, &mut rng)?),
            ("cycle", generate_with_negative_cycle(size, edge_factor, 5, &mut rng)?),
        ] {
            println!("\nGraph: {} vertices, {} edges, {}", graph.vertex_count(), graph.edge_count(), kind);

            let yens_time = benchmark_algorithm("Bellman-Ford-Yens", &yens, &graph, 0);
            let classic_time = benchmark_algorithm("Bellman-Ford", &classic, &graph, 0);

            let speedup = classic_time.as_secs_f64() / yens_time.as_secs_f64().max(f64::EPSILON);
            println!("Speedup - Yens vs classic: {:.2}x", speedup);

            results.push((size, kind, yens_time, classic_time, speedup));
        }
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<12} | {:<14} | {:<8}", "Vertices", "Kind", "Yens (ms)", "Classic (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, kind, yens_time, classic_time, speedup) in &results {
        println!(
            "{:<10} | {:<10} | {:<12} | {:<14} | {:<8.2}",
            size,
            kind,
            yens_time.as_millis(),
            classic_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
