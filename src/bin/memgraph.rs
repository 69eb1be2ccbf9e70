use std::{env, error::Error, process, time::Instant};

use memgraph::{
    Label, MemGraph, MemGraphError, QuerySummary,
    bench_utils::{generate_graph, random_queries},
    config::CommandLineConfig,
};
use serde::Serialize;
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let label = Label::new(config.label.as_str());
    let graph = match build_graph(&config, &label) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(&graph, &config, &label) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn build_graph(config: &CommandLineConfig, label: &Label) -> Result<MemGraph, MemGraphError> {
    let started = Instant::now();
    let dataset = generate_graph(config.shape.clone(), config.vertices, config.seed);
    let graph = dataset.materialize(label)?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "graph built"
    );
    Ok(graph)
}

fn run_command(
    graph: &MemGraph,
    config: &CommandLineConfig,
    label: &Label,
) -> Result<(), Box<dyn Error>> {
    match config.command.as_str() {
        "stats" => print_json(&graph.stats(label)),
        "query" => {
            let started = Instant::now();
            let pairs = random_queries(graph.vertex_count(), config.queries, config.query_seed);
            let summary = QuerySummary::run(graph, &pairs, label)?;
            info!(
                queries = summary.queries,
                found = summary.found,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "queries finished"
            );
            print_json(&summary)
        }
        other => {
            warn!(command = other, "unknown command, defaulting to stats");
            print_json(&graph.stats(label))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
