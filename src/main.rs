use dualgraph::{DirectedGraph, GrowthPolicy, ListGraph, MatrixConfig, MatrixGraph};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("dualgraph v{}", dualgraph::version());
    println!("==========================================");
    println!();

    println!("=== Adjacency list ===");
    let mut list = ListGraph::new();
    demo_graph(&mut list)?;

    println!("\n=== Adjacency matrix ===");
    let mut matrix = MatrixGraph::with_config(
        MatrixConfig::default().with_growth(GrowthPolicy::Linear),
    )?;
    demo_graph(&mut matrix)?;
    info!(
        capacity = matrix.capacity(),
        slots_used = matrix.slots_used(),
        "matrix layout after removal"
    );

    Ok(())
}

fn demo_graph<G>(graph: &mut G) -> anyhow::Result<()>
where
    G: DirectedGraph<&'static str, i32>,
{
    for label in ["A", "B", "C"] {
        graph.add(label)?;
        println!("✓ Added vertex {}", label);
    }

    graph.add_edge(&"A", &"B", 1)?;
    graph.add_edge(&"B", &"C", 2)?;
    graph.add_edge(&"A", &"C", 3)?;
    println!("✓ A -[1]-> B, B -[2]-> C, A -[3]-> C");

    println!("\nGraph Statistics:");
    println!("  Total vertices: {}", graph.size());
    println!("  Total edges: {}", graph.edge_count());
    for label in ["A", "B", "C"] {
        println!("  degree({}): {}", label, graph.degree(&label)?);
    }

    if let Err(e) = graph.add_edge(&"A", &"B", 9) {
        println!("✓ Rejected duplicate: {}", e);
    }

    let removed = graph.remove(&"B")?;
    println!("\n✓ Removed vertex {} and its edges", removed);
    for edge in graph.edges() {
        println!("  {}", edge);
    }

    println!("{}", serde_json::to_string_pretty(&graph.statistics())?);
    Ok(())
}
