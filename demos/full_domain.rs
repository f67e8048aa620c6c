//! Counts the ratings a small workflow graph accepts over the full domain.
//!
//! Run with `RUST_LOG=rangeflow=debug cargo run --example full_domain` to see
//! stage-level diagnostics, or `trace` for every split.

use rangeflow::{Axis, Engine, EngineConfig, Label, Rule, WorkflowDef};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    init_tracing();

    let node = |name: &str| Label::node(name);
    let workflows = vec![
        WorkflowDef::new(
            "in",
            vec![
                Rule::less_than(Axis::S, 1351, node("px")),
                Rule::always(node("qqz")),
            ],
        ),
        WorkflowDef::new(
            "px",
            vec![
                Rule::less_than(Axis::A, 2006, node("qkq")),
                Rule::greater_than(Axis::M, 2090, Label::Accept),
                Rule::always(Label::Reject),
            ],
        ),
        WorkflowDef::new(
            "qkq",
            vec![
                Rule::less_than(Axis::X, 1416, Label::Accept),
                Rule::always(Label::Reject),
            ],
        ),
        WorkflowDef::new(
            "qqz",
            vec![
                Rule::greater_than(Axis::S, 2770, Label::Accept),
                Rule::less_than(Axis::M, 1801, node("px")),
                Rule::always(Label::Reject),
            ],
        ),
    ];

    println!("=== Workflows ===");
    for workflow in &workflows {
        println!("  {}", workflow);
    }

    let engine = Engine::new(EngineConfig::default());
    println!("\nDomain: {} ratings", engine.config().domain_volume());
    match engine.evaluate(workflows) {
        Ok(evaluation) => {
            println!("\n=== Accepted boxes ({}) ===", evaluation.accepted.len());
            for (i, part) in evaluation.accepted.iter().enumerate() {
                println!("  [{:>2}] {} = {}", i + 1, part, part.volume());
            }
            println!("\n=== Totals ===\n{}", evaluation.tally);
        }
        Err(err) => {
            eprintln!("evaluation failed: {}", err);
            std::process::exit(1);
        }
    }
}
