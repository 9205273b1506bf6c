//! Walkthrough for the suffix registry and resolver.
//!
//! Run with: `cargo run --example resolve_demo`
//! Set `RUST_LOG=debug` to watch the registry's tracing output.

use sheetmake_registry::{BuilderRegistry, DocumentBuilder, RegistryConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = BuilderRegistry::new();
    println!("registered suffixes: {}", registry.suffixes().join(","));

    // Point relative templates at a shared directory and alias .fm to the
    // freemarker kind.
    let config = RegistryConfig::from_json(
        r#"{ "template_directory": "/srv/templates", "mappings": { ".fm": "freemarker" } }"#,
    )?;
    config.apply(&registry);

    for path in ["sales/q1.ftl", "report.ttl", "summary.fm"] {
        let builder = registry.resolve(path)?;
        println!("{path} -> {} builder", builder.kind());
    }

    match registry.resolve("report.csv") {
        Ok(_) => unreachable!("csv is not a registered template type"),
        Err(err) => println!("report.csv rejected: {err}"),
    }

    Ok(())
}
