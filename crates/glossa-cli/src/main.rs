//! Glossa — Greek survey-text normalization.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glossa_core::GlossaConfig;

mod pipeline;
mod table;

fn print_help() {
    println!("Glossa — Greek survey-text normalization");
    println!();
    println!("Usage: glossa <command> [config.json]");
    println!();
    println!("Commands:");
    println!("  normalize [config]   Reconcile both tables and write normalized output");
    println!("  topics [config]      Normalize, then write topic presence matrices");
    println!("  rules [config]       Show rule table names, sizes and digests");
    println!("  help                 Show this help");
    println!();
    println!("The config path defaults to glossa.json.");
    println!();
    println!("Environment:");
    println!("  GLOSSA_NORMALIZATION   Override normalization_type (stem | lemma)");
    println!("  GLOSSA_OUTPUT_DIR      Override output_dir");
    println!("  RUST_LOG               Log filter (default: info)");
}

fn load_config(arg: Option<&String>) -> anyhow::Result<GlossaConfig> {
    let path = pipeline::config_path(arg);
    GlossaConfig::from_env(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_help();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "normalize" => {
            let config = load_config(args.get(2))?;
            info!(mode = %config.normalization_type, "Starting normalization");
            let outcome = pipeline::run_normalize(&config).context("normalization failed")?;
            for path in &outcome.written {
                println!("{}", path.display());
            }
        }
        "topics" => {
            let config = load_config(args.get(2))?;
            let written = pipeline::run_topics(&config).context("topic tagging failed")?;
            for path in &written {
                println!("{}", path.display());
            }
        }
        "rules" => {
            let config = match args.get(2) {
                Some(_) => Some(load_config(args.get(2))?),
                None => None,
            };
            for line in pipeline::describe_rules(config.as_ref())? {
                println!("{}", line);
            }
        }
        "--help" | "-h" | "help" => print_help(),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'glossa help' for usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}
