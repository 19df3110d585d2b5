use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use loradeck_core::{paths, ModelRecord};
use loradeck_services::ModelRegistry;

#[derive(Parser)]
#[command(name = "loradeck")]
#[command(about = "loradeck - LoRA model catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the model directory and print the catalog
    Models {
        /// Model directory to scan
        #[arg(short, long, default_value = "./lora_models")]
        dir: String,

        /// Re-read every file even when its cache entry looks fresh
        #[arg(short, long)]
        force: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Check a running server and report its catalog size
    Status {
        /// Server base URL (defaults to $LORADECK_HOST)
        #[arg(long)]
        host: Option<String>,
    },
}

fn default_host() -> String {
    std::env::var("LORADECK_HOST").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models { dir, force, output } => cmd_models(&dir, force, &output)?,
        Commands::Status { host } => {
            cmd_status(&host.unwrap_or_else(default_host)).await?
        }
    }

    Ok(())
}

fn cmd_models(dir: &str, force: bool, output: &str) -> Result<()> {
    let registry = ModelRegistry::new(dir);
    let records = registry.scan(force)?;

    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&records)?),
        _ => print_table(&records),
    }

    Ok(())
}

fn print_table(records: &[ModelRecord]) {
    if records.is_empty() {
        println!("No models found.");
        return;
    }

    println!("{:<24} {:<32} TAGS", "NAME", "DISPLAY NAME");
    for record in records {
        println!(
            "{:<24} {:<32} {}",
            record.internal_name,
            record.display_name,
            record.tags.join(", ")
        );
    }
}

async fn cmd_status(host: &str) -> Result<()> {
    let url = format!("{}{}", host.trim_end_matches('/'), paths::MODEL_LIST);

    match reqwest::get(&url).await {
        Ok(resp) if resp.status().is_success() => {
            let records: Vec<ModelRecord> = resp.json().await?;
            println!("Server: {} (reachable)", host);
            println!("Models: {}", records.len());
        }
        Ok(resp) => println!("Server: {} (HTTP {})", host, resp.status()),
        Err(e) => println!("Server: {} (unreachable: {})", host, e),
    }

    Ok(())
}
