//! cloudinv CLI
//!
//! Builds an Ansible dynamic inventory from EC2 and prints it to stdout.
//! Diagnostics go to stderr so the JSON document stays clean.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use cloudinv_aws::Ec2Lister;
use cloudinv_core::{InventoryBuilder, InventoryConfig, OutputFormat, RenderedInventory};

#[derive(Parser)]
#[command(name = "cloudinv")]
#[command(about = "EC2 dynamic inventory for Ansible", long_about = None)]
struct Cli {
    /// Path to the YAML inventory configuration
    #[arg(short, long)]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Key-sorted, indented JSON
    Json,
    /// Debug dump of the in-memory document
    Raw,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Raw => OutputFormat::Raw,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.config)?;
    let config = InventoryConfig::from_yaml(&text)?;

    let builder = InventoryBuilder::new(&config)?;
    let lister = Ec2Lister::connect(&config.client).await;

    match builder.run(&lister, cli.format.into()).await? {
        RenderedInventory::Json(json) => println!("{json}"),
        RenderedInventory::Raw(doc) => println!("{doc:#?}"),
    }

    Ok(())
}
