use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quote_core::{PriceEstimator, PricingCatalog, ServiceKind};
use quote_data::{CatalogLoader, render_breakdown};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Price a project from the command line.
///
/// Keys are matched exactly against the catalog; unknown project types and
/// features are ignored, as they would be in the wizard.
#[derive(Parser, Debug)]
#[command(name = "quote-estimate")]
#[command(version, about, long_about = None)]
struct Args {
    /// Catalog CSV (section,key,label,base_price,description). Defaults to the built-in price list.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Service: web, mobile, backend or other
    #[arg(short, long)]
    service: Option<ServiceKind>,

    /// Project type key; repeat for several
    #[arg(short = 'p', long = "project-type")]
    project_types: Vec<String>,

    /// Feature key; repeat for several
    #[arg(short = 'f', long = "feature")]
    features: Vec<String>,

    /// Print the breakdown as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => CatalogLoader::load_path(path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
        None => PricingCatalog::builtin(),
    };
    debug!(
        project_types = catalog.project_types.len(),
        features = catalog.features.len(),
        "catalog ready"
    );

    let breakdown = PriceEstimator::new(&catalog).breakdown(
        args.service,
        &args.project_types,
        &args.features,
    );

    if args.json {
        let json = serde_json::to_string_pretty(&breakdown).context("Failed to serialize quote")?;
        println!("{}", json);
    } else {
        print!("{}", render_breakdown(&breakdown));
    }

    Ok(())
}
