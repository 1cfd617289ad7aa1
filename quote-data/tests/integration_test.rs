//! Integration tests for catalog loading against the shipped CSV.

use std::io::Write;

use pretty_assertions::assert_eq;
use quote_core::{EstimateResult, PriceEstimator, PricingCatalog, ServiceKind};
use quote_data::{CatalogLoader, CatalogLoaderError};

const CATALOG_CSV: &str = include_str!("../test-data/catalog.csv");

#[test]
fn test_shipped_csv_matches_builtin_catalog() {
    let records = CatalogLoader::parse(CATALOG_CSV.as_bytes()).expect("Failed to parse CSV");
    assert_eq!(records.len(), 30);

    let catalog = CatalogLoader::build(&records).expect("Failed to build catalog");

    assert_eq!(catalog, PricingCatalog::builtin());
}

#[test]
fn test_loaded_catalog_prices_like_builtin() {
    let records = CatalogLoader::parse(CATALOG_CSV.as_bytes()).unwrap();
    let catalog = CatalogLoader::build(&records).unwrap();

    let range = PriceEstimator::new(&catalog).estimate(
        Some(ServiceKind::Backend),
        &["API Development", "Database Design"],
        &["User Authentication", "Admin Dashboard", "Analytics", "File Uploads"],
    );

    // 4000 + 1500 + 1000, cheapest three features free, dashboard charged.
    assert_eq!(range, EstimateResult { min: 9000, max: 10800 });
}

#[test]
fn test_load_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "section,key,label,base_price,description\n\
         service,other,Consulting,3000,Hourly advice\n"
    )
    .unwrap();

    let catalog = CatalogLoader::load_path(file.path()).expect("Failed to load catalog");

    let config = catalog.service(ServiceKind::Other).unwrap();
    assert_eq!(config.base_price, 3000);
    assert_eq!(config.description.as_deref(), Some("Hourly advice"));
}

#[test]
fn test_load_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = CatalogLoader::load_path(&dir.path().join("absent.csv")).unwrap_err();

    assert!(matches!(err, CatalogLoaderError::Io(_)), "got: {:?}", err);
}
