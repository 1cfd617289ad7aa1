use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use quote_core::{PriceConfig, PricingCatalog, ServiceKind};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a pricing catalog.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid section '{0}' (expected service, project_type or feature)")]
    InvalidSection(String),

    #[error("Unknown service '{0}'")]
    UnknownService(String),

    #[error("Duplicate {section} key '{key}'")]
    DuplicateKey { section: String, key: String },

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a catalog CSV file.
///
/// - `section`: `service`, `project_type` or `feature`
/// - `key`: the selection key (a service name for `service` rows)
/// - `label`: display label
/// - `base_price`: whole currency units
/// - `description`: optional, may be empty
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogRecord {
    pub section: String,
    pub key: String,
    pub label: String,
    pub base_price: u64,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

impl CatalogRecord {
    fn price_config(&self) -> PriceConfig {
        let config = PriceConfig::new(self.label.trim(), self.base_price);
        match &self.description {
            Some(description) => config.with_description(description.as_str()),
            None => config,
        }
    }
}

/// Builds a [`PricingCatalog`] from CSV.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse catalog records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, CatalogLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: CatalogRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assemble parsed records into a catalog.
    ///
    /// Rows are independent; a catalog that omits a service simply prices it
    /// at zero.
    pub fn build(records: &[CatalogRecord]) -> Result<PricingCatalog, CatalogLoaderError> {
        let mut services = BTreeMap::new();
        let mut project_types = HashMap::new();
        let mut features = HashMap::new();

        for record in records {
            match record.section.as_str() {
                "service" => {
                    let kind: ServiceKind = record
                        .key
                        .parse()
                        .map_err(|_| CatalogLoaderError::UnknownService(record.key.clone()))?;
                    if services.insert(kind, record.price_config()).is_some() {
                        return Err(duplicate(record));
                    }
                }
                "project_type" => insert_unique(&mut project_types, record)?,
                "feature" => insert_unique(&mut features, record)?,
                other => return Err(CatalogLoaderError::InvalidSection(other.to_string())),
            }
        }

        Ok(PricingCatalog {
            services,
            project_types,
            features,
        })
    }

    /// Read, parse and build the catalog at `path`.
    pub fn load_path(path: &Path) -> Result<PricingCatalog, CatalogLoaderError> {
        let file = File::open(path)?;
        let records = Self::parse(file)?;
        Self::build(&records)
    }
}

fn insert_unique(
    section: &mut HashMap<String, PriceConfig>,
    record: &CatalogRecord,
) -> Result<(), CatalogLoaderError> {
    match section.entry(record.key.clone()) {
        Entry::Occupied(_) => Err(duplicate(record)),
        Entry::Vacant(slot) => {
            slot.insert(record.price_config());
            Ok(())
        }
    }
}

fn duplicate(record: &CatalogRecord) -> CatalogLoaderError {
    CatalogLoaderError::DuplicateKey {
        section: record.section.clone(),
        key: record.key.clone(),
    }
}
