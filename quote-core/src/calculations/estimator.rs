//! Project price estimator.
//!
//! The estimate is the sum of three parts:
//!
//! | Part          | Contribution                                          |
//! |---------------|-------------------------------------------------------|
//! | Service       | base price of the chosen service                      |
//! | Project types | base price of every selected project type             |
//! | Features      | base price of every feature past the first three free |
//!
//! The free features are the three *cheapest* selected ones, not the first
//! three picked. The upper bound of the range adds a 20% contingency buffer.
//!
//! # Example
//!
//! ```
//! use quote_core::{PriceEstimator, PricingCatalog, ServiceKind};
//!
//! let catalog = PricingCatalog::builtin();
//! let estimator = PriceEstimator::new(&catalog);
//!
//! let range = estimator.estimate(
//!     Some(ServiceKind::Web),
//!     &["E-commerce"],
//!     &["Payments", "Analytics", "Social Integration", "Admin Dashboard"],
//! );
//!
//! // 1000 (web) + 3500 (e-commerce) + 2500 (dashboard is the 4th cheapest)
//! assert_eq!(range.min, 7000);
//! assert_eq!(range.max, 8400);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::scale_amount;
use crate::{PriceConfig, PricingCatalog, ServiceKind};

/// Number of features included at no charge.
pub const FREE_FEATURE_COUNT: usize = 3;

/// Multiplier applied to the minimum to get the upper bound (1.2).
pub const CONTINGENCY_FACTOR: Decimal = Decimal::from_parts(12, 0, 0, false, 1);

/// A price range for a set of selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub min: u64,
    pub max: u64,
}

impl EstimateResult {
    pub fn from_min(min: u64) -> Self {
        Self {
            min,
            max: scale_amount(min, CONTINGENCY_FACTOR),
        }
    }
}

/// One priced catalog entry as it appears on a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub key: String,
    pub label: String,
    pub price: u64,
}

impl LineItem {
    fn new(
        key: &str,
        config: &PriceConfig,
    ) -> Self {
        Self {
            key: key.to_string(),
            label: config.label.clone(),
            price: config.base_price,
        }
    }
}

/// A feature line; `included` features are covered by the promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLine {
    pub item: LineItem,
    pub included: bool,
}

impl FeatureLine {
    /// Amount this line adds to the estimate.
    pub fn charged(&self) -> u64 {
        if self.included { 0 } else { self.item.price }
    }
}

/// Itemised quote: every resolved selection with its price, plus the range.
///
/// Features are listed cheapest first, which is the order the promotion is
/// applied in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub service: Option<LineItem>,
    pub project_types: Vec<LineItem>,
    pub features: Vec<FeatureLine>,
    pub range: EstimateResult,
}

impl QuoteBreakdown {
    /// `true` once a service or a project type has been picked.
    pub fn has_selection(&self) -> bool {
        self.service.is_some() || !self.project_types.is_empty()
    }
}

/// Calculator over a borrowed [`PricingCatalog`].
///
/// Estimation is total: keys the catalog does not know contribute nothing
/// and take no part in ranking features for the promotion.
#[derive(Debug, Clone, Copy)]
pub struct PriceEstimator<'a> {
    catalog: &'a PricingCatalog,
}

impl<'a> PriceEstimator<'a> {
    pub fn new(catalog: &'a PricingCatalog) -> Self {
        Self { catalog }
    }

    /// Computes the price range for the given selections.
    ///
    /// Duplicate project-type keys are each counted.
    pub fn estimate<P, F>(
        &self,
        service: Option<ServiceKind>,
        project_types: &[P],
        features: &[F],
    ) -> EstimateResult
    where
        P: AsRef<str>,
        F: AsRef<str>,
    {
        let mut min = 0u64;

        if let Some(config) = service.and_then(|kind| self.catalog.service(kind)) {
            min = min.saturating_add(config.base_price);
        }

        for key in project_types {
            if let Some(config) = self.catalog.project_type(key.as_ref()) {
                min = min.saturating_add(config.base_price);
            }
        }

        for (_, config) in self.ranked_features(features).iter().skip(FREE_FEATURE_COUNT) {
            min = min.saturating_add(config.base_price);
        }

        EstimateResult::from_min(min)
    }

    /// Same calculation as [`estimate`](Self::estimate), itemised.
    pub fn breakdown<P, F>(
        &self,
        service: Option<ServiceKind>,
        project_types: &[P],
        features: &[F],
    ) -> QuoteBreakdown
    where
        P: AsRef<str>,
        F: AsRef<str>,
    {
        let service_line = service.and_then(|kind| {
            self.catalog
                .service(kind)
                .map(|config| LineItem::new(kind.as_str(), config))
        });

        let project_lines: Vec<LineItem> = project_types
            .iter()
            .filter_map(|key| {
                let key = key.as_ref();
                self.catalog
                    .project_type(key)
                    .map(|config| LineItem::new(key, config))
            })
            .collect();

        let feature_lines: Vec<FeatureLine> = self
            .ranked_features(features)
            .into_iter()
            .enumerate()
            .map(|(index, (key, config))| FeatureLine {
                item: LineItem::new(key, config),
                included: index < FREE_FEATURE_COUNT,
            })
            .collect();

        let min = service_line
            .iter()
            .map(|line| line.price)
            .chain(project_lines.iter().map(|line| line.price))
            .chain(feature_lines.iter().map(FeatureLine::charged))
            .fold(0u64, u64::saturating_add);

        QuoteBreakdown {
            service: service_line,
            project_types: project_lines,
            features: feature_lines,
            range: EstimateResult::from_min(min),
        }
    }

    /// Resolves feature keys and sorts them cheapest first.
    ///
    /// The sort is stable, so equally priced features keep selection order.
    fn ranked_features<'k, F: AsRef<str>>(
        &self,
        features: &'k [F],
    ) -> Vec<(&'k str, &'a PriceConfig)> {
        let mut resolved: Vec<_> = features
            .iter()
            .filter_map(|key| {
                let key = key.as_ref();
                self.catalog.feature(key).map(|config| (key, config))
            })
            .collect();
        resolved.sort_by_key(|(_, config)| config.base_price);
        resolved
    }
}
