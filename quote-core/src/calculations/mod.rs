//! Price calculations for project quotes.
//!
//! This module turns a visitor's selections into a price range using the
//! rates in a [`PricingCatalog`](crate::PricingCatalog).

pub mod common;
pub mod estimator;

pub use estimator::{
    CONTINGENCY_FACTOR, EstimateResult, FREE_FEATURE_COUNT, FeatureLine, LineItem,
    PriceEstimator, QuoteBreakdown,
};
