//! Shared conversion domain: the currency catalog, rate tables, providers,
//! configuration, and the arithmetic behind the converter widget.

pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod rate_providers;
pub mod rate_table;

use config::RateServiceConfig;
use currency::Currency;
use error::RateError;
use rate_providers::exchange_rate_api::ExchangeRateApi;
use rate_providers::RateProvider;
use rate_table::RateTable;

/// Fetches the latest rate table for `base` from the configured service.
///
/// An absent credential short-circuits before any request is issued.
pub async fn latest_rates(
    config: &RateServiceConfig,
    base: Currency,
) -> Result<RateTable, RateError> {
    ExchangeRateApi::new(config.clone()).latest_rates(base).await
}
