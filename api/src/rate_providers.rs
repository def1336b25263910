//! Defines traits and implementations for external exchange-rate providers.

use crate::currency::Currency;
use crate::error::RateError;
use crate::rate_table::RateTable;

/// A trait for any service that can provide a rate table for a base currency.
pub trait RateProvider {
    /// Fetches the latest conversion factors relative to `base`.
    async fn latest_rates(&self, base: Currency) -> Result<RateTable, RateError>;
}

/// Provides rate data from the ExchangeRate-API v6 endpoint.
pub mod exchange_rate_api {
    use std::collections::HashMap;
    use std::str::FromStr;

    use serde::Deserialize;

    use super::*;
    use crate::config::ApiCredential;
    use crate::config::RateServiceConfig;

    /// The success/failure envelope wrapped around the rate mapping.
    ///
    /// On failure the service omits `conversion_rates`, so the mapping
    /// defaults to empty instead of failing deserialization.
    #[derive(Deserialize, Debug)]
    struct RatesEnvelope {
        result: String,
        #[serde(default)]
        conversion_rates: HashMap<String, f64>,
    }

    /// An implementation of the `RateProvider` trait for ExchangeRate-API.
    pub struct ExchangeRateApi {
        config: RateServiceConfig,
    }

    impl ExchangeRateApi {
        pub fn new(config: RateServiceConfig) -> Self {
            Self { config }
        }
    }

    impl RateProvider for ExchangeRateApi {
        async fn latest_rates(&self, base: Currency) -> Result<RateTable, RateError> {
            let key = match &self.config.credential {
                ApiCredential::Key(key) => key,
                ApiCredential::Absent => return Err(RateError::MissingApiKey),
            };
            let url = format!("{}/v6/{}/latest/{}", self.config.base_url, key, base.code());

            let client = reqwest::Client::new();
            let envelope = client
                .get(&url)
                .send()
                .await?
                .json::<RatesEnvelope>()
                .await?;

            if envelope.result != "success" {
                dioxus_logger::tracing::warn!(
                    "rate service reported {:?} for base {}",
                    envelope.result,
                    base.code()
                );
                return Err(RateError::Service {
                    result: envelope.result,
                });
            }

            // The service lists every currency it knows; keep catalog entries.
            let mut table = RateTable::new(base);
            for (code, rate) in envelope.conversion_rates {
                if let Ok(currency) = Currency::from_str(&code) {
                    table.insert(currency, rate);
                }
            }
            Ok(table)
        }
    }
}
