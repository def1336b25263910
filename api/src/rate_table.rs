//! Provides a typed table of conversion rates relative to one base currency.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::currency::Currency;

/// Conversion factors for catalog currencies, relative to `base`.
///
/// One unit of `base` converts to `get(c)` units of `c`. A table is always
/// replaced wholesale by the next successful fetch, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    base: Currency,
    rates: HashMap<Currency, f64>,
}

impl RateTable {
    /// Creates a new, empty table for the given base currency.
    pub fn new(base: Currency) -> Self {
        Self {
            base,
            rates: HashMap::new(),
        }
    }

    /// Returns the currency the table's factors are expressed against.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Inserts or updates the factor for a currency.
    ///
    /// If the table previously contained a factor for the currency, the old
    /// value is returned.
    pub fn insert(&mut self, currency: Currency, rate: f64) -> Option<f64> {
        self.rates.insert(currency, rate)
    }

    /// Retrieves the factor for a currency.
    ///
    /// Returns `None` if the last fetch did not report one.
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns an iterator over `(currency, factor)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.rates.iter().map(|(currency, rate)| (*currency, *rate))
    }
}
