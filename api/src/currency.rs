//! Defines the fixed catalog of currencies offered by the converter.

use serde::Deserialize;
use serde::Serialize;

/// A currency offered in the selector dropdowns.
///
/// The catalog is fixed at compile time and never mutated. Codes follow
/// ISO 4217 where one exists; `SN` is a non-ISO entry carried in the catalog.
/// Variant order is the order the selectors display.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    USD, // United States Dollar
    EUR, // Euro
    JPY, // Japanese Yen
    GBP, // Great British Pound
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    SN,  // Senegal (non-ISO)
}

impl Currency {
    /// Returns the three-letter code used in request paths and responses.
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency, for tooltips and alt text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::USD => "United States Dollar",
            Self::EUR => "Euro",
            Self::JPY => "Japanese Yen",
            Self::GBP => "Great British Pound",
            Self::CAD => "Canadian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::SN => "Senegal",
        }
    }

    /// Returns the path of the flag asset shown next to the code.
    pub fn flag(&self) -> &'static str {
        match self {
            Self::USD => "/flags/us.svg",
            Self::EUR => "/flags/eu.svg",
            Self::JPY => "/flags/jp.svg",
            Self::GBP => "/flags/gb.svg",
            Self::CAD => "/flags/ca.svg",
            Self::CHF => "/flags/ch.svg",
            Self::CNY => "/flags/cn.svg",
            Self::SN => "/flags/sn.svg",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn catalog_has_eight_entries_starting_with_usd() {
        let catalog: Vec<Currency> = Currency::iter().collect();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0], Currency::USD);
        assert_eq!(catalog[7], Currency::SN);
    }

    #[test]
    fn codes_parse_back_case_insensitively() {
        for currency in Currency::iter() {
            assert_eq!(Currency::from_str(currency.code()), Ok(currency));
        }
        assert_eq!(Currency::from_str("eur"), Ok(Currency::EUR));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(Currency::from_str("XAU").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn default_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
    }
}
