//! The error taxonomy for rate fetching and explicit conversion.

use thiserror::Error;

/// An error raised while refreshing rates or converting an amount.
///
/// Each variant is terminal for the attempt and non-fatal to the process; the
/// widget shows the `Display` text in its error region until the next attempt
/// overwrites it or a success clears it.
#[derive(Error, Debug)]
pub enum RateError {
    /// No credential was supplied at startup. Raised before any request.
    #[error("API key not configured")]
    MissingApiKey,

    /// The rate service answered with a non-success envelope.
    #[error("Failed to fetch rates")]
    Service {
        /// The `result` field the envelope carried instead of `"success"`.
        result: String,
    },

    /// The request or response failed at the transport or parse level.
    #[error("Error fetching exchange rates")]
    Transport(#[from] reqwest::Error),

    /// Explicit conversion was requested without an amount or a usable rate.
    #[error("Please enter an amount and ensure currencies are selected")]
    MissingInput,
}
