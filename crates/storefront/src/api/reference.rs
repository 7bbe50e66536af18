//! Reference data for the checkout form: countries, states, and the derived
//! credit-card month/year ranges.
//!
//! Country and state lists come from the backend; month and year ranges are
//! computed locally from the current date. Nothing here is cached beyond the
//! caller's own form session.

use chrono::{Datelike, Local};
use serde::Deserialize;
use tracing::instrument;

use crate::api::{ApiClient, ApiError};
use crate::model::{Country, State};

/// How many years of card expiration to offer, inclusive of the current one.
const EXPIRATION_YEARS_AHEAD: i32 = 10;

/// Envelope for country list responses.
#[derive(Debug, Deserialize)]
struct CountriesEnvelope {
    #[serde(rename = "_embedded")]
    embedded: EmbeddedCountries,
}

#[derive(Debug, Deserialize)]
struct EmbeddedCountries {
    countries: Vec<Country>,
}

/// Envelope for state list responses.
#[derive(Debug, Deserialize)]
struct StatesEnvelope {
    #[serde(rename = "_embedded")]
    embedded: EmbeddedStates,
}

#[derive(Debug, Deserialize)]
struct EmbeddedStates {
    states: Vec<State>,
}

/// Client for checkout form reference data.
#[derive(Clone)]
pub struct FormDataClient {
    api: ApiClient,
}

impl FormDataClient {
    /// Create a new form data client over the shared API client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Get the full country list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn get_countries(&self) -> Result<Vec<Country>, ApiError> {
        let envelope: CountriesEnvelope = self.api.get_json("countries").await?;
        Ok(envelope.embedded.countries)
    }

    /// Get the states for a country code.
    ///
    /// An empty code still issues the (broad) query. A not-found response
    /// maps to an empty list; that is the one swallowed not-found in the
    /// whole client.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(country_code = %country_code))]
    pub async fn get_states(&self, country_code: &str) -> Result<Vec<State>, ApiError> {
        let result: Result<StatesEnvelope, ApiError> = self
            .api
            .get_json(&format!(
                "states/search/findByCountryCode?code={}",
                urlencoding::encode(country_code)
            ))
            .await;

        match result {
            Ok(envelope) => Ok(envelope.embedded.states),
            Err(ApiError::NotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Credit-card expiration months from `start_month` through December.
    ///
    /// Empty when `start_month` is past December.
    #[must_use]
    pub fn credit_card_months(&self, start_month: u32) -> Vec<u32> {
        (start_month..=12).collect()
    }

    /// Credit-card expiration years: the current year through ten years out.
    #[must_use]
    pub fn credit_card_years(&self) -> Vec<i32> {
        let start_year = current_year();
        (start_year..=start_year + EXPIRATION_YEARS_AHEAD).collect()
    }
}

/// The current calendar year (local time).
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

/// The current calendar month, 1-based (local time).
#[must_use]
pub fn current_month() -> u32 {
    Local::now().month()
}
