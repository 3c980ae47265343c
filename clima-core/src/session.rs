//! State of a single city search, from input to rendered result.
//!
//! A session is created per search, mutated while the lookup runs and
//! dropped once the result has been shown.

use tracing::debug;

use crate::{error::LookupError, model::WeatherReport};

#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    loading: bool,
    result: Option<WeatherReport>,
    error: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup for `query`. Returns the trimmed city name.
    pub fn begin(&mut self, query: &str) -> Result<&str, LookupError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.error = Some(LookupError::EmptyQuery.to_string());
            return Err(LookupError::EmptyQuery);
        }

        self.query = trimmed.to_string();
        self.loading = true;
        self.error = None;
        debug!(query = %self.query, "search started");

        Ok(&self.query)
    }

    pub fn complete(&mut self, report: WeatherReport) {
        debug!(query = %self.query, hours = report.hourly.len(), "search completed");
        self.result = Some(report);
        self.error = None;
        self.loading = false;
    }

    pub fn fail(&mut self, error: &anyhow::Error) {
        debug!(query = %self.query, error = %error, "search failed");
        self.result = None;
        self.error = Some(format!("{error:#}"));
        self.loading = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&WeatherReport> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Consume the session, yielding the report or the stored error message.
    pub fn finish(self) -> Result<WeatherReport, String> {
        match (self.result, self.error) {
            (Some(report), _) => Ok(report),
            (None, Some(err)) => Err(err),
            (None, None) => Err(format!("Search for '{}' did not finish", self.query)),
        }
    }
}
