//! Traits describing source capabilities and the shared error taxonomy.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{Collection, CouncilMeta, Premises};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to council backends.
///
/// None of these are retried locally; they all mean the upstream site is
/// unavailable or has changed shape, which the caller handles by marking the
/// source unavailable for the cycle.
pub enum SourceError {
    /// Network layer failed or the site answered with a non-success status.
    #[error("Network error: {0}")]
    Transport(#[from] ReqwestError),
    /// Expected form element (or its action URL) missing from the landing page.
    #[error("Form `{0}` not found on landing page")]
    FormNotFound(&'static str),
    /// Expected session token missing from the form action URL.
    #[error("Form token `{0}` missing from action URL")]
    MissingToken(&'static str),
    /// A date printed on the page could not be parsed.
    #[error("Unparseable collection date: `{0}`")]
    DateParse(String),
    /// The council has no registered plugin.
    #[error("Unsupported council")]
    UnsupportedCouncil,
}

#[async_trait]
/// Trait for council-specific collection-schedule backends.
pub trait SchedulePort: Send + Sync {
    /// Metadata describing the council handled by this port.
    fn council(&self) -> &CouncilMeta;

    /// Fetch the upcoming collections for a property.
    ///
    /// All-or-nothing: either every entry the council page lists is returned,
    /// in page order, or an error is raised. Nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails or the page no longer
    /// matches the expected structure.
    async fn collections(&self, premises: &Premises) -> Result<Vec<Collection>, SourceError>;
}
