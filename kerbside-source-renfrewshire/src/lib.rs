//! Source implementation for Renfrewshire Council bin collections.
//!
//! The council hosts its lookup on the GOSS forms platform: a GET of the
//! landing page establishes a session and yields a form whose action URL
//! carries per-session tokens, and a POST of those tokens plus the property's
//! postcode and UPRN returns the rendered schedule fragment.

mod form;
mod parse;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use kerbside_core::html::{Document, Query};
use kerbside_core::model::{Collection, CouncilMeta, Councils, Premises};
use kerbside_core::plugin::CouncilPlugin;
use kerbside_core::ports::{SchedulePort, SourceError};

const USER_AGENT: &str = "kerbside/0.1";

/// Collection schedule implementation for Renfrewshire.
pub struct RenfrewshireSchedulePort {
    meta: CouncilMeta,
    landing_url: String,
}

impl RenfrewshireSchedulePort {
    /// Create a port bound to the council's live lookup form.
    #[must_use]
    pub fn new() -> Self {
        Self::with_landing_url(form::LANDING_URL)
    }

    /// Create a port pointed at a different copy of the lookup form, e.g. a
    /// mirror or a test server.
    #[must_use]
    pub fn with_landing_url<U: Into<String>>(landing_url: U) -> Self {
        Self {
            meta: council_meta(),
            landing_url: landing_url.into(),
        }
    }

    async fn fetch_schedule_page(&self, premises: &Premises) -> Result<String, SourceError> {
        // The POST is only valid inside the session the GET established, and
        // a session must not be shared across calls, so each fetch gets its
        // own cookie-carrying client.
        let session = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()?;

        let landing = session
            .get(&self.landing_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        // Parse the landing page and extract everything we need as owned data
        // before the next `await`: the scraper document is not `Send`, so it
        // must be dropped before the POST future can be sent across threads.
        let (action, tokens) = {
            let document = Document::parse(&landing);
            let lookup_form = document
                .first(&Query::id(form::FORM_ID))
                .ok_or(SourceError::FormNotFound(form::FORM_ID))?;
            let action = lookup_form
                .attr("action")
                .ok_or(SourceError::FormNotFound(form::FORM_ID))?;

            let tokens = form::extract_tokens(action)?;
            (action.to_owned(), tokens)
        };
        debug!(action = %action, "submitting bin-collection lookup");

        let submission = form::FormSubmission::new(&tokens, premises);
        let schedule = session
            .post(&action)
            .form(&submission)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(schedule)
    }
}

impl Default for RenfrewshireSchedulePort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchedulePort for RenfrewshireSchedulePort {
    fn council(&self) -> &CouncilMeta {
        &self.meta
    }

    async fn collections(&self, premises: &Premises) -> Result<Vec<Collection>, SourceError> {
        let page = self.fetch_schedule_page(premises).await?;
        let pairs = parse::parse_schedule(&page)?;
        debug!(entries = pairs.len(), "parsed collection schedule");

        Ok(parse::build_entries(pairs))
    }
}

/// Build the plugin bundle for the Renfrewshire source.
#[must_use]
pub fn plugin() -> CouncilPlugin {
    CouncilPlugin {
        meta: council_meta(),
        schedule_port: Arc::new(RenfrewshireSchedulePort::new()),
    }
}

fn council_meta() -> CouncilMeta {
    CouncilMeta {
        id: Councils::Renfrewshire.into(),
        name: String::from("Renfrewshire Council"),
        description: String::from("Bin collection days from renfrewshire.gov.uk"),
        url: String::from("https://renfrewshire.gov.uk/"),
    }
}
