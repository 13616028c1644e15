//! GOSS forms-service protocol details for the council's bin-collection form.
//!
//! Everything site-specific about the form lives here: the landing page, the
//! form element id, the session tokens scraped from the action URL, and the
//! exact field names of the submission the backend expects.

use serde::Serialize;
use url::form_urlencoded;

use kerbside_core::model::Premises;
use kerbside_core::ports::SourceError;

pub(crate) const LANDING_URL: &str =
    "https://www.renfrewshire.gov.uk/article/2320/Check-your-bin-collection-day";

/// Id of the lookup form element on the landing page.
pub(crate) const FORM_ID: &str = "RENFREWSHIREBINCOLLECTIONS_FORM";

const PAGE_SESSION_PARAM: &str = "pageSessionId";
const SESSION_PARAM: &str = "fsid";
const NONCE_PARAM: &str = "fsn";

/// Session-correlation tokens the form backend requires.
///
/// Scraped from the form action URL on every fetch, never persisted.
#[derive(Debug)]
pub(crate) struct FormTokens {
    page_session_id: String,
    session_id: String,
    nonce: String,
}

/// Extract the three session tokens from a form action URL.
///
/// Pure function over the URL text; no request is made.
///
/// # Errors
///
/// Returns [`SourceError::MissingToken`] naming the first absent query
/// parameter.
pub(crate) fn extract_tokens(action: &str) -> Result<FormTokens, SourceError> {
    let query = action.split_once('?').map_or("", |(_base, query)| query);

    let mut page_session_id = None;
    let mut session_id = None;
    let mut nonce = None;

    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        match name.as_ref() {
            PAGE_SESSION_PARAM => page_session_id = Some(value.into_owned()),
            SESSION_PARAM => session_id = Some(value.into_owned()),
            NONCE_PARAM => nonce = Some(value.into_owned()),
            _ => {}
        }
    }

    Ok(FormTokens {
        page_session_id: page_session_id.ok_or(SourceError::MissingToken(PAGE_SESSION_PARAM))?,
        session_id: session_id.ok_or(SourceError::MissingToken(SESSION_PARAM))?,
        nonce: nonce.ok_or(SourceError::MissingToken(NONCE_PARAM))?,
    })
}

#[derive(Serialize)]
/// Form body of the lookup submission, field names exactly as the site's
/// backend expects them. The backend accepts the final-step PAGE1 fields in
/// one request, so no multi-page navigation is simulated.
pub(crate) struct FormSubmission<'req> {
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_PAGESESSIONID")]
    page_session_id: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_SESSIONID")]
    session_id: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_NONCE")]
    nonce: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_VARIABLES")]
    variables: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_PAGENAME")]
    page_name: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_PAGEINSTANCE")]
    page_instance: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_PAGE1_ADDRESSSTRING")]
    address_string: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_PAGE1_UPRN")]
    uprn: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_PAGE1_ADDRESSLOOKUPPOSTCODE")]
    postcode: &'req str,
    #[serde(rename = "RENFREWSHIREBINCOLLECTIONS_PAGE1_NAVBUTTONS_NEXT")]
    next_button: &'req str,
}

impl<'req> FormSubmission<'req> {
    pub(crate) fn new(tokens: &'req FormTokens, premises: &'req Premises) -> Self {
        Self {
            page_session_id: &tokens.page_session_id,
            session_id: &tokens.session_id,
            nonce: &tokens.nonce,
            variables: "",
            page_name: "PAGE1",
            page_instance: "0",
            address_string: "",
            uprn: premises.uprn.as_str(),
            postcode: &premises.postcode,
            next_button: "Load Address",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_three_tokens() {
        let tokens =
            extract_tokens("https://self.example.org/f?pageSessionId=P-77&fsid=S-88&fsn=N-99")
                .expect("tokens should be present");

        assert_eq!(tokens.page_session_id, "P-77");
        assert_eq!(tokens.session_id, "S-88");
        assert_eq!(tokens.nonce, "N-99");
    }

    #[test]
    fn token_values_are_percent_decoded() {
        let tokens = extract_tokens("/f?pageSessionId=a%2Bb&fsid=s&fsn=n")
            .expect("tokens should be present");

        assert_eq!(tokens.page_session_id, "a+b");
    }

    #[test]
    fn missing_nonce_is_reported_by_name() {
        let err = extract_tokens("https://self.example.org/f?pageSessionId=P-77&fsid=S-88")
            .expect_err("nonce is absent");

        assert!(matches!(err, SourceError::MissingToken("fsn")));
    }

    #[test]
    fn action_without_query_reports_the_first_token() {
        let err = extract_tokens("https://self.example.org/f").expect_err("no query at all");

        assert!(matches!(err, SourceError::MissingToken("pageSessionId")));
    }

    #[test]
    fn submission_carries_the_fixed_field_values() {
        let tokens = extract_tokens("/f?pageSessionId=p&fsid=s&fsn=n").expect("tokens");
        let premises = Premises::new("PA12 4JU", 123_033_059_u64);

        let submission = FormSubmission::new(&tokens, &premises);

        assert_eq!(submission.page_name, "PAGE1");
        assert_eq!(submission.page_instance, "0");
        assert_eq!(submission.next_button, "Load Address");
        assert_eq!(submission.uprn, "123033059");
        assert_eq!(submission.postcode, "PA12 4JU");
        assert!(submission.variables.is_empty());
        assert!(submission.address_string.is_empty());
    }
}
