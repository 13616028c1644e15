//! Parsing for the rendered collection-schedule fragment.

use chrono::NaiveDate;
use tracing::debug;

use kerbside_core::dates;
use kerbside_core::html::{Document, Query};
use kerbside_core::model::Collection;
use kerbside_core::ports::SourceError;

const COLLECTION_DETAILS_ID: &str = "RENFREWSHIREBINCOLLECTIONS_PAGE1_COLLECTIONDETAILS";
const NEXT_COLLECTION: &str = "div.collection--next";
const FUTURE_COLLECTIONS: &str = "div.collection__row";
const COLLECTION_DATE: &str = "p.collection__date";
const BIN_NAME: &str = "p.bins__name";

/// Walk the schedule fragment into flat (date, bin label) pairs.
///
/// No collection-details section at all is a valid, empty result.
///
/// # Errors
///
/// Returns [`SourceError::DateParse`] when a date node cannot be parsed;
/// partial results are never returned.
pub(crate) fn parse_schedule(page: &str) -> Result<Vec<(NaiveDate, String)>, SourceError> {
    let document = Document::parse(page);

    let details = Query::id(COLLECTION_DETAILS_ID);
    let next_rows = Query::css(NEXT_COLLECTION);
    let future_rows = Query::css(FUTURE_COLLECTIONS);
    let date_nodes = Query::css(COLLECTION_DATE);
    let bin_nodes = Query::css(BIN_NAME);

    // "Next collection" rows come before the future ones within each section,
    // concatenated as encountered. A date appearing in both row kinds is
    // emitted twice; the page is the authority on what it shows.
    let mut rows = Vec::new();
    for section in document.select(&details) {
        rows.extend(section.select(&next_rows));
        rows.extend(section.select(&future_rows));
    }

    let mut pairs = Vec::new();
    for row in rows {
        for date_node in row.select(&date_nodes) {
            let date = dates::parse_display_date(&date_node.text())?;

            // Several bins can go out on the same day; the row lists every
            // label next to a single date.
            for bin in row.select(&bin_nodes) {
                pairs.push((date, bin.text()));
            }
        }
    }

    Ok(pairs)
}

/// Map (date, label) pairs to schedule entries, attaching display icons.
pub(crate) fn build_entries(pairs: Vec<(NaiveDate, String)>) -> Vec<Collection> {
    pairs
        .into_iter()
        .map(|(date, waste_stream)| {
            let icon = icon_for(&waste_stream).map(str::to_owned);
            if icon.is_none() {
                debug!(bin = %waste_stream, "no icon mapping for bin label");
            }
            Collection {
                date,
                waste_stream,
                icon,
            }
        })
        .collect()
}

// Exact match on the label as printed; unknown labels get no icon.
fn icon_for(bin: &str) -> Option<&'static str> {
    match bin {
        "Grey" => Some("mdi:trash-can"),
        "Brown" => Some("mdi:leaf"),
        "Green" => Some("mdi:glass-fragile"),
        "Blue" => Some("mdi:note"),
        _ => None,
    }
}
