//! Domain data structures for councils, premises, and collection schedules.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Built-in councils supported by the application.
pub enum Councils {
    /// Renfrewshire Council, Scotland.
    Renfrewshire,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a council known to kerbside.
pub struct CouncilId(pub String);

impl fmt::Display for Councils {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slug = match self {
            Councils::Renfrewshire => "renfrewshire",
        };
        write!(formatter, "{slug}")
    }
}

impl From<Councils> for CouncilId {
    fn from(council: Councils) -> Self {
        CouncilId(council.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Catalog metadata describing a council and where its data comes from.
pub struct CouncilMeta {
    /// Unique identifier.
    pub id: CouncilId,
    /// Human-friendly council name.
    pub name: String,
    /// One-line description of the data source.
    pub description: String,
    /// Council home page.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Unique property reference number, the UK-wide address identifier.
///
/// Councils hand these out as either numbers or strings; both are accepted
/// and normalized to the string form their lookup forms expect.
pub struct Uprn(pub String);

impl Uprn {
    /// The normalized string form used when filling form fields.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Uprn {
    fn from(number: u64) -> Self {
        Uprn(number.to_string())
    }
}

impl From<&str> for Uprn {
    fn from(text: &str) -> Self {
        Uprn(text.to_owned())
    }
}

impl From<String> for Uprn {
    fn from(text: String) -> Self {
        Uprn(text)
    }
}

impl fmt::Display for Uprn {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// The address identifier pair a source needs to look up a property.
pub struct Premises {
    /// Postcode of the property.
    pub postcode: String,
    /// Unique property reference number.
    pub uprn: Uprn,
}

impl Premises {
    /// Construct a new premises identifier.
    #[must_use]
    pub fn new<P: Into<String>, U: Into<Uprn>>(postcode: P, uprn: U) -> Self {
        Self {
            postcode: postcode.into(),
            uprn: uprn.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Scheduled bin collection on a specific day.
pub struct Collection {
    /// Date of the collection.
    pub date: NaiveDate,
    /// Waste-stream label exactly as the council prints it.
    pub waste_stream: String,
    /// Display icon for the waste stream, when one is known.
    pub icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uprn_is_normalized_from_integers_and_strings() {
        assert_eq!(Uprn::from(123_033_059_u64).as_str(), "123033059");
        assert_eq!(Uprn::from("123034174").as_str(), "123034174");
        assert_eq!(Uprn::from(String::from("123033042")).as_str(), "123033042");
    }

    #[test]
    fn premises_accepts_either_uprn_form() {
        let from_number = Premises::new("PA12 4JU", 123_033_059_u64);
        let from_text = Premises::new("PA12 4JU", "123033059");

        assert_eq!(from_number.uprn, from_text.uprn);
        assert_eq!(from_number.postcode, "PA12 4JU");
    }

    #[test]
    fn council_slug_converts_into_id() {
        let id: CouncilId = Councils::Renfrewshire.into();
        assert_eq!(id, CouncilId(String::from("renfrewshire")));
    }
}
