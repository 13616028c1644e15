//! Typed element queries over parsed HTML documents.
//!
//! Sources never touch the underlying parser crate directly; they describe
//! what they want (descendants by tag, class, or id) as a [`Query`] and get
//! back ordered [`Element`] handles in document order.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub struct Document {
    tree: Html,
}

/// A compiled element query.
pub struct Query {
    selector: Selector,
}

#[derive(Clone, Copy)]
/// Handle to an element inside a [`Document`].
pub struct Element<'doc> {
    node: ElementRef<'doc>,
}

impl Query {
    /// Compile a CSS query such as `div.collection__row` or `p.bins__name`.
    ///
    /// # Panics
    ///
    /// Panics when the selector text is not valid CSS. Queries are written as
    /// literals next to the source that owns them, so a panic here is a
    /// programming error, not a runtime condition.
    #[must_use]
    pub fn css(selector: &str) -> Self {
        Self {
            selector: Selector::parse(selector).expect("query selector must be valid CSS"),
        }
    }

    /// Compile a query matching elements with the given `id` attribute.
    #[must_use]
    pub fn id(id: &str) -> Self {
        Self::css(&format!("#{id}"))
    }
}

impl Document {
    /// Parse an HTML document from raw text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            tree: Html::parse_document(text),
        }
    }

    /// All elements matching the query, in document order.
    #[must_use]
    pub fn select(&self, query: &Query) -> Vec<Element<'_>> {
        self.tree
            .select(&query.selector)
            .map(|node| Element { node })
            .collect()
    }

    /// First element matching the query, if any.
    #[must_use]
    pub fn first(&self, query: &Query) -> Option<Element<'_>> {
        self.tree
            .select(&query.selector)
            .next()
            .map(|node| Element { node })
    }
}

impl<'doc> Element<'doc> {
    /// All descendant elements matching the query, in document order.
    #[must_use]
    pub fn select(&self, query: &Query) -> Vec<Element<'doc>> {
        self.node
            .select(&query.selector)
            .map(|node| Element { node })
            .collect()
    }

    /// Value of an attribute on this element, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'doc str> {
        self.node.value().attr(name)
    }

    /// Concatenated text content with surrounding whitespace trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        self.node.text().collect::<String>().trim().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div id="schedule">
            <p class="when"> Monday </p>
            <p class="when">Tuesday</p>
            <a href="/first">one</a>
          </div>
          <p class="when">outside</p>
        </body></html>
    "#;

    #[test]
    fn selects_by_id_and_scopes_descendants() {
        let document = Document::parse(PAGE);

        let schedule = document
            .first(&Query::id("schedule"))
            .expect("container should be found");
        let rows = schedule.select(&Query::css("p.when"));

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn preserves_document_order() {
        let document = Document::parse(PAGE);

        let texts: Vec<String> = document
            .select(&Query::css("p.when"))
            .iter()
            .map(Element::text)
            .collect();

        assert_eq!(texts, ["Monday", "Tuesday", "outside"]);
    }

    #[test]
    fn text_is_trimmed_and_attrs_are_readable() {
        let document = Document::parse(PAGE);

        let link = document
            .first(&Query::css("a"))
            .expect("link should be found");
        assert_eq!(link.attr("href"), Some("/first"));
        assert_eq!(link.attr("rel"), None);

        let first_row = document
            .first(&Query::css("p.when"))
            .expect("row should be found");
        assert_eq!(first_row.text(), "Monday");
    }

    #[test]
    fn missing_elements_yield_empty_results() {
        let document = Document::parse(PAGE);

        assert!(document.first(&Query::id("absent")).is_none());
        assert!(document.select(&Query::css("table")).is_empty());
    }
}
