//! Narrow read-only view over a parsed HTML document.
//!
//! Extraction only needs three capabilities: find elements by CSS selector,
//! find nested elements, and read visible text. Keeping them behind these
//! types confines the `scraper` dependency to this module.

use scraper::{ElementRef, Html, Selector};

/// A pre-compiled CSS selector.
#[derive(Debug, Clone)]
pub struct Query {
    selector: Selector,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector `{selector}`: {message}")]
pub struct QueryError {
    pub selector: String,
    pub message: String,
}

impl Query {
    pub fn parse(css: &str) -> Result<Self, QueryError> {
        let selector = Selector::parse(css).map_err(|err| QueryError {
            selector: css.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { selector })
    }
}

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parsing is lenient; any input, including an empty string, yields a document.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// All matching elements in document order.
    pub fn find_all(&self, query: &Query) -> Vec<ElementHandle<'_>> {
        self.html
            .select(&query.selector)
            .map(ElementHandle::new)
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ElementHandle<'a> {
    element: ElementRef<'a>,
}

impl<'a> ElementHandle<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Visible text with every text fragment trimmed, then concatenated.
    pub fn text(&self) -> String {
        self.element
            .text()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    /// Matching descendants in document order; the element itself is excluded.
    pub fn find_all(&self, query: &Query) -> Vec<ElementHandle<'a>> {
        self.element
            .select(&query.selector)
            .map(ElementHandle::new)
            .collect()
    }

    pub fn find_first(&self, query: &Query) -> Option<ElementHandle<'a>> {
        self.element
            .select(&query.selector)
            .next()
            .map(ElementHandle::new)
    }
}
