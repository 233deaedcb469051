//! Error types for the XML boundary.

use std::str::Utf8Error;

/// Errors raised by [`XmlElementReader`](crate::XmlElementReader) and
/// [`XmlElementWriter`](crate::XmlElementWriter).
///
/// Failures of the underlying XML parser and of the wrapped I/O are carried
/// through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 in XML input: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("No current element; move to an element first")]
    NoCurrentElement,

    #[error("No element found in input")]
    NoElement,

    #[error("Unexpected end of input inside element <{0}>")]
    UnexpectedEof(String),

    #[error("Unexpected child element <{child}> inside text-only element <{parent}>")]
    UnexpectedChild { parent: String, child: String },

    #[error("Attribute '{name}' written after content of element <{element}>")]
    AttributeAfterContent { element: String, name: String },

    #[error("end_element called with no open element")]
    UnbalancedEnd,

    #[error("Element <{0}> was never closed")]
    UnclosedElement(String),
}
