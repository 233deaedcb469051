//! Capability traits for self-describing XML values.

use crate::XmlError;

/// Read access to the element a value is being decoded from.
///
/// Implementations are positioned on an element's start tag when handed to
/// [`XmlSerializable::read_xml`].
pub trait XmlRead {
    /// Value of the named attribute on the current element, or `None` when the
    /// element does not carry it.
    fn attribute(&self, name: &str) -> Result<Option<String>, XmlError>;

    /// Whether the current element is self-closing (`<Name/>`).
    ///
    /// Returns `false` when no element is current, where [`attribute`] and
    /// [`read_string`] fail with [`XmlError::NoCurrentElement`] instead.
    ///
    /// [`attribute`]: Self::attribute
    /// [`read_string`]: Self::read_string
    fn is_empty_element(&self) -> bool;

    /// Read the full text content of the current element and move past its
    /// end tag. An empty element reads as `""`. Comments and processing
    /// instructions inside the element are dropped and the text around them
    /// is joined.
    fn read_string(&mut self) -> Result<String, XmlError>;
}

/// Write access to the element a value is being encoded into.
///
/// The enclosing context has already opened the element; attributes must be
/// written before any text content.
pub trait XmlWrite {
    /// Add `name="value"` to the current element.
    fn write_attribute_string(&mut self, name: &str, value: &str) -> Result<(), XmlError>;

    /// Append escaped text content to the current element.
    fn write_string(&mut self, text: &str) -> Result<(), XmlError>;
}

/// Placeholder return type for [`XmlSerializable::schema`].
///
/// No value in this workspace publishes a schema; the hook exists so a
/// self-describing type can state that it has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlSchema;

/// A value that defines its own XML encoding.
///
/// Serializers hand the value a reader or writer positioned on an element whose
/// name they chose; the value decides which attributes and text it reads or
/// writes. No structural validation is performed when [`schema`](Self::schema)
/// returns `None`.
pub trait XmlSerializable {
    /// Fixed schema for this type, if any.
    fn schema(&self) -> Option<XmlSchema> {
        None
    }

    /// Populate `self` from the current element of `reader`.
    fn read_xml<R: XmlRead + ?Sized>(&mut self, reader: &mut R) -> Result<(), XmlError>;

    /// Write the attributes and content of `self` into the current element.
    fn write_xml<W: XmlWrite + ?Sized>(&self, writer: &mut W) -> Result<(), XmlError>;
}
