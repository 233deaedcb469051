//! Mongo XML boundary
//!
//! Element-level XML access for document values that describe their own XML
//! shape instead of relying on a field-to-element mapping.
//!
//! A value implements [`XmlSerializable`] and talks only to the two capability
//! traits [`XmlRead`] and [`XmlWrite`]. The enclosing context names the element;
//! the value fills in its attributes and text content.

pub mod error;
pub mod reader;
pub mod serializable;
pub mod writer;

pub use error::XmlError;
pub use reader::XmlElementReader;
pub use serializable::{XmlRead, XmlSchema, XmlSerializable, XmlWrite};
pub use writer::XmlElementWriter;

/// Serialize `value` as a single element named `element_name`.
pub fn to_xml_string<T: XmlSerializable + ?Sized>(
    value: &T,
    element_name: &str,
) -> Result<String, XmlError> {
    let mut writer = XmlElementWriter::new(Vec::new());
    writer.write_value(element_name, value)?;
    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).map_err(|e| XmlError::Utf8(e.utf8_error()))
}

/// Deserialize the first element of `xml` into a fresh `T`.
pub fn from_xml_str<T: XmlSerializable + Default>(xml: &str) -> Result<T, XmlError> {
    let mut reader = XmlElementReader::new(xml.as_bytes());
    match reader.read_value()? {
        Some(value) => Ok(value),
        None => Err(XmlError::NoElement),
    }
}
