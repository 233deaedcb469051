//! Configured XML encoding and decoding of regex values.

use std::io::BufRead;

use mongo_xml::{XmlElementReader, XmlElementWriter, XmlError};
use tracing::debug;

use crate::config::CodecConfig;
use crate::regex::RegexValue;

/// Encode `value` as one element, named and prefixed per `config`.
pub fn encode_to_string(value: &RegexValue, config: &CodecConfig) -> Result<String, XmlError> {
    let mut writer = XmlElementWriter::new(Vec::new());
    if config.xml_declaration {
        writer.write_declaration()?;
    }
    writer.write_value(&config.element_name, value)?;
    let bytes = writer.into_inner()?;
    String::from_utf8(bytes).map_err(|e| XmlError::Utf8(e.utf8_error()))
}

/// Decode every element named `config.element_name` in `input`, in document
/// order. Other elements are walked through, so values nested in a wrapper
/// element are found too.
pub fn decode_all<R: BufRead>(input: R, config: &CodecConfig) -> Result<Vec<RegexValue>, XmlError> {
    let mut reader = XmlElementReader::new(input);
    let values: Vec<RegexValue> = reader.read_all(&config.element_name)?;
    debug!(count = values.len(), element = %config.element_name, "decoded regex values");
    Ok(values)
}
