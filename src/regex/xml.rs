//! XML encoding of [`RegexValue`].
//!
//! Flags travel in the `options` attribute and the pattern is the element's
//! text. A `None` field is omitted rather than written empty:
//!
//! ```xml
//! <Regex options="gi">ab+c</Regex>
//! <Regex/>
//! <Regex options=""/>
//! <Regex>ab+c</Regex>
//! ```
//!
//! A reader that reports `<Regex></Regex>` as self-closing makes an empty
//! pattern indistinguishable from a missing one. This encoding accepts that.

use mongo_xml::{XmlError, XmlRead, XmlSerializable, XmlWrite};

use super::RegexValue;

/// Attribute carrying the flags.
pub const OPTIONS_ATTRIBUTE: &str = "options";

impl XmlSerializable for RegexValue {
    fn read_xml<R: XmlRead + ?Sized>(&mut self, reader: &mut R) -> Result<(), XmlError> {
        if let Some(options) = reader.attribute(OPTIONS_ATTRIBUTE)? {
            self.flags = Some(options);
        }

        if reader.is_empty_element() {
            return Ok(());
        }

        self.pattern = Some(reader.read_string()?);
        Ok(())
    }

    fn write_xml<W: XmlWrite + ?Sized>(&self, writer: &mut W) -> Result<(), XmlError> {
        if let Some(flags) = &self.flags {
            writer.write_attribute_string(OPTIONS_ATTRIBUTE, flags)?;
        }

        let Some(pattern) = &self.pattern else {
            return Ok(());
        };

        writer.write_string(pattern)
    }
}
