//! Streaming element reader.
//!
//! Wraps a quick-xml pull parser and exposes one element at a time through
//! [`XmlRead`], so a value only ever sees the element it is decoding.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use tracing::trace;

use crate::{XmlError, XmlRead, XmlSerializable};

/// The start tag the reader is positioned on.
struct CurrentElement {
    start: BytesStart<'static>,
    name: String,
    empty: bool,
    /// Text content and end tag have already been consumed.
    content_read: bool,
}

/// Pull reader positioned element by element.
pub struct XmlElementReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    current: Option<CurrentElement>,
}

impl<R: BufRead> XmlElementReader<R> {
    /// Create a reader over `inner`. No element is current until
    /// [`move_to_element`](Self::move_to_element) is called.
    pub fn new(inner: R) -> Self {
        Self {
            reader: Reader::from_reader(inner),
            buf: Vec::new(),
            current: None,
        }
    }

    /// Advance to the next start or self-closing tag at any depth.
    ///
    /// Returns `false` at end of input. Declarations, comments, whitespace and
    /// end tags of enclosing elements are skipped.
    pub fn move_to_element(&mut self) -> Result<bool, XmlError> {
        loop {
            self.buf.clear();
            let (start, empty) = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => (e.into_owned(), false),
                Event::Empty(e) => (e.into_owned(), true),
                Event::Eof => {
                    self.current = None;
                    return Ok(false);
                }
                _ => continue,
            };

            let name = std::str::from_utf8(start.name().as_ref())?.to_string();
            trace!(element = %name, empty, "entered element");
            self.current = Some(CurrentElement {
                start,
                name,
                empty,
                content_read: empty,
            });
            return Ok(true);
        }
    }

    /// Name of the current element.
    pub fn name(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.name.as_str())
    }

    /// Move past the end tag of the current element without looking at its
    /// content.
    pub fn skip_element(&mut self) -> Result<(), XmlError> {
        let current = self.current.as_mut().ok_or(XmlError::NoCurrentElement)?;
        if current.content_read {
            return Ok(());
        }
        current.content_read = true;
        let name = current.name.clone();

        self.buf.clear();
        self.reader
            .read_to_end_into(QName(name.as_bytes()), &mut self.buf)?;
        trace!(element = %name, "skipped element");
        Ok(())
    }

    /// Advance to the next element and decode it into a fresh `T`.
    ///
    /// Whatever content `T` leaves unread is skipped, so the reader ends up
    /// after the element either way.
    pub fn read_value<T: XmlSerializable + Default>(&mut self) -> Result<Option<T>, XmlError> {
        if !self.move_to_element()? {
            return Ok(None);
        }
        let mut value = T::default();
        value.read_xml(self)?;
        self.skip_element()?;
        Ok(Some(value))
    }

    /// Decode every element named `element_name`, skipping others.
    pub fn read_all<T: XmlSerializable + Default>(
        &mut self,
        element_name: &str,
    ) -> Result<Vec<T>, XmlError> {
        let mut values = Vec::new();
        while self.move_to_element()? {
            if self.name() != Some(element_name) {
                continue;
            }
            let mut value = T::default();
            value.read_xml(self)?;
            self.skip_element()?;
            values.push(value);
        }
        Ok(values)
    }

    /// Give back the wrapped input.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: BufRead> XmlRead for XmlElementReader<R> {
    fn attribute(&self, name: &str) -> Result<Option<String>, XmlError> {
        let current = self.current.as_ref().ok_or(XmlError::NoCurrentElement)?;
        match current.start.try_get_attribute(name)? {
            Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
            None => Ok(None),
        }
    }

    fn is_empty_element(&self) -> bool {
        self.current.as_ref().map_or(false, |c| c.empty)
    }

    fn read_string(&mut self) -> Result<String, XmlError> {
        let current = self.current.as_mut().ok_or(XmlError::NoCurrentElement)?;
        if current.content_read {
            return Ok(String::new());
        }
        current.content_read = true;
        let name = current.name.clone();

        let mut text = String::new();
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::CData(c) => text.push_str(std::str::from_utf8(&c)?),
                Event::End(_) => break,
                Event::Start(e) | Event::Empty(e) => {
                    return Err(XmlError::UnexpectedChild {
                        parent: name,
                        child: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    });
                }
                Event::Eof => return Err(XmlError::UnexpectedEof(name)),
                _ => {}
            }
        }

        trace!(element = %name, len = text.len(), "read element text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(xml: &str) -> XmlElementReader<&[u8]> {
        XmlElementReader::new(xml.as_bytes())
    }

    #[test]
    fn test_move_to_element_skips_prolog() {
        let mut r = reader("<?xml version=\"1.0\"?>\n<!-- c -->\n<Regex/>");
        assert!(r.move_to_element().unwrap());
        assert_eq!(r.name(), Some("Regex"));
        assert!(r.is_empty_element());
        assert!(!r.move_to_element().unwrap());
        assert_eq!(r.name(), None);
    }

    #[test]
    fn test_attribute_lookup() {
        let mut r = reader(r#"<Regex options="a&amp;b" other="x">p</Regex>"#);
        r.move_to_element().unwrap();
        assert_eq!(r.attribute("options").unwrap().as_deref(), Some("a&b"));
        assert_eq!(r.attribute("missing").unwrap(), None);
    }

    #[test]
    fn test_without_element() {
        let mut r = reader("<Regex/>");
        assert!(matches!(r.attribute("options"), Err(XmlError::NoCurrentElement)));
        assert!(matches!(r.read_string(), Err(XmlError::NoCurrentElement)));
        // no error path here; reports not-empty
        assert!(!r.is_empty_element());
    }

    #[test]
    fn test_read_string_unescapes_and_joins_cdata() {
        let mut r = reader("<Regex>a&lt;b<![CDATA[<c>]]></Regex>");
        r.move_to_element().unwrap();
        assert!(!r.is_empty_element());
        assert_eq!(r.read_string().unwrap(), "a<b<c>");
    }

    #[test]
    fn test_read_string_start_end_pair_is_empty_text() {
        let mut r = reader("<Regex></Regex>");
        r.move_to_element().unwrap();
        assert!(!r.is_empty_element());
        assert_eq!(r.read_string().unwrap(), "");
    }

    #[test]
    fn test_read_string_on_empty_element() {
        let mut r = reader("<Regex/><Next/>");
        r.move_to_element().unwrap();
        assert_eq!(r.read_string().unwrap(), "");
        r.move_to_element().unwrap();
        assert_eq!(r.name(), Some("Next"));
    }

    #[test]
    fn test_read_string_leaves_reader_at_next_sibling() {
        let mut r = reader("<List><Regex>one</Regex><Regex>two</Regex></List>");
        r.move_to_element().unwrap();
        assert_eq!(r.name(), Some("List"));
        r.move_to_element().unwrap();
        assert_eq!(r.read_string().unwrap(), "one");
        r.move_to_element().unwrap();
        assert_eq!(r.read_string().unwrap(), "two");
        assert!(!r.move_to_element().unwrap());
    }

    #[test]
    fn test_read_string_rejects_child_element() {
        let mut r = reader("<Regex>a<b/></Regex>");
        r.move_to_element().unwrap();
        match r.read_string() {
            Err(XmlError::UnexpectedChild { parent, child }) => {
                assert_eq!(parent, "Regex");
                assert_eq!(child, "b");
            }
            other => panic!("expected UnexpectedChild, got {:?}", other),
        }
    }

    #[test]
    fn test_read_string_joins_text_around_comments() {
        let mut r = reader("<Regex>a<!--c-->b<?pi x?>c</Regex>");
        r.move_to_element().unwrap();
        assert_eq!(r.read_string().unwrap(), "abc");
        assert!(!r.move_to_element().unwrap());
    }

    #[test]
    fn test_read_string_truncated_input() {
        let mut r = reader("<Regex>abc");
        r.move_to_element().unwrap();
        assert!(r.read_string().is_err());
    }

    #[test]
    fn test_skip_element_then_next() {
        let mut r = reader("<Skip><inner>x</inner></Skip><Keep/>");
        r.move_to_element().unwrap();
        r.skip_element().unwrap();
        r.move_to_element().unwrap();
        assert_eq!(r.name(), Some("Keep"));
    }

    #[test]
    fn test_into_inner_returns_unread_input() {
        let mut r = reader("<Regex>a</Regex><Rest/>");
        r.move_to_element().unwrap();
        assert_eq!(r.read_string().unwrap(), "a");
        let rest = r.into_inner();
        assert!(rest.ends_with(b"<Rest/>"));
        assert!(!std::str::from_utf8(rest).unwrap().contains("Regex"));
    }
}
