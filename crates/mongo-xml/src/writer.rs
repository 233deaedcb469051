//! Element writer.
//!
//! Start tags are held back until the first text or child is written, so
//! attributes can still be added and an element with no content is emitted
//! self-closing.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::trace;

use crate::{XmlError, XmlSerializable, XmlWrite};

struct OpenElement {
    name: String,
    /// Start tag not yet written; `None` once flushed.
    pending: Option<BytesStart<'static>>,
}

/// Push-style writer over any [`Write`].
pub struct XmlElementWriter<W: Write> {
    writer: Writer<W>,
    open: Vec<OpenElement>,
}

impl<W: Write> XmlElementWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new(inner),
            open: Vec::new(),
        }
    }

    /// Write `<?xml version="1.0" encoding="UTF-8"?>`.
    pub fn write_declaration(&mut self) -> Result<(), XmlError> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// Open a new element as a child of the current one.
    pub fn start_element(&mut self, name: &str) -> Result<(), XmlError> {
        self.flush_pending()?;
        trace!(element = name, "start element");
        self.open.push(OpenElement {
            name: name.to_string(),
            pending: Some(BytesStart::new(name.to_string())),
        });
        Ok(())
    }

    /// Close the current element; it is written self-closing when nothing was
    /// written into it.
    pub fn end_element(&mut self) -> Result<(), XmlError> {
        let element = self.open.pop().ok_or(XmlError::UnbalancedEnd)?;
        match element.pending {
            Some(start) => self.writer.write_event(Event::Empty(start))?,
            None => self
                .writer
                .write_event(Event::End(BytesEnd::new(element.name.as_str())))?,
        }
        trace!(element = %element.name, "end element");
        Ok(())
    }

    /// Write `value` as a complete element named `name`.
    pub fn write_value<T: XmlSerializable + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<(), XmlError> {
        self.start_element(name)?;
        value.write_xml(self)?;
        self.end_element()
    }

    /// Return the wrapped output. Fails if an element is still open.
    pub fn into_inner(self) -> Result<W, XmlError> {
        if let Some(element) = self.open.last() {
            return Err(XmlError::UnclosedElement(element.name.clone()));
        }
        Ok(self.writer.into_inner())
    }

    fn flush_pending(&mut self) -> Result<(), XmlError> {
        if let Some(start) = self.open.last_mut().and_then(|e| e.pending.take()) {
            self.writer.write_event(Event::Start(start))?;
        }
        Ok(())
    }
}

impl<W: Write> XmlWrite for XmlElementWriter<W> {
    fn write_attribute_string(&mut self, name: &str, value: &str) -> Result<(), XmlError> {
        let element = self.open.last_mut().ok_or(XmlError::NoCurrentElement)?;
        match element.pending.as_mut() {
            Some(start) => {
                start.push_attribute((name, value));
                trace!(element = %element.name, attribute = name, "wrote attribute");
                Ok(())
            }
            None => Err(XmlError::AttributeAfterContent {
                element: element.name.clone(),
                name: name.to_string(),
            }),
        }
    }

    fn write_string(&mut self, text: &str) -> Result<(), XmlError> {
        if self.open.is_empty() {
            return Err(XmlError::NoCurrentElement);
        }
        self.flush_pending()?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }
}
