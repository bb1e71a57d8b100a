//! Parsed XML tree
//!
//! A small DOM-like model: documents, elements and text nodes. Names keep
//! their namespace prefix (`vmext:Service`) the way a browser DOM reports
//! `nodeName`.

use crate::utils::error::{LifecycleError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Node name reported for text nodes
pub const TEXT_NODE_NAME: &str = "#text";
/// Node name reported for the document node
pub const DOCUMENT_NODE_NAME: &str = "#document";

/// A node of a parsed XML document
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// Document root; holds the top-level element (and any stray text)
    Document { children: Vec<XmlNode> },
    /// Element with attributes in document order
    Element(XmlElement),
    /// Character data, entities already unescaped
    Text(String),
}

/// Element node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// DOM-style node name used as the merge key by the converter
    pub fn name(&self) -> &str {
        match self {
            XmlNode::Document { .. } => DOCUMENT_NODE_NAME,
            XmlNode::Element(element) => &element.name,
            XmlNode::Text(_) => TEXT_NODE_NAME,
        }
    }

    /// Attributes of an element; empty for other node kinds
    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            XmlNode::Element(element) => &element.attributes,
            _ => &[],
        }
    }

    /// Ordered child nodes; empty for text nodes
    pub fn children(&self) -> &[XmlNode] {
        match self {
            XmlNode::Document { children } => children,
            XmlNode::Element(element) => &element.children,
            XmlNode::Text(_) => &[],
        }
    }

    pub fn element<S: Into<String>>(name: S) -> XmlElement {
        XmlElement {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn text<S: Into<String>>(text: S) -> Self {
        XmlNode::Text(text.into())
    }
}

impl XmlElement {
    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child<N: Into<XmlNode>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = utf8(start.name().as_ref())?;
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| LifecycleError::xml(e.to_string()))?;
            let key = utf8(attribute.key.as_ref())?;
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        XmlNode::Element(element)
    }
}

fn utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| LifecycleError::xml(format!("Invalid UTF-8 in XML: {}", e)))
}

/// Parse an XML document into a [`XmlNode::Document`].
///
/// Comments, processing instructions, the declaration and the doctype are
/// skipped. Whitespace-only text between elements is dropped; CDATA sections
/// become text nodes.
pub fn parse_document(input: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(input);
    let mut open: Vec<XmlElement> = Vec::new();
    let mut roots: Vec<XmlNode> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(XmlElement::from_start(&start)?),
            Event::Empty(start) => {
                let element = XmlElement::from_start(&start)?;
                attach(&mut open, &mut roots, element.into());
            }
            Event::End(end) => {
                let element = open.pop().ok_or_else(|| {
                    LifecycleError::xml(format!(
                        "Unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                attach(&mut open, &mut roots, element.into());
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() {
                    attach(&mut open, &mut roots, XmlNode::Text(text.into_owned()));
                }
            }
            Event::CData(data) => {
                let text = utf8(&data.into_inner())?;
                attach(&mut open, &mut roots, XmlNode::Text(text));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.last() {
        return Err(LifecycleError::xml(format!(
            "Unclosed element <{}>",
            element.name
        )));
    }

    Ok(XmlNode::Document { children: roots })
}

fn attach(open: &mut [XmlElement], roots: &mut Vec<XmlNode>, node: XmlNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}
