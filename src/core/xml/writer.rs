//! Serialise values and node trees back to XML text

use super::node::{TEXT_NODE_NAME, XmlElement, XmlNode};
use super::value::XmlValue;
use crate::utils::error::{LifecycleError, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;

/// Write `value` as a document whose root element is `root`.
///
/// Scalars inside an object become attributes, objects become child
/// elements and arrays become repeated child elements; a `#text` entry or a
/// bare scalar becomes character data. Feeding the output back through
/// [`super::convert_str`] yields `{root: value}` whenever the value has no
/// attribute/element ambiguity: every array holds at least two objects and
/// no string looks like a JSON literal.
pub fn to_xml(root: &str, value: &XmlValue) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_value(&mut writer, root, value)?;
    into_string(writer)
}

/// Write a node tree, including an XML declaration for documents
pub fn write_node(node: &XmlNode) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    if let XmlNode::Document { .. } = node {
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
    }
    write_tree(&mut writer, node)?;
    into_string(writer)
}

fn write_tree(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<()> {
    match node {
        XmlNode::Document { children } => {
            for child in children {
                write_tree(writer, child)?;
            }
            Ok(())
        }
        XmlNode::Text(text) => emit(writer, Event::Text(BytesText::new(text))),
        XmlNode::Element(XmlElement {
            name,
            attributes,
            children,
        }) => {
            let mut start = BytesStart::new(name.as_str());
            for (key, value) in attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }

            if children.is_empty() {
                return emit(writer, Event::Empty(start));
            }

            emit(writer, Event::Start(start))?;
            for child in children {
                write_tree(writer, child)?;
            }
            emit(writer, Event::End(BytesEnd::new(name.as_str())))
        }
    }
}

fn write_value(writer: &mut Writer<Vec<u8>>, name: &str, value: &XmlValue) -> Result<()> {
    match value {
        XmlValue::Scalar(scalar) => {
            emit(writer, Event::Start(BytesStart::new(name)))?;
            emit(writer, Event::Text(BytesText::new(&scalar_text(scalar))))?;
            emit(writer, Event::End(BytesEnd::new(name)))
        }
        XmlValue::Array(_) => Err(LifecycleError::xml(format!(
            "Sequence under <{}> must be nested in an object",
            name
        ))),
        XmlValue::Object(map) => {
            let mut start = BytesStart::new(name);
            let mut text = None;
            let mut has_children = false;

            for (key, child) in map {
                match child {
                    XmlValue::Scalar(scalar) if key == TEXT_NODE_NAME => {
                        text = Some(scalar_text(scalar))
                    }
                    XmlValue::Scalar(scalar) => {
                        start.push_attribute((key.as_str(), scalar_text(scalar).as_str()))
                    }
                    _ => has_children = true,
                }
            }

            if text.is_none() && !has_children {
                return emit(writer, Event::Empty(start));
            }

            emit(writer, Event::Start(start))?;
            if let Some(text) = text {
                emit(writer, Event::Text(BytesText::new(&text)))?;
            }
            for (key, child) in map {
                match child {
                    XmlValue::Scalar(_) => {}
                    XmlValue::Object(_) => write_value(writer, key, child)?,
                    XmlValue::Array(items) => {
                        for item in items {
                            if item.is_array() {
                                return Err(LifecycleError::xml(format!(
                                    "Nested sequence under <{}> cannot be written",
                                    key
                                )));
                            }
                            write_value(writer, key, item)?;
                        }
                    }
                }
            }
            emit(writer, Event::End(BytesEnd::new(name)))
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| LifecycleError::xml(e.to_string()))
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner())
        .map_err(|e| LifecycleError::xml(format!("Writer produced invalid UTF-8: {}", e)))
}
