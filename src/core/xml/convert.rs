//! XML node to [`XmlValue`] conversion

use super::node::{XmlNode, parse_document};
use super::value::XmlValue;
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Convert a parsed node into a nested value.
///
/// Attributes are stored under their names with JSON-literal coercion
/// (`"1"` becomes `1`, `"true"` becomes `true`). Children are converted
/// recursively and merged under their node name; a name seen more than once
/// becomes an ordered `Array`. Text nodes reduce to a literal.
///
/// [`parse_document`] drops whitespace-only text, so indentation in
/// pretty-printed input produces no `#text` entries. A DOM walk over the
/// same input would report that whitespace as text children.
pub fn convert(node: &XmlNode) -> XmlValue {
    match node {
        XmlNode::Text(text) => XmlValue::literal(text),
        XmlNode::Document { .. } | XmlNode::Element(_) => {
            let mut map = BTreeMap::new();

            for (name, raw) in node.attributes() {
                map.insert(name.clone(), XmlValue::literal(raw));
            }

            for child in node.children() {
                XmlValue::merge_child(&mut map, child.name(), convert(child));
            }

            XmlValue::Object(map)
        }
    }
}

/// Parse and convert an XML document in one step
pub fn convert_str(input: &str) -> Result<XmlValue> {
    let document = parse_document(input)?;
    Ok(convert(&document))
}
