//! XML to value mapping
//!
//! The extension query endpoints answer in XML. This module parses those
//! documents into a [`XmlNode`] tree and converts the tree into a
//! [`XmlValue`], a `Scalar | Object | Array` value that can be handed to
//! `serde` for typed records.
//!
//! ```rust
//! use plugin_lifecycle::core::xml::convert_str;
//!
//! let value = convert_str(r#"<Records><Item a="1"/><Item a="2"/></Records>"#).unwrap();
//! let items = value.at(&["Records", "Item"]).unwrap();
//! assert_eq!(items.as_array().map(|a| a.len()), Some(2));
//! ```

mod convert;
mod node;
mod value;
mod writer;

pub use convert::{convert, convert_str};
pub use node::{DOCUMENT_NODE_NAME, TEXT_NODE_NAME, XmlElement, XmlNode, parse_document};
pub use value::XmlValue;
pub use writer::{to_xml, write_node};
