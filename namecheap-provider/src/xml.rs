//! Namecheap XML envelope decoding
//!
//! Every API call answers with an `ApiResponse` envelope:
//!
//! ```xml
//! <ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
//!   <Errors />
//!   <RequestedCommand>namecheap.domains.getList</RequestedCommand>
//!   <CommandResponse Type="namecheap.domains.getList">
//!     <DomainGetListResult>
//!       <Domain ID="127" Name="example.com" ... />
//!     </DomainGetListResult>
//!   </CommandResponse>
//! </ApiResponse>
//! ```
//!
//! The document is parsed into a small owned tree ([`XmlNode`]). Data lives in
//! attributes as often as in child elements, so [`XmlNode::field`] looks in both,
//! and [`XmlNode::children`] always hands back a sequence whether the element
//! occurs zero, one or many times.

use std::fmt;

use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ProviderError, Result};
use crate::traits::RawApiError;

/// Root element of every API response.
const ENVELOPE: &str = "ApiResponse";

/// An owned XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
    text: String,
}

impl XmlNode {
    /// Parse a whole document and return its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                parse_error(format!("at byte {}: {e}", reader.buffer_position()))
            })?;

            match event {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let node = Self::from_start(&start)?;
                    attach(&mut stack, &mut root, node)?;
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| parse_error("closing tag without an open element"))?;
                    attach(&mut stack, &mut root, node)?;
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        let text = text.unescape().map_err(parse_error)?;
                        current.text.push_str(&text);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current
                            .text
                            .push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => break,
                // Declaration, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(parse_error(format!("unclosed element <{}>", open.name)));
        }

        root.ok_or_else(|| parse_error("document has no root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(parse_error)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }
            let value = attr.unescape_value().map_err(parse_error)?;
            attributes.push((key, value.into_owned()));
        }

        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    /// Element name without namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content directly inside this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attribute value by exact name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Scalar field: the attribute `name`, otherwise the text of the first
    /// child element called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.attr(name)
            .or_else(|| self.child(name).map(XmlNode::text))
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements called `name`, in document order.
    pub fn children(&self, name: &str) -> Vec<&XmlNode> {
        self.children_any(&[name])
    }

    /// All child elements whose name is one of `names`, in document order.
    pub fn children_any(&self, names: &[&str]) -> Vec<&XmlNode> {
        self.children
            .iter()
            .filter(|c| names.contains(&c.name.as_str()))
            .collect()
    }

    /// Follow a chain of child names.
    pub fn path(&self, names: &[&str]) -> Option<&XmlNode> {
        names
            .iter()
            .try_fold(self, |node, name| node.child(name))
    }

    /// Take ownership of the first child called `name`.
    pub fn into_child(self, name: &str) -> Option<XmlNode> {
        self.children.into_iter().find(|c| c.name == name)
    }

    /// An element with no attributes, children or text.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty() && self.text.is_empty()
    }
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"{}\"", escape(value.as_str()))?;
        }
        if self.children.is_empty() && self.text.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">{}", escape(self.text.as_str()))?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        Ok(())
    } else if root.is_none() {
        *root = Some(node);
        Ok(())
    } else {
        Err(parse_error(format!(
            "unexpected second root element <{}>",
            node.name
        )))
    }
}

fn parse_error(detail: impl ToString) -> ProviderError {
    ProviderError::ParseError {
        detail: detail.to_string(),
    }
}

impl RawApiError {
    /// Extract message and code from an `Error` entry.
    ///
    /// Message: `Message` field, else the element text, else a dump of the entry.
    /// Code: `Number` field, else `Code`.
    pub(crate) fn from_node(entry: &XmlNode) -> Self {
        let message = non_empty(entry.field("Message"))
            .or_else(|| non_empty(Some(entry.text())))
            .map_or_else(|| entry.to_string(), str::to_string);

        let code = non_empty(entry.field("Number")).or_else(|| non_empty(entry.field("Code")));

        match code {
            Some(code) => Self::with_code(code, message),
            None => Self::new(message),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Decode a raw response body.
///
/// Fails with [`ProviderError::Api`] built from the first `Error` entry when the
/// envelope reports errors. Otherwise returns the `CommandResponse` subtree, or an
/// empty node when the envelope carries none; callers read missing results as
/// "nothing found".
pub fn decode(xml: &str) -> Result<XmlNode> {
    let root = XmlNode::parse(xml)?;

    if root.name() != ENVELOPE {
        return Err(parse_error(format!(
            "expected <{ENVELOPE}> envelope, found <{}>",
            root.name()
        )));
    }

    if let Some(entry) = root
        .child("Errors")
        .and_then(|errors| errors.children("Error").into_iter().next())
    {
        return Err(RawApiError::from_node(entry).into());
    }

    Ok(root.into_child("CommandResponse").unwrap_or_default())
}
