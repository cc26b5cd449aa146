//! Namespace-agnostic XML traversal.
//!
//! Documents are parsed once into an immutable tree. The accessor functions
//! take `Option<&XmlElement>` and are total: a missing element yields an empty
//! list, `None` or an empty string instead of an error, because capabilities
//! documents routinely omit optional sections.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::error::{OgcError, OgcResult};

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlDocument {
    root: XmlElement,
}

/// An element node with its qualified name, attributes and children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlDocument {
    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

impl XmlElement {
    /// Qualified name as written in the document (e.g. `wfs:FeatureType`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with any namespace prefix removed.
    pub fn local_name(&self) -> &str {
        strip_namespace(&self.name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(el) => Some(el),
            XmlNode::Text(_) => None,
        })
    }

    fn from_start(start: &BytesStart<'_>) -> OgcResult<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| OgcError::xml_parse(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| OgcError::xml_parse(e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
        })
    }
}

/// Parse XML text into an immutable document tree.
pub fn parse_xml(text: &str) -> OgcResult<XmlDocument> {
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(XmlElement::from_start(&e)?),
            Ok(Event::Empty(e)) => attach(&mut stack, &mut root, XmlElement::from_start(&e)?)?,
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| OgcError::xml_parse("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(t)) => {
                let value = t
                    .unescape()
                    .map_err(|e| OgcError::xml_parse(e.to_string()))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::Text(value.into_owned()));
                }
            }
            Ok(Event::CData(c)) => {
                if let Some(parent) = stack.last_mut() {
                    let value = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    parent.children.push(XmlNode::Text(value));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(OgcError::xml_parse(format!(
                    "{} at position {}",
                    e,
                    reader.buffer_position()
                )))
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(OgcError::xml_parse(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.map(|root| XmlDocument { root })
        .ok_or_else(|| OgcError::xml_parse("document has no root element"))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> OgcResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(element)),
        None if root.is_some() => {
            return Err(OgcError::xml_parse(format!(
                "unexpected second root element <{}>",
                element.name
            )))
        }
        None => *root = Some(element),
    }
    Ok(())
}

/// The root element of a document.
pub fn root(document: &XmlDocument) -> &XmlElement {
    document.root()
}

/// Remove a namespace prefix: `wfs:FeatureType` becomes `FeatureType`.
pub fn strip_namespace(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// All element children, in document order.
pub fn children(element: Option<&XmlElement>) -> Vec<&XmlElement> {
    element
        .map(|el| el.child_elements().collect())
        .unwrap_or_default()
}

/// Children whose local name matches.
///
/// With `nested`, every child subtree is searched as well and matches are
/// collected depth-first in document order.
pub fn find_children<'a>(
    element: Option<&'a XmlElement>,
    name: &str,
    nested: bool,
) -> Vec<&'a XmlElement> {
    let mut found = Vec::new();
    if let Some(el) = element {
        collect_children(el, name, nested, &mut found);
    }
    found
}

fn collect_children<'a>(
    element: &'a XmlElement,
    name: &str,
    nested: bool,
    found: &mut Vec<&'a XmlElement>,
) {
    for child in element.child_elements() {
        if child.local_name() == name {
            found.push(child);
        }
        if nested {
            collect_children(child, name, true, found);
        }
    }
}

/// First match of [`find_children`], or `None`.
pub fn find_child<'a>(
    element: Option<&'a XmlElement>,
    name: &str,
    nested: bool,
) -> Option<&'a XmlElement> {
    let el = element?;
    for child in el.child_elements() {
        if child.local_name() == name {
            return Some(child);
        }
        if nested {
            if let Some(found) = find_child(Some(child), name, true) {
                return Some(found);
            }
        }
    }
    None
}

/// Follow a chain of direct children by local name.
pub fn find_path<'a>(element: Option<&'a XmlElement>, path: &[&str]) -> Option<&'a XmlElement> {
    path.iter()
        .try_fold(element?, |el, name| find_child(Some(el), name, false))
}

/// Content of the first text (or CDATA) child, or an empty string.
pub fn text(element: Option<&XmlElement>) -> String {
    element
        .and_then(|el| {
            el.children.iter().find_map(|node| match node {
                XmlNode::Text(t) => Some(t.clone()),
                XmlNode::Element(_) => None,
            })
        })
        .unwrap_or_default()
}

/// Attribute value, or an empty string.
///
/// Qualified names match exactly first; a prefixed name such as `xlink:href`
/// also matches an attribute with the same local name under another prefix.
pub fn attribute(element: Option<&XmlElement>, name: &str) -> String {
    let Some(el) = element else {
        return String::new();
    };
    if let Some((_, value)) = el.attributes.iter().find(|(key, _)| key == name) {
        return value.clone();
    }
    if name.contains(':') {
        let local = strip_namespace(name);
        if let Some((_, value)) = el
            .attributes
            .iter()
            .find(|(key, _)| key.contains(':') && strip_namespace(key) == local)
        {
            return value.clone();
        }
    }
    String::new()
}
