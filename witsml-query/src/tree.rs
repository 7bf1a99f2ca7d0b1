//! Owned, mutable XML element tree.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Detaching a
//! node only unlinks it from its parent; the arena slot stays allocated, so
//! ids collected before a mutation remain valid for the lifetime of the tree.
//!
//! Only what query templates use is modelled: elements, attributes and
//! element text. Comments, processing instructions and the XML declaration
//! are dropped on parse.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::fmt;

use crate::error::{QueryError, QueryResult};

/// Handle to an element inside an [`XmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(name: String, attributes: Vec<(String, String)>, parent: Option<NodeId>) -> Self {
        Self {
            name,
            attributes,
            text: String::new(),
            parent,
            children: Vec::new(),
        }
    }
}

/// An XML document held as an arena of elements.
#[derive(Debug, Clone)]
pub struct XmlTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl XmlTree {
    /// Parses a document. Fails on anything that is not a single
    /// well-formed root element.
    pub fn parse(xml: &str) -> QueryResult<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut nodes: Vec<Node> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut root: Option<NodeId> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| QueryError::Malformed(e.to_string()))?;
            match event {
                Event::Start(start) => {
                    let id = open_element(&mut nodes, &stack, &mut root, &start)?;
                    stack.push(id);
                }
                Event::Empty(start) => {
                    open_element(&mut nodes, &stack, &mut root, &start)?;
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| QueryError::Malformed(e.to_string()))?;
                    append_text(&mut nodes, &stack, &text)?;
                }
                Event::CData(data) => {
                    let bytes = data.into_inner();
                    append_text(&mut nodes, &stack, &String::from_utf8_lossy(&bytes))?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(QueryError::Malformed(format!(
                "element <{}> is never closed",
                nodes[open.0].name
            )));
        }

        let root = root.ok_or_else(|| QueryError::Malformed("document has no root element".into()))?;
        Ok(Self { nodes, root })
    }

    /// The document element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The element name as written, including any namespace prefix.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// The element name without its namespace prefix.
    #[must_use]
    pub fn local_name(&self, id: NodeId) -> &str {
        let name = self.name(id);
        name.rsplit_once(':').map_or(name, |(_, local)| local)
    }

    /// Text directly inside the element, unescaped. Empty when none.
    #[must_use]
    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id.0].text
    }

    /// Replaces the element's text. Children are kept.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = text.into();
    }

    /// The unescaped value of an attribute, matched by its full name.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes[id.0]
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrites an existing attribute. Returns false, changing nothing,
    /// when the element does not carry the attribute.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> bool {
        match self.nodes[id.0].attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// The enclosing element. `None` for the root and for detached nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Ancestors of `id`, closest first. Does not include `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |n| self.parent(*n))
    }

    /// `id` and everything below it, in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Every element still attached to the document, in document order.
    #[must_use]
    pub fn elements(&self) -> Vec<NodeId> {
        self.descendants(self.root)
    }

    /// First attached element with the given local name, in document order.
    #[must_use]
    pub fn find_first(&self, local_name: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|id| self.local_name(*id) == local_name)
    }

    /// All attached elements with the given local name, in document order.
    #[must_use]
    pub fn find_all(&self, local_name: &str) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|id| self.local_name(*id) == local_name)
            .collect()
    }

    /// Unlinks an element (and with it its subtree) from its parent.
    /// The root cannot be detached; the call is ignored for it.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
    }

    /// Copies the subtree rooted at `id`. The copy is not attached anywhere.
    pub fn deep_clone(&mut self, id: NodeId) -> NodeId {
        let copy = NodeId(self.nodes.len());
        let mut node = self.nodes[id.0].clone();
        node.parent = None;
        node.children.clear();
        self.nodes.push(node);

        let children = self.nodes[id.0].children.clone();
        for child in children {
            let child_copy = self.deep_clone(child);
            self.append_child(copy, child_copy);
        }
        copy
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Serializes the attached document without an XML declaration.
    pub fn to_xml(&self) -> QueryResult<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_element(&mut writer, self.root)?;
        String::from_utf8(writer.into_inner()).map_err(write_failed)
    }

    fn write_element(&self, writer: &mut Writer<Vec<u8>>, id: NodeId) -> QueryResult<()> {
        let node = &self.nodes[id.0];
        let mut start = BytesStart::new(node.name.as_str());
        for (key, value) in &node.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if node.children.is_empty() && node.text.is_empty() {
            writer.write_event(Event::Empty(start)).map_err(write_failed)?;
            return Ok(());
        }

        writer.write_event(Event::Start(start)).map_err(write_failed)?;
        if !node.text.is_empty() {
            writer
                .write_event(Event::Text(BytesText::new(&node.text)))
                .map_err(write_failed)?;
        }
        for child in &node.children {
            self.write_element(writer, *child)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(node.name.as_str())))
            .map_err(write_failed)?;
        Ok(())
    }
}

impl fmt::Display for XmlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_xml() {
            Ok(xml) => f.write_str(&xml),
            Err(_) => Err(fmt::Error),
        }
    }
}

fn write_failed(e: impl fmt::Display) -> QueryError {
    QueryError::Serialize(e.to_string())
}

fn open_element(
    nodes: &mut Vec<Node>,
    stack: &[NodeId],
    root: &mut Option<NodeId>,
    start: &BytesStart<'_>,
) -> QueryResult<NodeId> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| QueryError::Malformed(e.to_string()))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| QueryError::Malformed(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| QueryError::Malformed(e.to_string()))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| QueryError::Malformed(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    let id = NodeId(nodes.len());
    let parent = stack.last().copied();
    match parent {
        Some(parent) => nodes[parent.0].children.push(id),
        None if root.is_some() => {
            return Err(QueryError::Malformed(format!(
                "second root element <{name}>"
            )));
        }
        None => *root = Some(id),
    }
    nodes.push(Node::new(name, attributes, parent));
    Ok(id)
}

fn append_text(nodes: &mut [Node], stack: &[NodeId], text: &str) -> QueryResult<()> {
    match stack.last() {
        Some(id) => {
            nodes[id.0].text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(QueryError::Malformed(format!(
            "text outside the root element: {text:?}"
        ))),
    }
}
