// Generic element tree for schema-less XML documents
//
// Every element becomes a `TreeNode` carrying its local name, the raw text
// that sits directly inside it, and its child elements in document order.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One parsed element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeNode {
    name: String,
    raw_content: Vec<u8>,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Build a node by hand
    pub fn element(
        name: impl Into<String>,
        raw_content: impl Into<Vec<u8>>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_content: raw_content.into(),
            children,
        }
    }

    fn open(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            raw_content: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Local element name, without namespace prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text directly inside this element, exactly as written
    pub fn raw_content(&self) -> &[u8] {
        &self.raw_content
    }

    /// Raw content as text (lossy for invalid UTF-8)
    pub fn content(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.raw_content)
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Parse one document into its root element.
///
/// Only the first root element is read. Comments, processing instructions
/// and the declaration are skipped. Any syntax error, mismatched or unclosed
/// tag, or a document without a root element is an error.
pub fn parse_document(bytes: &[u8]) -> Result<TreeNode> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut stack: Vec<TreeNode> = Vec::new();

    loop {
        let finished = match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                stack.push(TreeNode::open(&start));
                None
            }
            Event::Empty(start) => attach(&mut stack, TreeNode::open(&start)),
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| Error::malformed("closing tag without an open element"))?;
                attach(&mut stack, node)
            }
            Event::Text(text) => {
                if let Some(node) = stack.last_mut() {
                    node.raw_content.extend_from_slice(&text);
                }
                None
            }
            Event::CData(cdata) => {
                if let Some(node) = stack.last_mut() {
                    node.raw_content.extend_from_slice(&cdata);
                }
                None
            }
            Event::Eof => {
                return Err(match stack.last() {
                    Some(open) => Error::malformed(format!("unclosed element <{}>", open.name)),
                    None => Error::malformed("no root element"),
                });
            }
            _ => None,
        };

        if let Some(root) = finished {
            return Ok(root);
        }
        buf.clear();
    }
}

/// Push a completed node onto its parent, or hand it back if it is the root
fn attach(stack: &mut [TreeNode], node: TreeNode) -> Option<TreeNode> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(node);
            None
        }
        None => Some(node),
    }
}

/// Read and parse a document from disk.
///
/// Open and read failures come back as `Error::Io`; anything wrong with the
/// bytes themselves comes back as `Error::Decode` carrying the path. The file
/// handle is closed before this returns on every path.
pub fn read_document(path: &Path) -> Result<TreeNode> {
    let bytes = {
        let mut file = File::open(path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        bytes
    };

    parse_document(&bytes).map_err(|e| Error::decode(path, e))
}
