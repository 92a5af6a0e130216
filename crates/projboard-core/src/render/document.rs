//! In-memory document used as the render host.
//!
//! Nodes live in an arena keyed by handle. Clearing a container frees its
//! whole subtree, so handles of removed elements stop resolving.

use std::collections::{BTreeSet, HashMap};
use tracing::warn;

use super::{
    ElementHandle, Fragment, InsertPosition, RenderHost, CHILDREN_MARKER, CLASSES_MARKER,
    ID_MARKER,
};
use crate::error::{BoardError, BoardResult};

const ROOT_ID: &str = "app";

#[derive(Debug)]
struct Node {
    template: &'static str,
    /// Opening tag; the only place id and class markers are substituted.
    open_tag: String,
    /// Everything after the opening tag. Holds user text, never rescanned.
    body: String,
    dom_id: Option<String>,
    classes: BTreeSet<String>,
    children: Vec<ElementHandle>,
}

/// Arena-backed element tree that serializes back to HTML.
#[derive(Debug)]
pub struct Document {
    nodes: HashMap<ElementHandle, Node>,
    next: u64,
    root: ElementHandle,
}

impl Document {
    /// A document with a single `<div id="app">` mount point.
    pub fn new() -> Self {
        let root = ElementHandle(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node {
                template: "app",
                open_tag: format!("<div id=\"{ID_MARKER}\">"),
                body: format!("{CHILDREN_MARKER}</div>"),
                dom_id: Some(ROOT_ID.to_string()),
                classes: BTreeSet::new(),
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            next: 1,
            root,
        }
    }

    /// First attached element with the given id, in document order.
    pub fn find_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.find_in(self.root, id)
    }

    fn find_in(&self, handle: ElementHandle, id: &str) -> Option<ElementHandle> {
        let node = self.nodes.get(&handle)?;
        if node.dom_id.as_deref() == Some(id) {
            return Some(handle);
        }
        node.children.iter().find_map(|child| self.find_in(*child, id))
    }

    pub fn contains(&self, handle: ElementHandle) -> bool {
        self.nodes.contains_key(&handle)
    }

    pub fn children(&self, handle: ElementHandle) -> &[ElementHandle] {
        self.nodes
            .get(&handle)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn element_id(&self, handle: ElementHandle) -> Option<&str> {
        self.nodes.get(&handle)?.dom_id.as_deref()
    }

    pub fn template_of(&self, handle: ElementHandle) -> Option<&'static str> {
        self.nodes.get(&handle).map(|n| n.template)
    }

    pub fn has_class(&self, handle: ElementHandle, class: &str) -> bool {
        self.nodes
            .get(&handle)
            .is_some_and(|n| n.classes.contains(class))
    }

    /// Number of live elements, the mount point included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        self.html_of(self.root).unwrap_or_default()
    }

    /// Serialize the subtree rooted at `handle`.
    pub fn html_of(&self, handle: ElementHandle) -> Option<String> {
        let node = self.nodes.get(&handle)?;
        let children: String = node
            .children
            .iter()
            .filter_map(|child| self.html_of(*child))
            .collect();
        let classes = node.classes.iter().cloned().collect::<Vec<_>>().join(" ");
        let open_tag = node
            .open_tag
            .replace(ID_MARKER, &escape_attr(node.dom_id.as_deref().unwrap_or("")))
            .replace(CLASSES_MARKER, &escape_attr(&classes));
        Some(open_tag + &node.body.replacen(CHILDREN_MARKER, &children, 1))
    }

    fn remove_subtree(&mut self, handle: ElementHandle) {
        if let Some(node) = self.nodes.remove(&handle) {
            for child in node.children {
                self.remove_subtree(child);
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderHost for Document {
    fn root(&self) -> ElementHandle {
        self.root
    }

    fn instantiate(
        &mut self,
        fragment: Fragment,
        container: ElementHandle,
        position: InsertPosition,
        id: Option<&str>,
    ) -> BoardResult<ElementHandle> {
        let Some(parent) = self.nodes.get_mut(&container) else {
            warn!(template = fragment.template, ?container, "Container not in document");
            return Err(BoardError::MissingContainer(fragment.template));
        };

        let handle = ElementHandle(self.next);
        self.next += 1;
        match position {
            InsertPosition::Start => parent.children.insert(0, handle),
            InsertPosition::End => parent.children.push(handle),
        }

        let (open_tag, body) = split_open_tag(fragment.html);
        self.nodes.insert(
            handle,
            Node {
                template: fragment.template,
                open_tag,
                body,
                dom_id: id.map(str::to_string),
                classes: BTreeSet::new(),
                children: Vec::new(),
            },
        );
        Ok(handle)
    }

    fn clear(&mut self, container: ElementHandle) {
        let children = match self.nodes.get_mut(&container) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn set_class(&mut self, element: ElementHandle, class: &str, on: bool) {
        if let Some(node) = self.nodes.get_mut(&element) {
            if on {
                node.classes.insert(class.to_string());
            } else {
                node.classes.remove(class);
            }
        }
    }
}

/// Split rendered markup after the first `>`. Template output escapes `>`
/// inside attribute values, so that is the end of the root tag.
fn split_open_tag(mut html: String) -> (String, String) {
    match html.find('>') {
        Some(end) => {
            let body = html.split_off(end + 1);
            (html, body)
        }
        None => (html, String::new()),
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
