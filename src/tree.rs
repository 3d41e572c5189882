//! Page tree abstraction.
//!
//! The whole pipeline runs over `PageTree`, an owned arena tree with an
//! explicit shadow-root edge per element. Two bindings produce one:
//!
//! - [`Page::from_html`] parses real HTML with `dom_query` and walks the
//!   parsed document into the arena. Declarative shadow roots
//!   (`<template shadowrootmode="...">`) are rewritten to a neutral element
//!   name before parsing, because html5ever parks template contents in a
//!   separate fragment where ordinary child traversal cannot see them; the
//!   arena builder then re-attaches them as shadow roots.
//! - The builder methods (`element`, `text`, `shadow`) assemble fixture
//!   trees directly, so tests exercise every component above this module
//!   without HTML.
//!
//! Nodes are addressed by [`NodeId`]; lookups on an unknown id return
//! nothing rather than panicking.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Handle to a node inside a [`PageTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct PageNode {
    data: NodeData,
    children: Vec<NodeId>,
    shadow_root: Option<NodeId>,
}

/// Owned document tree with shadow-root edges.
#[derive(Debug, Clone)]
pub struct PageTree {
    nodes: Vec<PageNode>,
}

/// Neutral element name declarative shadow templates are rewritten to, so
/// the parser keeps their contents as ordinary children.
const SHADOW_HOST_TAG: &str = "shadow-contents";

#[allow(clippy::expect_used)]
static TEMPLATE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<template\b").expect("TEMPLATE_OPEN regex"));
#[allow(clippy::expect_used)]
static TEMPLATE_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</template\s*>").expect("TEMPLATE_CLOSE regex"));

impl PageTree {
    /// Root of every tree: a synthetic `#document` element.
    pub const ROOT: NodeId = NodeId(0);

    /// Creates an empty tree holding only the synthetic root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![PageNode {
                data: NodeData::Element {
                    name: "#document".to_string(),
                    attrs: Vec::new(),
                },
                children: Vec::new(),
                shadow_root: None,
            }],
        }
    }

    /// Parses an HTML string into a tree, attaching declarative shadow
    /// roots as shadow edges.
    #[must_use]
    pub fn from_html(html: &str) -> Self {
        let rewritten = TEMPLATE_OPEN.replace_all(html, format!("<{SHADOW_HOST_TAG}"));
        let rewritten = TEMPLATE_CLOSE.replace_all(&rewritten, format!("</{SHADOW_HOST_TAG}>"));
        let doc = dom_query::Document::from(rewritten.as_ref());

        let mut tree = Self::new();
        let html_sel = doc.select("html");
        for node in html_sel.nodes() {
            tree.import_node(*node, Self::ROOT);
        }
        tree
    }

    fn import_node(&mut self, node: dom_query::NodeRef, parent: NodeId) {
        if node.is_text() {
            let text = node.text().to_string();
            if !text.is_empty() {
                self.text(parent, &text);
            }
            return;
        }
        if !node.is_element() {
            return;
        }

        let name = node
            .node_name()
            .map(|n| n.to_string().to_ascii_lowercase())
            .unwrap_or_default();
        let attrs: Vec<(String, String)> = node
            .attrs()
            .iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect();

        // A rewritten declarative shadow template becomes the shadow root of
        // its host element. Inert templates (no shadowrootmode) and a second
        // shadow template on the same host render nothing; drop them.
        let id = if name == SHADOW_HOST_TAG {
            if !attrs.iter().any(|(k, _)| k == "shadowrootmode")
                || self.shadow_root(parent).is_some()
            {
                return;
            }
            self.shadow(parent)
        } else {
            self.element_with_attrs(parent, &name, attrs)
        };
        for child in node.children() {
            self.import_node(child, id);
        }
    }

    // === Builder (fixture binding) ===

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(PageNode {
            data,
            children: Vec::new(),
            shadow_root: None,
        });
        id
    }

    /// Appends an element child with `(name, value)` attribute pairs.
    pub fn element_with_attrs(
        &mut self,
        parent: NodeId,
        name: &str,
        attrs: Vec<(String, String)>,
    ) -> NodeId {
        let id = self.push(NodeData::Element {
            name: name.to_ascii_lowercase(),
            attrs,
        });
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    /// Appends an element child without attributes.
    pub fn element(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.element_with_attrs(parent, name, Vec::new())
    }

    /// Appends an element child with attributes given as `&str` pairs.
    pub fn element_attrs(&mut self, parent: NodeId, name: &str, attrs: &[(&str, &str)]) -> NodeId {
        let attrs = attrs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.element_with_attrs(parent, name, attrs)
    }

    /// Appends a text child.
    pub fn text(&mut self, parent: NodeId, content: &str) -> NodeId {
        let id = self.push(NodeData::Text(content.to_string()));
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    /// Attaches (or returns the existing) shadow root of `host`.
    pub fn shadow(&mut self, host: NodeId) -> NodeId {
        if let Some(existing) = self.shadow_root(host) {
            return existing;
        }
        let id = self.push(NodeData::Element {
            name: "#shadow-root".to_string(),
            attrs: Vec::new(),
        });
        if let Some(h) = self.nodes.get_mut(host.0) {
            h.shadow_root = Some(id);
        }
        id
    }

    // === Accessors ===

    /// Element name, lowercase. `None` for text nodes and unknown ids.
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match self.nodes.get(id.0).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => Some(name),
            _ => None,
        }
    }

    /// Attribute value by name. `None` for text nodes, unknown ids, and
    /// absent attributes.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.nodes.get(id.0).map(|n| &n.data) {
            Some(NodeData::Element { attrs, .. }) => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Text content of a text node. `None` for elements and unknown ids.
    #[must_use]
    pub fn text_value(&self, id: NodeId) -> Option<&str> {
        match self.nodes.get(id.0).map(|n| &n.data) {
            Some(NodeData::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// `true` when the node is an element.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(
            self.nodes.get(id.0).map(|n| &n.data),
            Some(NodeData::Element { .. })
        )
    }

    /// Ordinary children, in document order. Empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    /// Shadow root of an element, when one is attached.
    #[must_use]
    pub fn shadow_root(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|n| n.shadow_root)
    }

    /// Concatenated lowercase `class` and `id` attribute values, the token
    /// string the denylists match against.
    #[must_use]
    pub fn class_id_tokens(&self, id: NodeId) -> String {
        let mut tokens = String::new();
        if let Some(class) = self.attr(id, "class") {
            tokens.push_str(&class.to_ascii_lowercase());
        }
        if let Some(elem_id) = self.attr(id, "id") {
            if !tokens.is_empty() {
                tokens.push(' ');
            }
            tokens.push_str(&elem_id.to_ascii_lowercase());
        }
        tokens
    }

    /// Raw text of the `<title>` element, if present.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let node = self.find_by_name(Self::ROOT, "title")?;
        let mut out = String::new();
        for child in self.children(node) {
            if let Some(text) = self.text_value(*child) {
                out.push_str(text);
            }
        }
        let trimmed = out.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn find_by_name(&self, root: NodeId, name: &str) -> Option<NodeId> {
        if self.name(root) == Some(name) {
            return Some(root);
        }
        for child in self.children(root) {
            if let Some(found) = self.find_by_name(*child, name) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for PageTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Location of the page being extracted; adapters match on its hostname.
#[derive(Debug, Clone)]
pub struct PageLocation {
    raw: String,
    url: Option<Url>,
}

impl PageLocation {
    /// Parses a location string. Invalid URLs yield an empty host, so no
    /// platform adapter matches and the generic one still does — parsing
    /// never fails the extraction.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            url: Url::parse(raw).ok(),
        }
    }

    /// Hostname, or `""` when the URL is absent or unparseable.
    #[must_use]
    pub fn host(&self) -> &str {
        self.url.as_ref().and_then(Url::host_str).unwrap_or("")
    }

    /// Case-insensitive hostname substring test; the adapter `matches`
    /// primitive.
    #[must_use]
    pub fn host_contains(&self, needle: &str) -> bool {
        self.host()
            .to_ascii_lowercase()
            .contains(&needle.to_ascii_lowercase())
    }

    /// The location string as given by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// One extraction request's worth of page state: the parsed tree plus the
/// location it came from. Built fresh per request, discarded after.
#[derive(Debug, Clone)]
pub struct Page {
    /// Parsed document tree.
    pub tree: PageTree,
    /// Source location.
    pub location: PageLocation,
}

impl Page {
    /// Parses HTML into a [`Page`] for the given location.
    #[must_use]
    pub fn from_html(html: &str, url: &str) -> Self {
        Self {
            tree: PageTree::from_html(html),
            location: PageLocation::parse(url),
        }
    }

    /// Wraps a fixture tree (test binding).
    #[must_use]
    pub fn from_tree(tree: PageTree, url: &str) -> Self {
        Self {
            tree,
            location: PageLocation::parse(url),
        }
    }
}
