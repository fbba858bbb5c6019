//! In-memory document.
//!
//! A small arena-backed element tree implementing [`Surface`]. The server
//! renders pages into it and serializes the result to HTML; tests use it as a
//! stand-in for the browser DOM.

use crate::render::{Element, Node, Selector, Surface};

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<NodeId>,
    },
    Text(String),
}

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["meta", "link", "img", "br", "hr", "input"];

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    /// Slots of detached nodes, reused before the arena grows
    free: Vec<NodeId>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Document {
    /// `<html><head>…</head><body>…</body></html>` with the given children.
    pub fn new(head: Vec<Node>, body: Vec<Node>) -> Self {
        let mut document = Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
        };
        document.root = document.alloc_element("html");
        document.head = document.alloc_element("head");
        document.body = document.alloc_element("body");
        document.push_child(document.root, document.head);
        document.push_child(document.root, document.body);

        for node in &head {
            let id = document.build(node);
            document.push_child(document.head, id);
        }
        for node in &body {
            let id = document.build(node);
            document.push_child(document.body, id);
        }
        document
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of slots in the arena, live or free.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = data;
                id
            }
            None => {
                self.nodes.push(data);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn alloc_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        })
    }

    fn alloc_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeData::Text(text.to_string()))
    }

    /// Return `id` and its whole subtree to the free list.
    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let data = std::mem::replace(&mut self.nodes[id.0], NodeData::Text(String::new()));
            if let NodeData::Element { children, .. } = data {
                stack.extend(children);
            }
            self.free.push(id);
        }
    }

    fn push_child(&mut self, parent: NodeId, child: NodeId) {
        if let NodeData::Element { children, .. } = &mut self.nodes[parent.0] {
            children.push(child);
        }
    }

    fn build(&mut self, node: &Node) -> NodeId {
        match node {
            Node::Text(text) => self.alloc_text(text),
            Node::Element(Element {
                tag,
                attributes,
                children,
            }) => {
                let id = self.alloc_element(tag);
                if let NodeData::Element { attributes: attrs, .. } = &mut self.nodes[id.0] {
                    attrs.clone_from(attributes);
                }
                for child in children {
                    let child_id = self.build(child);
                    self.push_child(id, child_id);
                }
                id
            }
        }
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.nodes[id.0] {
            NodeData::Element { children, .. } => children.as_slice(),
            NodeData::Text(_) => &[],
        }
    }

    fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        match &self.nodes[id.0] {
            NodeData::Element {
                tag, attributes, ..
            } => selector.matches(tag, |name| {
                attributes
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| v.as_str())
            }),
            NodeData::Text(_) => false,
        }
    }

    /// Descendants of `scope` in document order (scope itself excluded).
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Tag name of an element handle.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0] {
            NodeData::Element { tag, .. } => Some(tag.as_str()),
            NodeData::Text(_) => None,
        }
    }

    /// Concatenated text of `id` and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        match &self.nodes[id.0] {
            NodeData::Text(text) => text.clone(),
            NodeData::Element { children, .. } => {
                children.iter().map(|c| self.text_content(*c)).collect()
            }
        }
    }

    /// Text content of the first element matching `selector`.
    pub fn text_of(&self, selector: &Selector) -> Option<String> {
        self.query(None, selector).map(|id| self.text_content(id))
    }

    pub fn element_count(&self, selector: &Selector) -> usize {
        self.query_all(None, selector).len()
    }

    pub fn title(&self) -> String {
        self.descendants(self.head)
            .into_iter()
            .find(|id| self.tag(*id) == Some("title"))
            .map(|id| self.text_content(id))
            .unwrap_or_default()
    }

    pub fn language(&self) -> Option<String> {
        self.attribute(&self.root, "lang")
    }

    fn class_list(&self, id: NodeId) -> Vec<String> {
        self.attribute(&id, "class")
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.class_list(id).iter().any(|c| c == class)
    }

    /// Serialize the whole document, doctype included.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>");
        self.write_html(self.root, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0] {
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Element {
                tag,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                for child in children {
                    self.write_html(*child, out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

impl Surface for Document {
    type Handle = NodeId;

    fn query(&self, scope: Option<&NodeId>, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope.copied().unwrap_or(self.root))
            .into_iter()
            .find(|id| self.matches(*id, selector))
    }

    fn query_all(&self, scope: Option<&NodeId>, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope.copied().unwrap_or(self.root))
            .into_iter()
            .filter(|id| self.matches(*id, selector))
            .collect()
    }

    fn attribute(&self, handle: &NodeId, name: &str) -> Option<String> {
        match &self.nodes[handle.0] {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
            NodeData::Text(_) => None,
        }
    }

    fn set_attribute(&mut self, handle: &NodeId, name: &str, value: &str) {
        if let NodeData::Element { attributes, .. } = &mut self.nodes[handle.0] {
            match attributes.iter_mut().find(|(n, _)| n == name) {
                Some(existing) => existing.1 = value.to_string(),
                None => attributes.push((name.to_string(), value.to_string())),
            }
        }
    }

    fn set_text(&mut self, handle: &NodeId, text: &str) {
        let nodes = if text.is_empty() {
            Vec::new()
        } else {
            vec![Node::text(text)]
        };
        self.replace_children(handle, &nodes);
    }

    fn replace_children(&mut self, handle: &NodeId, nodes: &[Node]) {
        let old = match &mut self.nodes[handle.0] {
            NodeData::Element { children, .. } => std::mem::take(children),
            NodeData::Text(_) => return,
        };
        for child in old {
            self.release(child);
        }

        let new_children: Vec<NodeId> = nodes.iter().map(|node| self.build(node)).collect();
        if let NodeData::Element { children, .. } = &mut self.nodes[handle.0] {
            *children = new_children;
        }
    }

    fn add_classes(&mut self, handle: &NodeId, classes: &[&str]) {
        let mut list = self.class_list(*handle);
        for class in classes {
            if !list.iter().any(|c| c == class) {
                list.push(class.to_string());
            }
        }
        self.set_attribute(handle, "class", &list.join(" "));
    }

    fn remove_classes(&mut self, handle: &NodeId, classes: &[&str]) {
        let list: Vec<String> = self
            .class_list(*handle)
            .into_iter()
            .filter(|c| !classes.contains(&c.as_str()))
            .collect();
        self.set_attribute(handle, "class", &list.join(" "));
    }

    fn set_title(&mut self, title: &str) {
        let existing = self
            .descendants(self.head)
            .into_iter()
            .find(|id| self.tag(*id) == Some("title"));
        let id = match existing {
            Some(id) => id,
            None => {
                let id = self.alloc_element("title");
                self.push_child(self.head, id);
                id
            }
        };
        self.set_text(&id, title);
    }

    fn set_document_language(&mut self, code: &str) {
        let root = self.root;
        self.set_attribute(&root, "lang", code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            vec![Element::new("meta")
                .attr("name", "description")
                .attr("content", "old")
                .into()],
            vec![Element::new("nav")
                .attr("data-i18n-nav", "")
                .child(Element::new("a").attr("data-nav-key", "home").text("Home"))
                .child(Element::new("a").attr("data-nav-key", "blog").text("Blog"))
                .into()],
        )
    }

    #[test]
    fn test_query_in_document_order() {
        let doc = sample();
        let links = doc.query_all(None, &Selector::attr("data-nav-key"));
        assert_eq!(links.len(), 2);
        assert_eq!(doc.text_content(links[0]), "Home");
        assert_eq!(doc.text_content(links[1]), "Blog");
    }

    #[test]
    fn test_query_scoped_excludes_scope_itself() {
        let doc = sample();
        let nav = doc.query(None, &Selector::attr("data-i18n-nav")).unwrap();
        assert!(doc.query(Some(&nav), &Selector::attr("data-i18n-nav")).is_none());
        assert!(doc
            .query(Some(&nav), &Selector::attr_eq("data-nav-key", "blog"))
            .is_some());
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut doc = sample();
        let nav = doc.query(None, &Selector::attr("data-i18n-nav")).unwrap();
        doc.set_text(&nav, "plain");
        assert_eq!(doc.text_content(nav), "plain");
        assert!(doc.query(None, &Selector::attr("data-nav-key")).is_none());
    }

    #[test]
    fn test_replace_children() {
        let mut doc = sample();
        let nav = doc.query(None, &Selector::attr("data-i18n-nav")).unwrap();
        doc.replace_children(&nav, &[Element::new("span").text("x").into(), Node::text("y")]);
        assert_eq!(doc.text_content(nav), "xy");
    }

    #[test]
    fn test_replaced_nodes_are_reused() {
        let mut doc = sample();
        let nav = doc.query(None, &Selector::attr("data-i18n-nav")).unwrap();
        let nodes = [Element::new("span").text("x").into(), Node::text("y")];

        doc.replace_children(&nav, &nodes);
        let settled = doc.arena_len();
        for _ in 0..10 {
            doc.replace_children(&nav, &nodes);
        }

        assert_eq!(doc.arena_len(), settled);
        assert_eq!(doc.text_content(nav), "xy");
    }

    #[test]
    fn test_classes() {
        let mut doc = sample();
        let home = doc.query(None, &Selector::attr_eq("data-nav-key", "home")).unwrap();
        doc.add_classes(&home, &["a", "b", "a"]);
        assert_eq!(doc.attribute(&home, "class").as_deref(), Some("a b"));
        doc.remove_classes(&home, &["a"]);
        assert!(!doc.has_class(home, "a"));
        assert!(doc.has_class(home, "b"));
    }

    #[test]
    fn test_title_and_language() {
        let mut doc = sample();
        assert_eq!(doc.title(), "");
        doc.set_title("First");
        doc.set_title("Second");
        assert_eq!(doc.title(), "Second");

        doc.set_document_language("en");
        assert_eq!(doc.language().as_deref(), Some("en"));
    }

    #[test]
    fn test_to_html_escapes_and_handles_void_elements() {
        let mut doc = sample();
        let home = doc.query(None, &Selector::attr_eq("data-nav-key", "home")).unwrap();
        doc.set_text(&home, "<Tom & \"Jerry\">");
        doc.set_attribute(&home, "title", "a\"b");

        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html><html><head>"));
        assert!(html.contains("<meta name=\"description\" content=\"old\"></head>"));
        assert!(html.contains("&lt;Tom &amp; \"Jerry\"&gt;"));
        assert!(html.contains("title=\"a&quot;b\""));
        assert!(html.ends_with("</nav></body></html>"));
    }
}
