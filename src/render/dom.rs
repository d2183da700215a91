//! Minimal owned HTML tree.
//!
//! Just enough DOM for the renderer: element nodes with a few attributes,
//! text nodes, append/prepend child insertion, and escaped serialization.

use std::fmt::Write as _;

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        Node::Element(element)
    }
}

/// An element node: tag, attributes in insertion order, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Element {
        Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Element {
        self.set_attr(name, value.into());
        self
    }

    /// Shorthand for the `class` attribute.
    pub fn class(self, value: impl Into<String>) -> Element {
        self.attr("class", value)
    }

    /// Append a child text node.
    pub fn text(mut self, value: impl Into<String>) -> Element {
        self.append_text(value);
        self
    }

    pub fn set_attr(&mut self, name: &'static str, value: String) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Add a class to the `class` attribute, keeping existing ones.
    pub fn add_class(&mut self, class: &str) {
        match self.attrs.iter_mut().find(|(n, _)| *n == "class") {
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.attrs.push(("class", class.to_string())),
        }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn append_text(&mut self, value: impl Into<String>) {
        self.children.push(Node::Text(value.into()));
    }

    /// Insert a node before the current first child.
    pub fn insert_first(&mut self, node: impl Into<Node>) {
        self.children.insert(0, node.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_attrs_and_children() {
        let mut li = Element::new("li");
        li.append_text("see ");
        li.append(
            Element::new("a")
                .class("rfc")
                .attr("href", "https://example.com/x")
                .text("RFC 1"),
        );
        assert_eq!(
            li.to_html(),
            "<li>see <a class=\"rfc\" href=\"https://example.com/x\">RFC 1</a></li>"
        );
    }

    #[test]
    fn test_insert_first_prepends() {
        let mut list = Element::new("ul");
        list.insert_first(Element::new("li").text("first"));
        list.insert_first(Element::new("li").text("second"));
        assert_eq!(list.to_html(), "<ul><li>second</li><li>first</li></ul>");
    }

    #[test]
    fn test_add_class_extends_existing() {
        let mut link = Element::new("a").class("rfc");
        link.add_class("merged");
        assert_eq!(link.to_html(), "<a class=\"rfc merged\"></a>");
    }

    #[test]
    fn test_escapes_text_and_attrs() {
        let span = Element::new("span")
            .attr("title", "a \"b\" <c>")
            .text("x < y & z");
        assert_eq!(
            span.to_html(),
            "<span title=\"a &quot;b&quot; &lt;c&gt;\">x &lt; y &amp; z</span>"
        );
    }
}
