//! Minimal document tree.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Boolean attribute such as `required` or `disabled`.
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Pre-order walk over this node's elements, itself included.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }

    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|element| element.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|element| element.tag == tag)
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            for child in &element.children {
                collect_text(child, out);
            }
        }
    }
}

fn collect_elements<'a>(node: &'a Node, out: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node {
        out.push(element);
        for child in &element.children {
            collect_elements(child, out);
        }
    }
}

/// Query helpers over a list of sibling nodes, e.g. a container's contents.
pub fn find_all<'a>(nodes: &'a [Node], predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    nodes
        .iter()
        .flat_map(|node| node.elements())
        .filter(|element| predicate(element))
        .collect()
}

pub fn find_by_class<'a>(nodes: &'a [Node], class: &str) -> Vec<&'a Element> {
    find_all(nodes, |element| element.has_class(class))
}

pub fn text_content(nodes: &[Node]) -> String {
    nodes.iter().map(Node::text_content).collect()
}
