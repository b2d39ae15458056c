use crate::tree::{Element, Node};

const VOID_ELEMENTS: [&str; 6] = ["input", "br", "hr", "img", "meta", "link"];
const BLOCK_ELEMENTS: [&str; 14] = [
    "div", "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "li", "form", "section", "textarea",
    "button",
];

/// Turns a view tree into an output document.
pub trait RenderBackend {
    fn render(&self, nodes: &[Node]) -> String;

    fn render_node(&self, node: &Node) -> String {
        self.render(std::slice::from_ref(node))
    }
}

/// Emits HTML with escaped text and attribute values.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl RenderBackend for HtmlRenderer {
    fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            write_html(node, &mut out);
        }
        out
    }
}

impl HtmlRenderer {
    /// Standalone page around `body`.
    pub fn document(&self, title: &str, body: &[Node]) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<link rel=\"stylesheet\" href=\"{STYLESHEET}\">\n\
             <link rel=\"stylesheet\" href=\"{ICONS}\">\n</head>\n\
             <body>\n<main class=\"container py-4\">{}</main>\n</body>\n</html>\n",
            escape_text(title),
            self.render(body)
        )
    }
}

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
const ICONS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.10.5/font/bootstrap-icons.css";

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => {
            out.push('<');
            out.push_str(element.tag);
            for (name, value) in &element.attrs {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&element.tag) {
                return;
            }
            for child in &element.children {
                write_html(child, out);
            }
            out.push_str("</");
            out.push_str(element.tag);
            out.push('>');
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Plain-text rendering for terminals: one line per block, list items
/// bulleted, links followed by their target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl RenderBackend for TextRenderer {
    fn render(&self, nodes: &[Node]) -> String {
        let mut raw = String::new();
        for node in nodes {
            write_text(node, &mut raw);
        }
        raw.lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn write_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.replace('\n', " ")),
        Node::Element(element) => {
            if is_hidden(element) {
                return;
            }
            let block = BLOCK_ELEMENTS.contains(&element.tag);
            if block {
                out.push('\n');
            }
            match element.tag {
                "li" => out.push_str("- "),
                "input" if element.get_attr("type") == Some("radio") => out.push_str("( ) "),
                "textarea" => out.push_str("[ text ] "),
                _ => {}
            }
            for child in &element.children {
                write_text(child, out);
            }
            if element.tag == "a" {
                if let Some(href) = element.get_attr("href") {
                    out.push_str(&format!(" <{href}>"));
                }
            }
            if element.has_class("badge") || element.tag == "span" {
                out.push(' ');
            }
            if block {
                out.push('\n');
            }
        }
    }
}

fn is_hidden(element: &Element) -> bool {
    element
        .get_attr("style")
        .is_some_and(|style| style.replace(' ', "").contains("display:none"))
}
