use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Markup parsing backend, selected by name from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Html5ever,
}

impl Backend {
    pub fn from_name(name: &str) -> Option<Backend> {
        match name {
            "html5ever" => Some(Backend::Html5ever),
            _ => None,
        }
    }

    pub fn parse(self, html: &str) -> Dom {
        match self {
            Backend::Html5ever => Dom::parse(html),
        }
    }
}

/// A parsed document with the class/tag queries the extractor needs.
pub struct Dom {
    document: Handle,
}

impl Dom {
    pub fn parse(html: &str) -> Dom {
        let dom: RcDom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .one(html.as_bytes());
        Dom {
            document: dom.document,
        }
    }

    /// All elements carrying `class`, in document order.
    pub fn find_all_class(&self, class: &str) -> Vec<Handle> {
        find_all_class(&self.document, class)
    }

    pub fn find_class(&self, class: &str) -> Option<Handle> {
        find_all_class(&self.document, class).into_iter().next()
    }

    /// First element with the given tag name, in document order.
    pub fn find_tag(&self, tag: &str) -> Option<Handle> {
        let mut found = None;
        walk(&self.document, &mut |node| {
            if found.is_none() && tag_name(node) == Some(tag) {
                found = Some(node.clone());
            }
        });
        found
    }
}

/// Descendants of `root` (excluding `root` itself) carrying `class`.
pub fn find_all_class(root: &Handle, class: &str) -> Vec<Handle> {
    let mut out = Vec::new();
    walk(root, &mut |node| {
        if classes(node).iter().any(|c| c == class) {
            out.push(node.clone());
        }
    });
    out
}

pub fn find_class(root: &Handle, class: &str) -> Option<Handle> {
    find_all_class(root, class).into_iter().next()
}

/// The element's class attribute split into tokens; empty for non-elements.
pub fn classes(node: &Handle) -> Vec<String> {
    if let NodeData::Element { ref attrs, .. } = node.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == "class" {
                return attr
                    .value
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
            }
        }
    }
    Vec::new()
}

/// Concatenated text of all text descendants.
pub fn text(node: &Handle) -> String {
    let mut out = String::new();
    append_text(node, &mut out);
    out
}

fn append_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        append_text(child, out);
    }
}

fn tag_name(node: &Handle) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

fn walk(node: &Handle, visit: &mut impl FnMut(&Handle)) {
    for child in node.children.borrow().iter() {
        visit(child);
        walk(child, visit);
    }
}
