pub mod parser;

use std::fmt;

/// Structural role of a text-bearing source element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// `h1`..`h6`, level 1..=6
    Heading(u8),
    Paragraph,
    ListItem,
    TableCell,
    /// Any other container that carries its own text
    Generic,
}

impl ElementRole {
    /// Map an HTML tag name to a role, `None` for tags that are not
    /// text-bearing on their own.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::Heading(1)),
            "h2" => Some(Self::Heading(2)),
            "h3" => Some(Self::Heading(3)),
            "h4" => Some(Self::Heading(4)),
            "h5" => Some(Self::Heading(5)),
            "h6" => Some(Self::Heading(6)),
            "p" => Some(Self::Paragraph),
            "li" => Some(Self::ListItem),
            "td" | "th" => Some(Self::TableCell),
            "div" | "section" | "article" | "blockquote" | "pre" | "figcaption" | "dd" | "dt"
            | "summary" | "caption" => Some(Self::Generic),
            _ => None,
        }
    }

    pub fn is_heading(self) -> bool {
        matches!(self, Self::Heading(_))
    }

    /// Short tag-like label used in logs and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(4) => "h4",
            Self::Heading(5) => "h5",
            Self::Heading(_) => "h6",
            Self::Paragraph => "p",
            Self::ListItem => "li",
            Self::TableCell => "td",
            Self::Generic => "div",
        }
    }
}

/// Sequential index of an element in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

impl ElementId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One text-bearing node of the rendered source document.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceElement {
    pub id: ElementId,
    pub role: ElementRole,
    pub text: String,
}

/// Immutable, document-ordered snapshot of the source panel.
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    pub url: String,
    pub title: String,
    pub elements: Vec<SourceElement>,
}

impl SourceDocument {
    /// Build a snapshot from `(role, text)` pairs; ids follow slice order.
    pub fn from_elements<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = (ElementRole, S)>,
        S: Into<String>,
    {
        let elements = items
            .into_iter()
            .enumerate()
            .map(|(i, (role, text))| SourceElement {
                id: ElementId(i),
                role,
                text: text.into(),
            })
            .collect();
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&SourceElement> {
        self.elements.get(id.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
}

/// Parsed HTML node, kept only long enough to flatten into a
/// [`SourceDocument`].
#[derive(Debug, Clone)]
pub struct DomNode {
    pub tag: String,
    pub text: String,
    pub children: Vec<DomNode>,
    pub node_type: NodeType,
}

impl DomNode {
    pub fn element(tag: impl Into<String>, children: Vec<DomNode>) -> Self {
        Self {
            tag: tag.into(),
            text: String::new(),
            children,
            node_type: NodeType::Element,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            text: content.into(),
            children: Vec::new(),
            node_type: NodeType::Text,
        }
    }

    /// Collect all descendant text, whitespace collapsed.
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        for word in self.text.split_whitespace() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(word);
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    /// Whether any direct child is a non-blank text node.
    pub fn has_own_text(&self) -> bool {
        self.children
            .iter()
            .any(|c| c.node_type == NodeType::Text && !c.text.trim().is_empty())
    }
}
