use crate::dom::{DomNode, ElementId, ElementRole, NodeType, SourceDocument, SourceElement};
use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose children should be stripped (invisible/script content)
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg", "template"];

/// Parse raw HTML into a source snapshot.
///
/// When `panel` names a CSS selector, only the first matching subtree is
/// flattened; if the selector is invalid, matches nothing, or the panel has no
/// text-bearing elements, the whole document is scanned instead.
pub fn parse_source(html: &str, url: &str, panel: Option<&str>) -> SourceDocument {
    let document = Html::parse_document(html);
    let title = extract_title(&document);

    let mut elements = Vec::new();
    if let Some(selector) = panel {
        match Selector::parse(selector) {
            Ok(sel) => {
                if let Some(panel_root) = document.select(&sel).next() {
                    flatten(&convert_element(panel_root), &mut elements);
                }
                if elements.is_empty() {
                    log::debug!("Panel {:?} yielded no elements, scanning whole document", selector);
                }
            }
            Err(_) => log::warn!("Invalid panel selector {:?}, scanning whole document", selector),
        }
    }
    if elements.is_empty() {
        flatten(&convert_element(document.root_element()), &mut elements);
    }

    log::debug!("Source snapshot: {} text-bearing elements from {}", elements.len(), url);

    SourceDocument {
        url: url.to_string(),
        title,
        elements,
    }
}

fn flatten(node: &DomNode, out: &mut Vec<SourceElement>) {
    if node.node_type == NodeType::Element {
        if let Some(role) = ElementRole::from_tag(&node.tag) {
            // generic containers only count when they carry text of their own
            if role != ElementRole::Generic || node.has_own_text() {
                let text = node.collect_text();
                if !text.is_empty() {
                    out.push(SourceElement {
                        id: ElementId(out.len()),
                        role,
                        text,
                    });
                }
            }
        }
    }
    for child in &node.children {
        flatten(child, out);
    }
}

fn extract_title(document: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn convert_element(el: ElementRef<'_>) -> DomNode {
    let tag = el.value().name.local.as_ref().to_string();

    // Skip children of invisible elements
    if SKIP_CHILDREN.contains(&tag.as_str()) {
        return DomNode::element(tag, Vec::new());
    }

    let mut children = Vec::new();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el));
                }
            }
            Node::Text(t) => {
                let s = t.text.to_string();
                if !s.trim().is_empty() {
                    children.push(DomNode::text(s));
                }
            }
            _ => {}
        }
    }

    DomNode::element(tag, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
            <head><title> Test Page </title></head>
            <body>
                <nav><p>Site menu entry</p></nav>
                <article id="source">
                    <h1>Introduction</h1>
                    <p>Some <em>emphasised</em> text</p>
                    <ul><li>First point</li><li>  </li></ul>
                    <div>Loose container text</div>
                    <div><p>Wrapped paragraph</p></div>
                    <table><tr><td>Cell value</td></tr></table>
                    <script>var hidden = "alert";</script>
                </article>
            </body>
        </html>
    "#;

    #[test]
    fn title_comes_from_head() {
        let doc = parse_source(PAGE, "https://example.com", Some("#source"));
        assert_eq!(doc.title, "Test Page");
        assert_eq!(doc.url, "https://example.com");
    }

    #[test]
    fn flattens_panel_in_document_order() {
        let doc = parse_source(PAGE, "https://example.com", Some("#source"));
        let summary: Vec<(ElementRole, &str)> =
            doc.elements.iter().map(|e| (e.role, e.text.as_str())).collect();
        assert_eq!(
            summary,
            vec![
                (ElementRole::Heading(1), "Introduction"),
                (ElementRole::Paragraph, "Some emphasised text"),
                (ElementRole::ListItem, "First point"),
                (ElementRole::Generic, "Loose container text"),
                (ElementRole::Paragraph, "Wrapped paragraph"),
                (ElementRole::TableCell, "Cell value"),
            ]
        );
        for (i, e) in doc.elements.iter().enumerate() {
            assert_eq!(e.id, ElementId(i));
        }
    }

    #[test]
    fn missing_panel_falls_back_to_document() {
        let doc = parse_source(PAGE, "https://example.com", Some("#does-not-exist"));
        assert_eq!(doc.elements[0].text, "Site menu entry");
        assert!(doc.elements.iter().all(|e| !e.text.contains("alert")));
    }

    #[test]
    fn invalid_selector_falls_back_to_document() {
        let doc = parse_source(PAGE, "https://example.com", Some("<<<"));
        assert_eq!(doc.len(), 7);
    }
}
