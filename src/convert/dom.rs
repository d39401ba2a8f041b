//! DOM normalization ahead of the text substitutions.
//!
//! The editor encodes checkbox state as an attribute on the list
//! (`<ul data-checked="true">`), which a flat text substitution cannot
//! see from inside an `<li>`. This pass parses the HTML, prefixes every
//! item of a checkbox list with a literal `[x] ` / `[ ] ` marker, and
//! serializes the document body back to HTML the way `innerHTML` would:
//! lowercase tags, double-quoted attributes, escaped text, void elements
//! left unclosed. The substitution rules then run over that string.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Table sections the parser inserts around rows. They are not part of
/// the editor dialect, so they are skipped and their children serialized
/// directly under the table.
const TABLE_SECTIONS: &[&str] = &["tbody", "thead", "tfoot"];

/// Parse `html`, fold checkbox-list state into item text, and serialize
/// the body's children back to an HTML string.
pub(super) fn normalize(html: &str) -> String {
    let doc = Html::parse_document(html);
    let Some(body) = find_body(&doc) else {
        return String::new();
    };
    let mut serializer = Serializer {
        out: String::with_capacity(html.len() + 16),
        checklists: Vec::new(),
    };
    for child in body.children() {
        serializer.write_node(child);
    }
    serializer.out
}

fn find_body(doc: &Html) -> Option<ElementRef<'_>> {
    doc.root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "body")
}

struct Serializer {
    out: String,
    /// Checked state of every enclosing `ul[data-checked]`, outermost first.
    checklists: Vec<bool>,
}

impl Serializer {
    fn write_node(&mut self, node: NodeRef<'_, Node>) {
        match node.value() {
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node) {
                    self.write_element(element);
                }
            }
            Node::Text(text) => self.write_text(text),
            _ => {}
        }
    }

    fn write_element(&mut self, element: ElementRef<'_>) {
        let name = element.value().name();
        if TABLE_SECTIONS.contains(&name) {
            for child in element.children() {
                self.write_node(child);
            }
            return;
        }

        self.out.push('<');
        self.out.push_str(name);
        for (attr, value) in element.value().attrs() {
            self.out.push(' ');
            self.out.push_str(attr);
            self.out.push_str("=\"");
            write_attr_value(&mut self.out, value);
            self.out.push('"');
        }
        self.out.push('>');

        if VOID_ELEMENTS.contains(&name) {
            return;
        }

        // A descendant li gets one marker per enclosing checkbox list,
        // innermost first. Nested lists are outside the editor dialect;
        // this keeps the flat marker-per-list behavior for them.
        let checklist = (name == "ul")
            .then(|| element.value().attr("data-checked").map(|v| v == "true"))
            .flatten();
        if let Some(checked) = checklist {
            self.checklists.push(checked);
        }
        if name == "li" {
            for &checked in self.checklists.iter().rev() {
                self.out.push_str(if checked { "[x] " } else { "[ ] " });
            }
        }

        for child in element.children() {
            self.write_node(child);
        }

        if checklist.is_some() {
            self.checklists.pop();
        }

        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }

    fn write_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '&' => self.out.push_str("&amp;"),
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                _ => self.out.push(ch),
            }
        }
    }
}

fn write_attr_value(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- round-tripping the dialect ---

    #[test]
    fn test_plain_paragraph_round_trips() {
        assert_eq!(normalize("<p>hello</p>"), "<p>hello</p>");
    }

    #[test]
    fn test_inline_markup_round_trips() {
        let html = "<p><strong>a</strong><em>b</em><u>c</u><s>d</s></p>";
        assert_eq!(normalize(html), html);
    }

    #[test]
    fn test_br_is_not_closed() {
        assert_eq!(normalize("<p>a<br>b</p>"), "<p>a<br>b</p>");
    }

    #[test]
    fn test_self_closing_br_normalizes_to_plain_br() {
        assert_eq!(normalize("<p>a<br/>b</p>"), "<p>a<br>b</p>");
    }

    #[test]
    fn test_attributes_are_double_quoted() {
        assert_eq!(
            normalize("<a href='https://e.x'>E</a>"),
            r#"<a href="https://e.x">E</a>"#
        );
    }

    #[test]
    fn test_empty_input_serializes_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_bare_text_round_trips() {
        assert_eq!(normalize("just text"), "just text");
    }

    // --- checkbox marker injection ---

    #[test]
    fn test_checked_list_items_get_x_markers() {
        let html = r#"<ul data-checked="true"><li>A</li><li>B</li></ul>"#;
        assert_eq!(
            normalize(html),
            r#"<ul data-checked="true"><li>[x] A</li><li>[x] B</li></ul>"#
        );
    }

    #[test]
    fn test_unchecked_list_items_get_blank_markers() {
        let html = r#"<ul data-checked="false"><li>A</li></ul>"#;
        assert_eq!(
            normalize(html),
            r#"<ul data-checked="false"><li>[ ] A</li></ul>"#
        );
    }

    #[test]
    fn test_non_true_checked_value_counts_as_unchecked() {
        let html = r#"<ul data-checked=""><li>A</li></ul>"#;
        assert_eq!(normalize(html), r#"<ul data-checked=""><li>[ ] A</li></ul>"#);
    }

    #[test]
    fn test_plain_list_gets_no_markers() {
        let html = "<ul><li>A</li></ul>";
        assert_eq!(normalize(html), "<ul><li>A</li></ul>");
    }

    #[test]
    fn test_ordered_list_ignores_checked_attribute() {
        // Only ul carries checkbox state in the editor dialect.
        let html = r#"<ol data-checked="true"><li>A</li></ol>"#;
        assert_eq!(normalize(html), r#"<ol data-checked="true"><li>A</li></ol>"#);
    }

    #[test]
    fn test_marker_lands_before_inline_markup() {
        let html = r#"<ul data-checked="true"><li><strong>A</strong></li></ul>"#;
        assert_eq!(
            normalize(html),
            r#"<ul data-checked="true"><li>[x] <strong>A</strong></li></ul>"#
        );
    }

    #[test]
    fn test_nested_checklists_stack_markers_innermost_first() {
        let html = r#"<ul data-checked="true"><li>outer<ul data-checked="false"><li>inner</li></ul></li></ul>"#;
        let out = normalize(html);
        assert!(out.contains("<li>[x] outer"));
        assert!(out.contains("<li>[ ] [x] inner"));
    }

    // --- escaping ---

    #[test]
    fn test_text_is_reescaped() {
        assert_eq!(normalize("<p>a &amp; b</p>"), "<p>a &amp; b</p>");
        assert_eq!(normalize("<p>1 &lt; 2</p>"), "<p>1 &lt; 2</p>");
    }

    #[test]
    fn test_raw_ampersand_is_escaped() {
        assert_eq!(normalize("<p>a & b</p>"), "<p>a &amp; b</p>");
    }

    #[test]
    fn test_attr_quotes_are_escaped() {
        let out = normalize(r#"<img src="a&quot;b.png">"#);
        assert_eq!(out, r#"<img src="a&quot;b.png">"#);
    }

    // --- parser-inserted structure ---

    #[test]
    fn test_tbody_is_not_reemitted() {
        let html = "<table><tr><td>1</td></tr></table>";
        assert_eq!(normalize(html), "<table><tr><td>1</td></tr></table>");
    }

    #[test]
    fn test_explicit_thead_is_dropped_but_rows_kept() {
        let html = "<table><thead><tr><th>H</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>";
        assert_eq!(
            normalize(html),
            "<table><tr><th>H</th></tr><tr><td>1</td></tr></table>"
        );
    }

    #[test]
    fn test_head_content_is_ignored() {
        let html = "<html><head><title>t</title></head><body><p>x</p></body></html>";
        assert_eq!(normalize(html), "<p>x</p>");
    }
}
