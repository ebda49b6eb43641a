// src/core/html.rs
// Thin helpers over `scraper` for pages whose structure is mostly visual:
// we read them as a stream of visible text lines, in document order.

use scraper::{Html, Node, Selector};

use super::sanitize::normalize_ws;

/// Elements whose text never renders.
const INVISIBLE: [&str; 4] = ["script", "style", "noscript", "template"];

/// Every non-blank text node of the document, whitespace-normalized, in
/// document order (the equivalent of BeautifulSoup's `stripped_strings`).
pub fn text_lines(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let mut out = Vec::new();

    for node in doc.tree.root().descendants() {
        let Node::Text(text) = node.value() else { continue };
        let hidden = node.ancestors().any(|a| match a.value() {
            Node::Element(el) => INVISIBLE.contains(&el.name()),
            _ => false,
        });
        if hidden {
            continue;
        }
        let clean = normalize_ws(text);
        if !clean.is_empty() {
            out.push(clean);
        }
    }
    out
}

/// Text of the document's `<title>`, if any.
pub fn page_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("title").ok()?;
    let title = doc.select(&sel).next()?;
    let clean = normalize_ws(&title.text().collect::<String>());
    (!clean.is_empty()).then_some(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lines_skips_scripts_and_blank_nodes() {
        let html = r#"
            <html><head><title>T</title><script>var x = "hidden";</script></head>
            <body>
              <h2>Best   Picture</h2>
              <div><span>Winner</span>
                   <p>Wings</p></div>
              <style>.a { color: red }</style>
            </body></html>"#;
        assert_eq!(text_lines(html), vec!["T", "Best Picture", "Winner", "Wings"]);
    }

    #[test]
    fn entities_are_decoded() {
        let lines = text_lines("<p>Winners &amp; Nominees</p><p>A&nbsp;B</p>");
        assert_eq!(lines, vec!["Winners & Nominees", "A B"]);
    }

    #[test]
    fn page_title_reads_title_text() {
        assert_eq!(page_title("<title> 404 | Not Found </title>").as_deref(), Some("404 | Not Found"));
        assert_eq!(page_title("<p>no title</p>"), None);
    }
}
