//! HTML text harvesting.
//!
//! Helpers that pull the pieces of a page the extractor cares about out of
//! raw HTML: the title, anchor texts, and visible body text. Visible text
//! excludes the contents of `<script>` and `<style>` elements; comments are
//! never text nodes, so they fall out for free.

use scraper::{Html, Selector};

/// Extract the page title, or the `"None"` placeholder when the document
/// has no `<title>` element.
pub fn page_title(html: &str) -> String {
    let doc = Html::parse_document(html);
    let sel = match Selector::parse("title") {
        Ok(s) => s,
        Err(_) => return "None".to_string(),
    };

    doc.select(&sel)
        .next()
        .map(|title| title.text().collect::<String>())
        .unwrap_or_else(|| "None".to_string())
}

/// Extract the trimmed text of every anchor in the body, dropping empty
/// strings.
pub fn link_texts(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = match Selector::parse("body a") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    doc.select(&sel)
        .map(|link| link.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty() && text != "None")
        .collect()
}

/// Extract every visible text node of the body, in document order, without
/// trimming whitespace. Text under `<script>` and `<style>` is skipped.
pub fn visible_text(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = match Selector::parse("body") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let Some(body) = doc.select(&sel).next() else {
        return Vec::new();
    };

    let mut units = Vec::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let parent_is_invisible = node
            .parent()
            .and_then(|p| p.value().as_element())
            .is_some_and(|e| matches!(e.name(), "script" | "style"));
        if parent_is_invisible {
            continue;
        }
        units.push(text.to_string());
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
          <head>
            <title>Example Domain</title>
            <style>body { color: red; }</style>
          </head>
          <body>
            <h1>Welcome</h1>
            <p>Some <a href="/a">first link</a> text.</p>
            <a href="/b">  second link  </a>
            <a href="/c"></a>
            <script>var hidden = 1;</script>
            <!-- a comment -->
          </body>
        </html>
    "#;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title(PAGE), "Example Domain");
    }

    #[test]
    fn test_missing_title_placeholder() {
        assert_eq!(page_title("<html><body>no title</body></html>"), "None");
    }

    #[test]
    fn test_link_texts() {
        let links = link_texts(PAGE);
        assert_eq!(links, vec!["first link", "second link"]);
    }

    #[test]
    fn test_visible_text_excludes_script_and_style() {
        let joined = visible_text(PAGE).join(" ");

        assert!(joined.contains("Welcome"));
        assert!(joined.contains("Some"));
        assert!(!joined.contains("var hidden"));
        assert!(!joined.contains("color: red"));
        assert!(!joined.contains("a comment"));
    }

    #[test]
    fn test_visible_text_preserves_whitespace() {
        let units = visible_text("<html><body><p>  padded  </p></body></html>");
        assert!(units.iter().any(|u| u == "  padded  "));
    }
}
