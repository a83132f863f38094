//! Normalization template wrapped around caller HTML.

/// Wrap `html` in a document with a stable baseline: border-box sizing,
/// zero body margin, fixed padding, system fonts, and hidden scripts.
pub fn wrap_document(html: &str, body_padding_px: u32) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>
      * {{
        box-sizing: border-box !important;
        -webkit-font-smoothing: antialiased !important;
        -moz-osx-font-smoothing: grayscale !important;
      }}
      body {{
        margin: 0 !important;
        padding: {body_padding_px}px !important;
        font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif !important;
        line-height: 1.5 !important;
      }}
      img {{
        max-width: 100%;
        height: auto;
      }}
      script, noscript {{
        display: none !important;
      }}
    </style>
  </head>
  <body>
{html}
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_fragment_in_body() {
        let doc = wrap_document("<p>Hello</p>", 20);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        let body_start = doc.find("<body>").unwrap();
        let body_end = doc.find("</body>").unwrap();
        assert!(doc[body_start..body_end].contains("<p>Hello</p>"));
    }

    #[test]
    fn test_baseline_rules() {
        let doc = wrap_document("", 20);
        assert!(doc.contains("box-sizing: border-box !important"));
        assert!(doc.contains("margin: 0 !important"));
        assert!(doc.contains("padding: 20px !important"));
        assert!(doc.contains("line-height: 1.5 !important"));
        assert!(doc.contains("script, noscript"));
        assert!(doc.contains(r#"<meta charset="UTF-8">"#));
    }

    #[test]
    fn test_padding_configurable() {
        assert!(wrap_document("", 0).contains("padding: 0px !important"));
    }

    #[test]
    fn test_braces_in_content_untouched() {
        let doc = wrap_document("<style>p { color: red }</style>", 20);
        assert!(doc.contains("p { color: red }"));
    }
}
