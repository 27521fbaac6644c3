use ammonia::Builder;
use std::collections::{HashMap, HashSet};

use crate::options::{RenderOptions, render_with_options};

/// Renders a message and passes the result through an allow-list that only admits the
/// elements chatmark itself produces. The default input length limit applies.
pub fn render_sanitized(source: &str) -> String {
    let options = RenderOptions {
        sanitize: true,
        ..RenderOptions::default()
    };
    render_with_options(source, &options).html
}

pub(crate) fn sanitize_fragment(html: &str) -> String {
    let tags: HashSet<&'static str> = ["p", "blockquote", "b", "i", "s", "span"]
        .iter()
        .copied()
        .collect();

    let mut allowed_classes = HashMap::new();
    allowed_classes.insert("span", ["inline-code"].iter().copied().collect());

    Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::new())
        .allowed_classes(allowed_classes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_sanitized, sanitize_fragment};
    use crate::options::DEFAULT_MAX_INPUT_LEN;

    #[test]
    fn keeps_chatmark_markup() {
        assert_eq!(
            render_sanitized("> *quoted*\n`code` and _it_ and ~gone~"),
            "<blockquote><b>quoted</b></blockquote><p><span class=\"inline-code\">code</span> and _it_ and ~gone~</p>"
        );
    }

    #[test]
    fn escaped_text_stays_escaped() {
        assert_eq!(
            render_sanitized("<img src=x onerror=alert(1)>"),
            "<p>&lt;img src=x onerror=alert(1)&gt;</p>"
        );
    }

    #[test]
    fn strips_foreign_markup() {
        let cleaned = sanitize_fragment(
            "<p onclick=\"x()\">hi<script>bad()</script></p><span class=\"evil inline-code\">c</span>",
        );
        assert_eq!(
            cleaned,
            "<p>hi</p><span class=\"inline-code\">c</span>"
        );
    }

    #[test]
    fn oversized_input_is_limited() {
        let source = format!("_{}_", "y".repeat(DEFAULT_MAX_INPUT_LEN));
        let html = render_sanitized(&source);
        assert!(!html.contains("<i>"));
        assert_eq!(html.len(), "<p></p>".len() + DEFAULT_MAX_INPUT_LEN);
    }
}
