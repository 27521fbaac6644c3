use crate::inline::format_inline;

const QUOTE_MARKER: char = '>';
const QUOTE_PREFIX_CHARS: usize = 2;

/// Renders a whole chat message into an HTML fragment.
///
/// Consecutive lines starting with `>` share one `<blockquote>`; their formatted contents are
/// concatenated with no separator. Every other non-blank line becomes a `<p>`. Blank lines emit
/// nothing but end a running quote.
pub fn render(source: &str) -> String {
    let mut writer = BlockWriter::new(source.len());
    for line in split_lines(source) {
        if line.starts_with(QUOTE_MARKER) {
            writer.open_quote();
            writer.out.push_str(&format_inline(quote_content(line)));
            continue;
        }

        writer.close_quote();
        if !line.trim().is_empty() {
            writer.paragraph(&format_inline(line));
        }
    }
    writer.finish()
}

struct BlockWriter {
    out: String,
    in_quote: bool,
}

impl BlockWriter {
    fn new(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity + capacity / 4),
            in_quote: false,
        }
    }

    fn open_quote(&mut self) {
        if !self.in_quote {
            self.out.push_str("<blockquote>");
            self.in_quote = true;
        }
    }

    fn close_quote(&mut self) {
        if self.in_quote {
            self.out.push_str("</blockquote>");
            self.in_quote = false;
        }
    }

    fn paragraph(&mut self, html: &str) {
        self.out.push_str("<p>");
        self.out.push_str(html);
        self.out.push_str("</p>");
    }

    fn finish(mut self) -> String {
        self.close_quote();
        self.out
    }
}

fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
}

/// Drops the fixed two-character quote prefix (`> `), clamping when the line is shorter.
fn quote_content(line: &str) -> &str {
    let start = line
        .char_indices()
        .nth(QUOTE_PREFIX_CHARS)
        .map_or(line.len(), |(idx, _)| idx);
    &line[start..]
}

#[cfg(test)]
mod tests {
    use super::{quote_content, render};

    #[test]
    fn wraps_lines_in_paragraphs() {
        assert_eq!(render("hello\nworld"), "<p>hello</p><p>world</p>");
    }

    #[test]
    fn blank_lines_emit_nothing() {
        assert_eq!(render("a\n\n   \nb"), "<p>a</p><p>b</p>");
        assert_eq!(render(""), "");
        assert_eq!(render("\n\n"), "");
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(render("one\r\ntwo\r\n"), "<p>one</p><p>two</p>");
        assert_eq!(render("a\r\r\nb"), "<p>a</p><p>b</p>");
        assert_eq!(render("> q\r\r\r"), "<blockquote>q</blockquote>");
    }

    #[test]
    fn groups_consecutive_quote_lines() {
        assert_eq!(
            render("> line one\n> line two\nplain"),
            "<blockquote>line oneline two</blockquote><p>plain</p>"
        );
    }

    #[test]
    fn blank_line_ends_quote() {
        assert_eq!(
            render("> a\n\n> b"),
            "<blockquote>a</blockquote><blockquote>b</blockquote>"
        );
    }

    #[test]
    fn quote_at_end_is_closed() {
        assert_eq!(render("hi\n> *there*"), "<p>hi</p><blockquote><b>there</b></blockquote>");
    }

    #[test]
    fn bare_quote_marker_has_empty_content() {
        assert_eq!(render(">"), "<blockquote></blockquote>");
        assert_eq!(render(">\n> x"), "<blockquote>x</blockquote>");
    }

    #[test]
    fn quote_prefix_is_char_aware() {
        assert_eq!(quote_content("> x"), "x");
        assert_eq!(quote_content(">"), "");
        assert_eq!(quote_content(">é rest"), " rest");
        assert_eq!(quote_content(">  indented"), " indented");
    }

    #[test]
    fn indented_marker_is_not_a_quote() {
        assert_eq!(render(" > x"), "<p> &gt; x</p>");
    }

    #[test]
    fn formatting_does_not_cross_lines() {
        assert_eq!(render("*a\nb*"), "<p>*a</p><p>b*</p>");
    }
}
