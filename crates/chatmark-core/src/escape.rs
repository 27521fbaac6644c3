/// Escapes text for use as HTML character data.
///
/// Quotes use the numeric forms (`&#34;`, `&#39;`) so the output is also safe inside
/// attribute values. Escaping works per character, so escaping two strings separately
/// and concatenating gives the same result as escaping their concatenation.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
