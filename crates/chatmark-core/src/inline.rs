use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::delimiter::Delimiter;
use crate::escape::push_escaped;

/// Formats a single line of chat markup into an HTML fragment.
///
/// At most one span is produced per line. The first delimiter that is not embedded in a word
/// opens it; the span closes at the *last* later occurrence of the same delimiter. Delimiters of
/// any other kind seen while a span is open are plain text. Unmatched delimiters, and spans whose
/// content is blank, fall back to the escaped source text.
pub fn format_inline(line: &str) -> String {
    let mut scanner = InlineScanner::new(line.len());
    let mut chars = line.chars().peekable();
    let mut prev = None;
    while let Some(ch) = chars.next() {
        scanner.feed(prev, ch, chars.peek().copied());
        prev = Some(ch);
    }
    scanner.finish()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SpanState {
    Idle,
    Open {
        delimiter: Delimiter,
        /// Offset of the opening delimiter in the pending buffer.
        open: usize,
        /// Offset of the most recent matching delimiter, if any.
        close: Option<usize>,
    },
}

struct InlineScanner {
    out: String,
    pending: String,
    state: SpanState,
}

impl InlineScanner {
    fn new(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            pending: String::new(),
            state: SpanState::Idle,
        }
    }

    fn feed(&mut self, prev: Option<char>, ch: char, next: Option<char>) {
        let delimiter = match Delimiter::from_char(ch) {
            Some(delimiter) if !(is_word(prev) && is_word(next)) => delimiter,
            _ => {
                self.pending.push(ch);
                return;
            }
        };

        self.state = match self.state {
            SpanState::Idle => {
                push_escaped(&mut self.out, &self.pending);
                self.pending.clear();
                let open = self.pending.len();
                self.pending.push(ch);
                SpanState::Open {
                    delimiter,
                    open,
                    close: None,
                }
            }
            SpanState::Open {
                delimiter: active,
                open,
                ..
            } if active == delimiter => {
                let close = self.pending.len();
                self.pending.push(ch);
                SpanState::Open {
                    delimiter: active,
                    open,
                    close: Some(close),
                }
            }
            state => {
                self.pending.push(ch);
                state
            }
        };
    }

    fn finish(mut self) -> String {
        if let Some((delimiter, open, close)) = self.resolved_span() {
            let content_start = open + delimiter.byte_len();
            push_escaped(&mut self.out, &self.pending[..open]);
            self.out.push_str(delimiter.open_tag());
            push_escaped(&mut self.out, &self.pending[content_start..close]);
            self.out.push_str(delimiter.close_tag());
            push_escaped(&mut self.out, &self.pending[close + delimiter.byte_len()..]);
        } else {
            push_escaped(&mut self.out, &self.pending);
        }
        self.out
    }

    fn resolved_span(&self) -> Option<(Delimiter, usize, usize)> {
        let SpanState::Open {
            delimiter,
            open,
            close: Some(close),
        } = self.state
        else {
            return None;
        };
        if close <= open {
            return None;
        }
        let content = self.pending.get(open + delimiter.byte_len()..close)?;
        if content.trim().is_empty() {
            return None;
        }
        Some((delimiter, open, close))
    }
}

/// Letters (`L*`) and decimal digits (`Nd`). Marks, superscripts and other numerics are not
/// word characters.
fn is_word(ch: Option<char>) -> bool {
    ch.is_some_and(|ch| {
        ch.general_category_group() == GeneralCategoryGroup::Letter
            || ch.general_category() == GeneralCategory::DecimalNumber
    })
}
