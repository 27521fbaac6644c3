/// An inline formatting delimiter.
///
/// The set is closed: every delimiter is a single ASCII character that maps to exactly one
/// HTML element.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Delimiter {
    Bold,
    Code,
    Italic,
    Strike,
}

impl Delimiter {
    pub const ALL: [Delimiter; 4] = [
        Delimiter::Bold,
        Delimiter::Code,
        Delimiter::Italic,
        Delimiter::Strike,
    ];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(Delimiter::Bold),
            '`' => Some(Delimiter::Code),
            '_' => Some(Delimiter::Italic),
            '~' => Some(Delimiter::Strike),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Bold => '*',
            Delimiter::Code => '`',
            Delimiter::Italic => '_',
            Delimiter::Strike => '~',
        }
    }

    /// Byte length of the delimiter in the source text.
    pub fn byte_len(self) -> usize {
        self.as_char().len_utf8()
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Delimiter::Bold => "<b>",
            Delimiter::Code => "<span class=\"inline-code\">",
            Delimiter::Italic => "<i>",
            Delimiter::Strike => "<s>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Delimiter::Bold => "</b>",
            Delimiter::Code => "</span>",
            Delimiter::Italic => "</i>",
            Delimiter::Strike => "</s>",
        }
    }
}

/// Returns the tag a delimiter character produces, e.g. `b` for `*`.
pub fn tag_for(ch: char) -> Option<&'static str> {
    Delimiter::from_char(ch).map(|delimiter| match delimiter {
        Delimiter::Bold => "b",
        Delimiter::Code => "span class=\"inline-code\"",
        Delimiter::Italic => "i",
        Delimiter::Strike => "s",
    })
}
