/// A single physical input line, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Heading {
        /// Length of the leading `#` token; not clamped to 6.
        level: usize,
        content: &'a str,
    },
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    /// Raw, untrimmed line.
    Text(&'a str),
}

/// Inline text spans with formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    Bold(&'a str),
}

/// Top-level block that stays open across lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenBlock {
    Paragraph,
    UnorderedList,
    OrderedList,
}

impl OpenBlock {
    pub fn open_tag(self) -> &'static str {
        match self {
            OpenBlock::Paragraph => "<p>",
            OpenBlock::UnorderedList => "<ul>",
            OpenBlock::OrderedList => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            OpenBlock::Paragraph => "</p>",
            OpenBlock::UnorderedList => "</ul>",
            OpenBlock::OrderedList => "</ol>",
        }
    }

    pub fn is_list(self) -> bool {
        matches!(self, OpenBlock::UnorderedList | OpenBlock::OrderedList)
    }
}
