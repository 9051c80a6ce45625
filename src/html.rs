use crate::block::{Line, OpenBlock, Span};
use crate::config::Config;
use crate::parser::parse_inline;

/// Convert classified lines to HTML
pub fn lines_to_html(lines: &[Line], config: &Config) -> String {
    let mut emitter = Emitter::default();

    for &line in lines {
        emitter.emit_line(line, config);
    }

    emitter.finish(config)
}

/// Block state machine. At most one block is open at a time.
#[derive(Default)]
struct Emitter {
    open: Option<OpenBlock>,
    out: Vec<String>,
}

impl Emitter {
    fn emit_line(&mut self, line: Line<'_>, config: &Config) {
        match line {
            Line::Blank => {
                // Blank lines end paragraphs but never lists
                self.close_paragraph();
            }
            Line::Heading { level, content } => {
                if config.headings.close_open_lists {
                    self.close();
                } else {
                    self.close_paragraph();
                }
                self.out
                    .push(format!("<h{level}>{}</h{level}>", spans_to_html(content)));
            }
            Line::UnorderedItem(content) => {
                self.enter(OpenBlock::UnorderedList);
                self.out.push(format!("<li>{}</li>", spans_to_html(content)));
            }
            Line::OrderedItem(content) => {
                self.enter(OpenBlock::OrderedList);
                self.out.push(format!("<li>{}</li>", spans_to_html(content)));
            }
            Line::Text(raw) => {
                self.enter(OpenBlock::Paragraph);
                self.out.push(spans_to_html(raw));
            }
        }
    }

    /// Make `block` the open block, closing whatever else is open.
    fn enter(&mut self, block: OpenBlock) {
        if self.open == Some(block) {
            return;
        }
        self.close();
        tracing::trace!(?block, "open");
        self.out.push(block.open_tag().to_string());
        self.open = Some(block);
    }

    fn close(&mut self) {
        if let Some(block) = self.open.take() {
            tracing::trace!(?block, "close");
            self.out.push(block.close_tag().to_string());
        }
    }

    fn close_paragraph(&mut self) {
        if self.open == Some(OpenBlock::Paragraph) {
            self.close();
        }
    }

    fn finish(mut self, config: &Config) -> String {
        self.close();
        let mut html = self.out.join("\n");
        if config.output.trailing_newline && !html.is_empty() {
            html.push('\n');
        }
        html
    }
}

fn spans_to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for span in parse_inline(text) {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Bold(inner) => {
                out.push_str("<strong>");
                out.push_str(inner);
                out.push_str("</strong>");
            }
        }
    }
    out
}
