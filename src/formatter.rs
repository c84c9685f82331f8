use crate::settings::{CommentaryStyle, Settings};

// Markup class applied to every wrapped commentary run.
pub const COMMENTARY_CLASS: &str = "nested-roleplay-commentary";

// A delimited run inside a message, byte offsets, end exclusive, delimiters
// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

// Lazy left-to-right scan for non-nested delimited runs. No escaping: the
// first closer after an opener ends the run. An empty pair is consumed
// without producing a match. Nested delimiters are out of scope.
struct DelimitedRuns<'a> {
    bytes: &'a [u8],
    open: u8,
    close: u8,
    pos: usize,
}

impl<'a> DelimitedRuns<'a> {
    fn new(text: &'a str, open: u8, close: u8) -> Self {
        Self {
            bytes: text.as_bytes(),
            open,
            close,
            pos: 0,
        }
    }
}

impl Iterator for DelimitedRuns<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        loop {
            let open_off = self.bytes[self.pos..].iter().position(|&b| b == self.open)?;
            let open_idx = self.pos + open_off;
            let close_off = self.bytes[open_idx + 1..]
                .iter()
                .position(|&b| b == self.close)?;
            let close_idx = open_idx + 1 + close_off;
            self.pos = close_idx + 1;
            if close_idx == open_idx + 1 {
                // Empty pair, nothing to wrap. Keep scanning after it.
                continue;
            }
            return Some(Span {
                start: open_idx,
                end: close_idx + 1,
            });
        }
    }
}

fn delimiters(style: CommentaryStyle) -> (u8, u8) {
    match style {
        CommentaryStyle::Parentheses => (b'(', b')'),
        CommentaryStyle::Asterisks => (b'*', b'*'),
    }
}

// Wrap every commentary run in a styled span, delimiters preserved inside.
pub fn wrap_commentary(text: &str, style: CommentaryStyle) -> String {
    let (open, close) = delimiters(style);
    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for span in DelimitedRuns::new(text, open, close) {
        output.push_str(&text[last..span.start]);
        output.push_str("<span class=\"");
        output.push_str(COMMENTARY_CLASS);
        output.push_str("\">");
        output.push_str(&text[span.start..span.end]);
        output.push_str("</span>");
        last = span.end;
    }
    output.push_str(&text[last..]);
    output
}

// Rewrite an incoming partner message. Pure: identical inputs always yield
// identical output, and nothing outside the parameters is read or written.
// The partner prefix is applied first, then the commentary scan runs over
// the already-prefixed string. An empty partner name still produces a
// literal "**:** " prefix; callers gate on character selection upstream.
// Not idempotent: re-applying with show_partner_name prepends again.
pub fn format_message(
    text: &str,
    partner_name: &str,
    _controlled_name: &str,
    settings: &Settings,
) -> String {
    let mut processed = text.to_string();

    // Add partner name prefix if enabled.
    if settings.show_partner_name {
        processed = format!("**{}:** {}", partner_name, processed);
    }

    // Add styling to meta-commentary.
    if settings.allow_meta_commentary {
        processed = wrap_commentary(&processed, settings.meta_commentary_style);
    }

    processed
}
