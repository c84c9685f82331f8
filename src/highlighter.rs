// Markup class applied to a controlled character's quoted dialogue.
pub const CONTROLLED_DIALOG_CLASS: &str = "nested-roleplay-controlled-msg";

// Class the host adds to the whole message element once formatting applied.
pub const PARTNER_MESSAGE_CLASS: &str = "nested-roleplay-partner-msg";

// One dialogue attribution inside rendered markup: the character name, a run
// of separator characters, and a double-quoted line.
struct DialogMatch {
    name_start: usize,
    quote_start: usize,
    quote_end: usize,
}

// Find every `{name}[: ]+"..."` occurrence, left to right, non-overlapping.
// The name is matched literally, the quoted run must be non-empty and stops
// at the first closing quote. Escaped quotes are out of scope.
fn find_dialog_matches(html: &str, name: &str) -> Vec<DialogMatch> {
    let bytes = html.as_bytes();
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(found) = html[pos..].find(name) {
        let name_start = pos + found;
        let name_end = name_start + name.len();

        let mut sep_end = name_end;
        while sep_end < bytes.len() && (bytes[sep_end] == b':' || bytes[sep_end] == b' ') {
            sep_end += 1;
        }

        let candidate = sep_end > name_end && bytes.get(sep_end) == Some(&b'"');
        if candidate {
            if let Some(close) = html[sep_end + 1..].find('"') {
                if close > 0 {
                    let quote_end = sep_end + 1 + close + 1;
                    matches.push(DialogMatch {
                        name_start,
                        quote_start: sep_end,
                        quote_end,
                    });
                    pos = quote_end;
                    continue;
                }
            }
        }

        pos = name_start + 1;
    }

    matches
}

// Highlight dialogue attributed to the controlled character in a rendered
// message. Operates on post-render markup, not raw message text; the
// separator is normalized to ": " and the quotes stay inside the wrapped
// span. No match means the markup comes back unchanged.
pub fn highlight_dialog(rendered_html: &str, controlled_name: &str) -> String {
    if controlled_name.is_empty() {
        return rendered_html.to_string();
    }

    let matches = find_dialog_matches(rendered_html, controlled_name);
    if matches.is_empty() {
        return rendered_html.to_string();
    }

    let mut output = String::with_capacity(rendered_html.len());
    let mut last = 0;
    for m in matches {
        output.push_str(&rendered_html[last..m.name_start]);
        output.push_str(controlled_name);
        output.push_str(": ");
        output.push_str("<span class=\"");
        output.push_str(CONTROLLED_DIALOG_CLASS);
        output.push_str("\">");
        output.push_str(&rendered_html[m.quote_start..m.quote_end]);
        output.push_str("</span>");
        last = m.quote_end;
    }
    output.push_str(&rendered_html[last..]);
    output
}
