// ABOUTME: Markup whitespace minimization run at layout registration.
// ABOUTME: Strips inter-tag whitespace so layouts can be written across multiple lines.

/// Tags whose content is copied verbatim, whitespace included
const LITERAL_TAGS: [&str; 4] = ["pre", "script", "style", "textarea"];

/// Remove whitespace runs that open the string, follow a `>`, precede a `<`,
/// or close the string. Whitespace interior to text is kept, and literal
/// regions (`pre`, `script`, `style`, `textarea`) pass through untouched.
///
/// Without this, markup indented for readability would leave whitespace
/// nodes between sibling elements and break inline-block flow.
pub fn minimize_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(c) = rest.chars().next() {
        if c == '<' {
            if let Some(region) = literal_region(rest) {
                out.push_str(region);
                rest = &rest[region.len()..];
                continue;
            }
            out.push('<');
            rest = &rest[1..];
        } else if c.is_whitespace() {
            let run_len = rest.len() - rest.trim_start().len();
            let boundary_before = matches!(out.as_bytes().last(), None | Some(b'>'));
            let boundary_after = matches!(rest[run_len..].chars().next(), None | Some('<'));
            if !boundary_before && !boundary_after {
                out.push_str(&rest[..run_len]);
            }
            rest = &rest[run_len..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// If `rest` (starting at `<`) opens a literal region, return the region
/// through its closing tag. An unterminated region returns None and falls
/// back to normal whitespace processing.
fn literal_region(rest: &str) -> Option<&str> {
    for tag in LITERAL_TAGS {
        let Some(after_name) = rest[1..].strip_prefix(tag) else {
            continue;
        };
        // name boundary: "<present>" must not open a "pre" region
        if after_name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            continue;
        }
        let open_len = 1 + tag.len();
        let close_pattern = format!("</{}", tag);
        let close_start = rest[open_len..].find(&close_pattern)? + open_len;
        let after_close = close_start + close_pattern.len();
        let close_end = match rest[after_close..].find('>') {
            Some(offset) => after_close + offset + 1,
            None => rest.len(),
        };
        return Some(&rest[..close_end]);
    }
    None
}
