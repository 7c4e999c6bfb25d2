//! Plain-text extraction for rich tooltip content.
//!
//! Panel content is literal text by default. Callers holding markup opt
//! in through [`sanitize`], which reduces it to text: tags are dropped
//! and a small set of character entities is decoded. Nothing here
//! attempts full HTML; unknown entities pass through untouched.

/// Reduce markup to plain text: strip tags, then decode entities.
pub fn sanitize(markup: &str) -> String {
    decode_entities(&strip_tags(markup))
}

/// Strip tags from a string, returning the text between them.
pub fn strip_tags(markup: &str) -> String {
    let mut result = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    result
}

/// Decode named and numeric character entities.
fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // An entity is short; anything without a nearby `;` is literal.
        match tail.find(';').filter(|&semi| (2..=8).contains(&semi)) {
            Some(semi) => match entity_char(&tail[1..semi]) {
                Some(ch) => {
                    result.push(ch);
                    rest = &tail[semi + 1..];
                }
                None => {
                    result.push('&');
                    rest = &tail[1..];
                }
            },
            None => {
                result.push('&');
                rest = &tail[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

fn entity_char(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => name.strip_prefix('#').and_then(|num| {
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(strip_tags("<b>Acme</b> Corp"), "Acme Corp");
        assert_eq!(strip_tags("no markup"), "no markup");
        assert_eq!(
            strip_tags(r#"<a href="x.html" onclick="boom()">link</a>"#),
            "link"
        );
    }

    #[test]
    fn decodes_named_entities() {
        assert_eq!(sanitize("5 &lt; 6 &amp; 7 &gt; 2"), "5 < 6 & 7 > 2");
        assert_eq!(sanitize("&quot;hi&quot; it&apos;s"), "\"hi\" it's");
        assert_eq!(sanitize("a&nbsp;b"), "a b");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(sanitize("&#39;quoted&#39;"), "'quoted'");
        assert_eq!(sanitize("dash&#x2013;here"), "dash\u{2013}here");
    }

    #[test]
    fn unknown_entities_pass_through() {
        assert_eq!(sanitize("&bogus; & plain"), "&bogus; & plain");
        assert_eq!(sanitize("trailing &"), "trailing &");
    }

    #[test]
    fn tags_with_entities() {
        assert_eq!(
            sanitize("<i>R&amp;D</i> <script>x&lt;y</script>"),
            "R&D x<y"
        );
    }
}
