//! Markup removal for titles and page fragments shipped in the index.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SCRIPT_OR_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>").expect("valid regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").expect("valid regex"));

/// Turn an HTML fragment into plain text: tags become whitespace, common
/// entities are decoded and runs of whitespace collapse to one space.
pub fn strip_html(fragment: &str) -> String {
    let without_code = SCRIPT_OR_STYLE.replace_all(fragment, " ");
    let without_tags = TAG.replace_all(&without_code, " ");
    let decoded = ENTITY.replace_all(&without_tags, |caps: &Captures| {
        decode_entity(&caps[1]).map_or_else(|| caps[0].to_string(), |c| c.to_string())
    });
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code);
    }
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "ndash" => Some('\u{2013}'),
        "mdash" => Some('\u{2014}'),
        "lsquo" => Some('\u{2018}'),
        "rsquo" => Some('\u{2019}'),
        "ldquo" => Some('\u{201c}'),
        "rdquo" => Some('\u{201d}'),
        "hellip" => Some('\u{2026}'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_tags_and_collapses_whitespace() {
        let text = strip_html("<p>Eduardo F. Miranda</p>  <p>Last   edited</p>");
        assert_eq!(text, "Eduardo F. Miranda Last edited");
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(strip_html("a &amp; b &lt;c&gt; &#39;d&#x27;"), "a & b <c> 'd'");
    }

    #[test]
    fn keeps_unknown_entities_verbatim() {
        assert_eq!(strip_html("&bogus; x"), "&bogus; x");
    }

    #[test]
    fn drops_script_bodies() {
        assert_eq!(strip_html("before<script>var x = 1;</script>after"), "before after");
    }

    #[test]
    fn tags_do_not_glue_words_together() {
        assert_eq!(strip_html("<li>one</li><li>two</li>"), "one two");
    }
}
