//! Attribute-signature element lookup over raw HTML.
//!
//! This is not an HTML parser: a [`Selector`] names a tag and the attributes it must carry,
//! and [`find_first`] scans opening tags with regular expressions.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Tag name plus the attributes an element must carry to match.
///
/// `class` is compared as a whitespace-separated token list; every other attribute must be
/// equal to the given value.
#[derive(Clone, Copy, Debug)]
pub struct Selector<'a> {
    pub tag: &'a str,
    pub attrs: &'a [(&'a str, &'a str)],
}

impl<'a> Selector<'a> {
    pub const fn new(tag: &'a str, attrs: &'a [(&'a str, &'a str)]) -> Self {
        Selector { tag, attrs }
    }

    fn matches(&self, attrs: &[(String, String)]) -> bool {
        self.attrs.iter().all(|(want_key, want_val)| {
            attrs
                .iter()
                .filter(|(k, _)| k.eq_ignore_ascii_case(want_key))
                .any(|(_, v)| {
                    if want_key.eq_ignore_ascii_case("class") {
                        v.split_ascii_whitespace().any(|tok| tok == *want_val)
                    } else {
                        v == want_val
                    }
                })
        })
    }
}

/// An element found by [`find_first`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    attrs: Vec<(String, String)>,
    inner_html: String,
}

impl Element {
    /// Attribute value with basic entity decoding applied.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| decode_entities(v))
    }

    /// Markup between the opening tag and the first matching closing tag.
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// First descendant matching `selector`.
    pub fn find(&self, selector: &Selector<'_>) -> Option<Element> {
        find_first(self.inner_html(), selector)
    }
}

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    // key="value", key='value' or key=value
    Regex::new(r#"(?i)([a-z_:][-a-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

/// Return the first element in `html` matching `selector`, in document order.
pub fn find_first(html: &str, selector: &Selector<'_>) -> Option<Element> {
    let tag = regex::escape(selector.tag);
    let open_re = Regex::new(&format!(r"(?is)<{tag}\b([^>]*)>")).ok()?;
    let close_re = Regex::new(&format!(r"(?is)</{tag}\s*>")).ok()?;

    open_re.captures_iter(html).find_map(|caps| {
        let attrs = parse_attrs(caps.get(1).map_or("", |m| m.as_str()));
        if !selector.matches(&attrs) {
            return None;
        }
        let rest = &html[caps.get(0)?.end()..];
        let inner_html = close_re
            .find(rest)
            .map_or(rest, |m| &rest[..m.start()])
            .to_string();
        Some(Element { attrs, inner_html })
    })
}

fn parse_attrs(raw: &str) -> Vec<(String, String)> {
    ATTR_RE
        .captures_iter(raw)
        .filter_map(|cap| {
            let key = cap.get(1)?.as_str().to_ascii_lowercase();
            let val = cap.get(2).or_else(|| cap.get(3)).or_else(|| cap.get(4))?;
            Some((key, val.as_str().to_string()))
        })
        .collect()
}

static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#[xX]([0-9a-fA-F]{1,6})|#([0-9]{1,7})|(quot|apos|lt|gt|amp));").unwrap()
});

/// Decode numeric character references and the XML named entities in one pass, so the
/// output of one reference is never decoded again.
fn decode_entities(s: &str) -> String {
    ENTITY_RE
        .replace_all(s, |caps: &regex::Captures<'_>| {
            let decoded = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = caps.get(2) {
                dec.as_str().parse().ok().and_then(char::from_u32)
            } else {
                match caps.get(3).map(|m| m.as_str()) {
                    Some("quot") => Some('"'),
                    Some("apos") => Some('\''),
                    Some("lt") => Some('<'),
                    Some("gt") => Some('>'),
                    Some("amp") => Some('&'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// Turn a scraped `href` into an absolute URL relative to the page it came from.
pub fn absolutise(base: &Url, cand: &str) -> anyhow::Result<Url> {
    if let Ok(u) = Url::parse(cand) {
        return Ok(u);
    }
    if cand.starts_with("//") {
        return Url::parse(&format!("{}:{}", base.scheme(), cand)).map_err(|e| e.into());
    }
    base.join(cand).map_err(|e| e.into())
}
