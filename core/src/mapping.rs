use indexmap::IndexMap;
use serde::Serialize;

use crate::color::TokenColor;

peg::parser! {
  grammar token_line() for str {
    rule _ = quiet!{[c if c.is_whitespace()]*}

    rule ident() -> &'input str = $(['a'..='z' | 'A'..='Z' | '0'..='9' | '_']+)
    rule hex() -> &'input str = $(['0'..='9' | 'a'..='f' | 'A'..='F']*<6>)
    rule opaque() = "0x" ['F' | 'f'] ['F' | 'f']

    pub(crate) rule entry() -> (&'input str, &'input str)
        = _ k:ident() ":" _ "Color(" opaque() h:hex() ")" "," _ ![_] { (k, h) }
  }
}

/// Matches `  name: Color(0xFFRRGGBB),`. Anything else yields `None`.
pub fn parse_token_line(line: &str) -> Option<(&str, TokenColor)> {
    let (key, hex) = token_line::entry(line).ok()?;
    Some((key, hex.parse().ok()?))
}

/// Token name to color, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenMapping(IndexMap<String, TokenColor>);
impl TokenMapping {
    /// Collects every token line in `text`. A repeated name keeps its first
    /// position and takes the last value.
    pub fn parse(text: &str) -> Self {
        let mut mapping = TokenMapping::default();
        for (key, color) in text.lines().filter_map(parse_token_line) {
            if mapping.insert(key, color).is_some() {
                log::warn!("duplicate token `{key}`, keeping the last value");
            }
        }
        mapping
    }
    pub fn insert(&mut self, key: impl Into<String>, color: TokenColor) -> Option<TokenColor> {
        self.0.insert(key.into(), color)
    }
    pub fn get(&self, key: &str) -> Option<&TokenColor> {
        self.0.get(key)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenColor)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
