use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{mapping::TokenMapping, source::TokenSource, Result};

/// `{ "<context><Mode>": { ...tokens } }`
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDocument {
    pub name: String,
    pub tokens: TokenMapping,
}
impl ThemeDocument {
    pub fn new(source: &TokenSource, tokens: TokenMapping) -> Self {
        Self {
            name: source.root_key(),
            tokens,
        }
    }
    /// Two-space indented JSON in insertion order, newline terminated.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl Serialize for ThemeDocument {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.tokens)?;
        map.end()
    }
}

#[test]
fn test() {
    use crate::source::Mode;

    let tokens = TokenMapping::parse("  surface: Color(0xFFfafafa),\n  accent: Color(0xFF0066cc),\n");
    let document = ThemeDocument::new(&TokenSource::new("main", Mode::Light), tokens);
    assert_eq!(
        document.to_json().unwrap(),
        r##"{
  "mainLight": {
    "surface": "#FAFAFA",
    "accent": "#0066CC"
  }
}
"##
    );
}
