use std::{fmt, str::FromStr};

use csscolorparser::Color;
use serde::{Serialize, Serializer};

use crate::Error;

/// An opaque RGB token color. Always renders as `#RRGGBB` with uppercase digits.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenColor(Color);
impl TokenColor {
    pub fn rgb(&self) -> [u8; 3] {
        let [r, g, b, _] = self.0.to_rgba8();
        [r, g, b]
    }
}

/// Parses the six hex digits that follow the alpha byte of a `Color(0xFF......)` literal.
impl FromStr for TokenColor {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        if hex.len() != 6 {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        csscolorparser::parse(&format!("#{hex}"))
            .map(TokenColor)
            .map_err(|_| Error::InvalidColor(hex.to_string()))
    }
}

impl fmt::Display for TokenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl Serialize for TokenColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[test]
fn test() {
    assert_eq!("112233".parse::<TokenColor>().unwrap().to_string(), "#112233");
    assert_eq!("abcdef".parse::<TokenColor>().unwrap().to_string(), "#ABCDEF");
    assert_eq!("aBc0eF".parse::<TokenColor>().unwrap().rgb(), [0xab, 0xc0, 0xef]);
    assert!("abc".parse::<TokenColor>().is_err());
    assert!("ggghhh".parse::<TokenColor>().is_err());
    assert_eq!(
        serde_json::to_string(&"00ff7f".parse::<TokenColor>().unwrap()).unwrap(),
        "\"#00FF7F\""
    );
}
