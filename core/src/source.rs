use std::fmt;

use convert_case::{Case, Casing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}
impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One design context in one theme mode; maps to exactly one input and one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSource {
    pub context: &'static str,
    pub mode: Mode,
}
impl TokenSource {
    pub const ALL: [TokenSource; 10] = [
        TokenSource::new("main", Mode::Light),
        TokenSource::new("main", Mode::Dark),
        TokenSource::new("social", Mode::Light),
        TokenSource::new("social", Mode::Dark),
        TokenSource::new("sports", Mode::Light),
        TokenSource::new("sports", Mode::Dark),
        TokenSource::new("activity", Mode::Light),
        TokenSource::new("activity", Mode::Dark),
        TokenSource::new("profile", Mode::Light),
        TokenSource::new("profile", Mode::Dark),
    ];

    pub const fn new(context: &'static str, mode: Mode) -> Self {
        Self { context, mode }
    }
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.context, self.mode)
    }
    pub fn input_file_name(&self, ext: &str) -> String {
        format!("{}.{ext}", self.file_stem())
    }
    pub fn output_file_name(&self) -> String {
        format!("{}-{}-theme.json", self.context, self.mode)
    }
    /// `mainLight`, `socialDark`, ...
    pub fn root_key(&self) -> String {
        format!("{}{}", self.context, self.mode.as_str().to_case(Case::Title))
    }
}
impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.context, self.mode)
    }
}

#[test]
fn test_names() {
    let source = TokenSource::new("social", Mode::Dark);
    assert_eq!(source.input_file_name("dart"), "social_dark.dart");
    assert_eq!(source.output_file_name(), "social-dark-theme.json");
    assert_eq!(source.root_key(), "socialDark");
    assert_eq!(TokenSource::ALL[0].root_key(), "mainLight");
}

#[test]
fn test_all_sources_alternate_modes() {
    assert_eq!(TokenSource::ALL.len(), 10);
    for pair in TokenSource::ALL.chunks(2) {
        assert_eq!(pair[0].context, pair[1].context);
        assert_eq!(pair[0].mode, Mode::Light);
        assert_eq!(pair[1].mode, Mode::Dark);
    }
}
