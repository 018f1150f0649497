use regex::Regex;
use std::ops::Range;

/// Load-profile container, from the indent of the first step record to the
/// first `</kg`.
///
/// `[^load_profile]*` is a character class, not a negated word: it accepts any
/// name built from characters outside `{l,o,a,d,_,p,r,f,i,e}`. Numeric step
/// names match while `name="load_profile"` itself does not, which is what
/// existing test plans rely on.
pub const LOAD_PROFILE_PATTERN: &str =
    r#"[ \t]*<collectionProp name="[^load_profile]*">(?s:.*?)</kg"#;

/// Thread group `Hold` duration field.
pub const HOLD_FIELD_PATTERN: &str = r#"<stringProp name="Hold">[0-9]*</stringProp>"#;

/// Finds byte ranges of a region inside a test plan.
pub trait RegionLocator {
    fn locate_first(&self, text: &str) -> Option<Range<usize>>;

    fn locate_all(&self, text: &str) -> Vec<Range<usize>>;
}

#[derive(Debug, Clone)]
pub struct PatternLocator {
    pattern: Regex,
}

impl PatternLocator {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn load_profile() -> Self {
        Self::new(LOAD_PROFILE_PATTERN).expect("load profile pattern is valid")
    }

    pub fn hold_field() -> Self {
        Self::new(HOLD_FIELD_PATTERN).expect("hold field pattern is valid")
    }
}

impl RegionLocator for PatternLocator {
    fn locate_first(&self, text: &str) -> Option<Range<usize>> {
        self.pattern.find(text).map(|m| m.range())
    }

    fn locate_all(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern.find_iter(text).map(|m| m.range()).collect()
    }
}
