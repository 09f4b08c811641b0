//! Selector names and match strength

use std::fmt;

use regex::Regex;

/// Selector matching a field and its entire subtree
pub const ANY_DEEP: &str = "**";
/// Selector matching every field of the current level
pub const ANY_SHALLOW: &str = "*";
/// Reserved view label: directly declared, non-hidden fields without a view
pub const BASE_VIEW: &str = "base";
/// Reserved view label: every non-hidden field
pub const FULL_VIEW: &str = "full";

/// Glob selector such as `eco*`, `*Time` or `*Weight*`
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    regex: Regex,
    literal_len: usize,
}

impl GlobPattern {
    /// Compile a glob into an anchored regex. Every `*` matches any run of
    /// characters, everything else matches literally.
    pub fn new(raw: impl Into<String>) -> Result<Self, regex::Error> {
        let raw = raw.into();
        let body = raw
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{body}$"))?;
        let literal_len = raw.chars().filter(|c| *c != '*').count();

        Ok(Self {
            raw,
            regex,
            literal_len,
        })
    }

    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Number of non-wildcard characters; longer literals are more specific
    #[inline]
    #[must_use]
    pub fn literal_len(&self) -> usize {
        self.literal_len
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self, field: &str) -> bool {
        self.regex.is_match(field)
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for GlobPattern {}

/// Selector variant of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    /// Field name matched literally (`id`, `'first name'`)
    Exact(String),
    /// Field name pattern with one or more `*`
    Glob(GlobPattern),
    /// `*`
    AnyShallow,
    /// `**`
    AnyDeep,
    /// View label synthesized by the engine; never matches a field by name
    View(String),
}

impl Name {
    /// How strongly this selector matches `field`, or `None` when it does not.
    ///
    /// Exact names always outrank globs matching the same field, and globs
    /// always outrank the wildcards.
    #[must_use]
    pub fn match_strength(&self, field: &str) -> Option<usize> {
        match self {
            Name::Exact(name) => (name == field).then(|| name.chars().count() + 2),
            Name::Glob(glob) => glob.is_match(field).then(|| glob.literal_len() + 1),
            Name::AnyShallow | Name::AnyDeep => Some(0),
            Name::View(_) => None,
        }
    }

    /// Label used when the selector is interpreted as a view name
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Name::Exact(name) | Name::View(name) => name,
            Name::Glob(glob) => glob.raw(),
            Name::AnyShallow => ANY_SHALLOW,
            Name::AnyDeep => ANY_DEEP,
        }
    }

    /// Whether the selector can name a view during view matching
    #[inline]
    #[must_use]
    pub fn is_view_candidate(&self) -> bool {
        matches!(self, Name::Exact(_) | Name::View(_))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
