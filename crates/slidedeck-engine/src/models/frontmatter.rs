use serde::Serialize;
use std::collections::BTreeMap;

/// Key/value metadata scoped to a single slide (`layout`, `bg`, `confetti`, ...).
///
/// Keys are kept in sorted order so two parses of the same text compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(BTreeMap<String, String>);

impl Frontmatter {
    pub const LAYOUT: &'static str = "layout";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// The layout name, if one was declared or inferred.
    ///
    /// An empty value counts as "not declared".
    pub fn layout(&self) -> Option<&str> {
        self.get(Self::LAYOUT).filter(|l| !l.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Document-level metadata from the leading global metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    pub title: String,
    pub theme: String,
    /// Every other key from the global block, passed through verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl DocumentMeta {
    pub const DEFAULT_TITLE: &'static str = "Untitled";
    pub const DEFAULT_THEME: &'static str = "default";

    /// Build document metadata from a parsed global block.
    ///
    /// `title` and `theme` fall back to their defaults only when the key is
    /// absent; an explicit (even empty) value always wins.
    pub fn from_frontmatter(fm: Frontmatter) -> Self {
        let mut meta = Self::default();
        for (key, value) in fm.0 {
            match key.as_str() {
                "title" => meta.title = value,
                "theme" => meta.theme = value,
                _ => {
                    meta.extra.insert(key, value);
                }
            }
        }
        meta
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(&self.title),
            "theme" => Some(&self.theme),
            _ => self.extra.get(key).map(String::as_str),
        }
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            theme: Self::DEFAULT_THEME.to_string(),
            extra: BTreeMap::new(),
        }
    }
}
