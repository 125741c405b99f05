use crate::error::RenameError;
use std::collections::BTreeSet;
use std::fmt;

/// Extensions accepted when no list is given
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff"];

/// Case-insensitive set of accepted file extensions.
///
/// Stored lowercase without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    items: BTreeSet<String>,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            items: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

impl Extensions {
    /// Build a set from individual extensions, with or without leading dots
    pub fn new<I, S>(extensions: I) -> Result<Self, RenameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut items = BTreeSet::new();
        for ext in extensions {
            let ext = ext.as_ref().trim();
            let normalized = ext.strip_prefix('.').unwrap_or(ext).to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            if normalized.contains(|c: char| matches!(c, '.' | '/' | '\\') || c.is_whitespace()) {
                return Err(RenameError::InvalidExtension(ext.to_string()));
            }
            items.insert(normalized);
        }

        if items.is_empty() {
            return Err(RenameError::EmptyExtensions);
        }
        Ok(Self { items })
    }

    /// Parse a comma-separated list such as `jpg,.PNG,webp`
    pub fn parse_list(list: &str) -> Result<Self, RenameError> {
        Self::new(list.split(','))
    }

    /// Check an extension (without the dot) against the set, ignoring case
    pub fn accepts(&self, ext: &str) -> bool {
        self.items.contains(&ext.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl fmt::Display for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list: Vec<String> = self.items.iter().map(|e| format!(".{e}")).collect();
        write!(f, "{}", list.join(", "))
    }
}

/// Options for a rename run
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    /// Text substituted for each CJK ideograph; empty deletes them
    pub replacement: String,
    /// File extensions to consider
    pub extensions: Extensions,
    /// Plan the renames without touching the filesystem
    pub dry_run: bool,
}

impl RenameOptions {
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
