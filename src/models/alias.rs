use crate::classifier::normalize;
use crate::error::TallyError;
use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_MALE_ALIASES: &[&str] = &["nam", "male", "trai"];
pub const DEFAULT_FEMALE_ALIASES: &[&str] = &["nữ", "nu", "female", "gái"];

/// Recognized tokens for each category, stored normalized.
///
/// Lookups are exact matches against a normalized line. If a token ends up in
/// both sets the male set is checked first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasTable {
    male: BTreeSet<String>,
    female: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AliasFile {
    #[serde(default)]
    male: Vec<String>,
    #[serde(default)]
    female: Vec<String>,
}

impl AliasTable {
    pub fn new<M, F, S>(male: M, female: F) -> Self
    where
        M: IntoIterator<Item = S>,
        F: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = Self {
            male: normalize_all(male),
            female: normalize_all(female),
        };
        table.warn_on_overlap();
        table
    }

    pub fn with_male_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.male.extend(normalize_all(aliases));
        self.warn_on_overlap();
        self
    }

    pub fn with_female_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.female.extend(normalize_all(aliases));
        self.warn_on_overlap();
        self
    }

    /// Parse a table from `{"male": [...], "female": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, TallyError> {
        let file: AliasFile = serde_json::from_str(json)
            .map_err(|e| TallyError::AliasFile(format!("invalid alias table: {}", e)))?;

        let table = Self::new(file.male, file.female);
        if table.is_empty() {
            return Err(TallyError::AliasFile(
                "alias table defines no aliases".to_string(),
            ));
        }

        Ok(table)
    }

    pub fn from_file(path: &Path) -> Result<Self, TallyError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TallyError::AliasFile(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Category for an already-normalized, non-empty line.
    pub fn lookup(&self, normalized: &str) -> Category {
        if self.male.contains(normalized) {
            Category::Male
        } else if self.female.contains(normalized) {
            Category::Female
        } else {
            Category::Unknown
        }
    }

    /// Classify one raw line. `None` for lines that are blank after trimming.
    pub fn classify_line(&self, line: &str) -> Option<Category> {
        let normalized = normalize(line);
        if normalized.is_empty() {
            None
        } else {
            Some(self.lookup(&normalized))
        }
    }

    pub fn male_aliases(&self) -> impl Iterator<Item = &str> {
        self.male.iter().map(String::as_str)
    }

    pub fn female_aliases(&self) -> impl Iterator<Item = &str> {
        self.female.iter().map(String::as_str)
    }

    /// Tokens present in both sets.
    pub fn overlap(&self) -> Vec<&str> {
        self.male
            .intersection(&self.female)
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.male.len() + self.female.len()
    }

    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }

    fn warn_on_overlap(&self) {
        let overlap = self.overlap();
        if !overlap.is_empty() {
            tracing::warn!(
                aliases = ?overlap,
                "aliases listed as both male and female; male takes precedence"
            );
        }
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_MALE_ALIASES.iter().copied(),
            DEFAULT_FEMALE_ALIASES.iter().copied(),
        )
    }
}

fn normalize_all<I, S>(aliases: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aliases
        .into_iter()
        .map(|alias| normalize(alias.as_ref()))
        .filter(|alias| !alias.is_empty())
        .collect()
}
