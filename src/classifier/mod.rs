// Classifier module - deterministic roster classification

use crate::models::{AliasTable, Category, GenderCounts};

/// Trim surrounding whitespace and lowercase.
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Count the categories of every non-blank line in `text`.
///
/// Lines are separated by runs of `\n`; blank lines count toward nothing.
/// Never fails and keeps no state between calls.
pub fn classify(text: &str, aliases: &AliasTable) -> GenderCounts {
    if text.trim().is_empty() {
        return GenderCounts::empty();
    }

    text.split('\n')
        .filter_map(|line| aliases.classify_line(line))
        .fold(GenderCounts::empty(), |mut counts, category| {
            counts.record(category);
            counts
        })
}

/// `classify` against the built-in alias table.
pub fn classify_default(text: &str) -> GenderCounts {
    classify(text, &AliasTable::default())
}

/// Holds an alias table so callers can re-run classification on every edit
/// without rebuilding it.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    aliases: AliasTable,
}

impl Classifier {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn classify(&self, text: &str) -> GenderCounts {
        classify(text, &self.aliases)
    }

    /// Per-line categories, blank lines omitted. Used by verbose output.
    pub fn classify_lines<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (&'a str, Category)> + 'a {
        text.split('\n').filter_map(move |line| {
            self.aliases
                .classify_line(line)
                .map(|category| (line.trim(), category))
        })
    }
}
