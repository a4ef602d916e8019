use crate::error::TallyError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Built-in demo roster: 3 male, 8 female.
pub const SAMPLE_ROSTER: &str = "Nữ
Nữ
Nữ
Nam
Nam
Nữ
Nữ
Nữ
Nữ
Nam
Nữ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub content: String,
    pub source: RosterSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RosterSource {
    Stdin,
    File(PathBuf),
    Sample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputLanguage {
    English,
    Vietnamese,
}

impl OutputLanguage {
    pub fn from_str(s: &str) -> Result<Self, TallyError> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(OutputLanguage::English),
            "vietnamese" | "vi" | "tiếng việt" => Ok(OutputLanguage::Vietnamese),
            _ => Err(TallyError::InvalidArguments(format!(
                "Unsupported output language '{}'. Use 'english' or 'vietnamese'",
                s
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputLanguage::English => "english",
            OutputLanguage::Vietnamese => "vietnamese",
        }
    }
}

impl Roster {
    pub fn new(content: String, source: RosterSource) -> Self {
        Self { content, source }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_ROSTER.to_string(), RosterSource::Sample)
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Short label for the report header.
    pub fn source_label(&self) -> String {
        match &self.source {
            RosterSource::Stdin => "stdin".to_string(),
            RosterSource::File(path) => path.display().to_string(),
            RosterSource::Sample => "sample".to_string(),
        }
    }
}
