use crate::cli::args::Cli;
use crate::error::TallyError;
use crate::models::{AliasTable, OutputLanguage};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Local exact-alias matching only
    Simple,
    /// Local matching followed by a remote LLM count
    Smart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct SmartConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub language: OutputLanguage,
    pub use_colors: bool,
    pub verbose: bool,
}

/// Everything a run needs, resolved from flags, environment and alias files.
#[derive(Debug, Clone)]
pub struct TallyConfig {
    pub aliases: AliasTable,
    pub mode: AnalysisMode,
    pub smart: SmartConfig,
    pub output: OutputConfig,
}

impl TallyConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, TallyError> {
        cli.validate()?;

        Ok(Self {
            aliases: Self::resolve_aliases(cli)?,
            mode: cli.mode,
            smart: SmartConfig {
                model: cli.get_llm_model(),
                api_key: cli.api_key.clone(),
                timeout_seconds: cli.get_timeout_seconds(),
            },
            output: OutputConfig {
                format: cli.format,
                language: cli.get_output_language()?,
                use_colors: cli.should_use_color(),
                verbose: cli.is_verbose(),
            },
        })
    }

    /// Alias file (or the built-in table), extended by `--male-alias` / `--female-alias`.
    fn resolve_aliases(cli: &Cli) -> Result<AliasTable, TallyError> {
        let base = match &cli.aliases {
            Some(path) => AliasTable::from_file(path)?,
            None => AliasTable::default(),
        };

        Ok(base
            .with_male_aliases(&cli.male_aliases)
            .with_female_aliases(&cli.female_aliases))
    }

    pub fn is_smart(&self) -> bool {
        self.mode == AnalysisMode::Smart
    }
}
