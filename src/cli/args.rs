use crate::analyzer::DEFAULT_MODEL;
use crate::config::{AnalysisMode, OutputFormat};
use crate::error::TallyError;
use crate::localization::LocaleDetector;
use crate::models::OutputLanguage;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};

const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 5..=300;

#[derive(Parser, Debug)]
#[command(name = "gender-tally")]
#[command(about = "Count male and female entries in a roster, one entry per line")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Roster file to read; omit or pass '-' to read stdin
    pub input: Option<PathBuf>,

    /// Use the built-in sample roster instead of reading input
    #[arg(long, conflicts_with = "input")]
    pub sample: bool,

    /// Classification mode
    #[arg(long, value_enum, default_value_t = AnalysisMode::Simple)]
    pub mode: AnalysisMode,

    /// LLM model used in smart mode
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum time for smart analysis in seconds (5-300)
    #[arg(short = 't', long, default_value = "30", value_parser = validate_timeout)]
    pub timeout: u64,

    /// API key for the smart-mode provider (defaults to the provider's env var)
    #[arg(long)]
    pub api_key: Option<String>,

    /// JSON alias table {"male": [...], "female": [...]} replacing the built-in one
    #[arg(long, value_name = "FILE")]
    pub aliases: Option<PathBuf>,

    /// Extra token counted as male (repeatable)
    #[arg(long = "male-alias", value_name = "ALIAS")]
    pub male_aliases: Vec<String>,

    /// Extra token counted as female (repeatable)
    #[arg(long = "female-alias", value_name = "ALIAS")]
    pub female_aliases: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Output language for reports (english, vietnamese)
    /// If not specified, automatically detects from system locale
    #[arg(long, value_name = "LANG")]
    pub output_lang: Option<String>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including per-line classification and raw LLM replies
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, TallyError> {
        let cli = Self::try_parse().map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => TallyError::InvalidArguments(e.to_string()),
        })?;

        cli.validate()?;

        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), TallyError> {
        if !TIMEOUT_RANGE.contains(&self.timeout) {
            return Err(TallyError::InvalidArguments(
                "Timeout must be between 5 and 300 seconds".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(TallyError::InvalidArguments(
                "Model name cannot be empty".to_string(),
            ));
        }

        self.get_output_language()?;

        Ok(())
    }

    /// File to read, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// `TALLY_DEFAULT_MODEL` applies unless `--model` was changed from its default.
    pub fn get_llm_model(&self) -> String {
        if self.model == DEFAULT_MODEL {
            if let Ok(model) = std::env::var("TALLY_DEFAULT_MODEL") {
                if !model.trim().is_empty() {
                    return model.trim().to_string();
                }
            }
        }
        self.model.clone()
    }

    pub fn get_timeout_seconds(&self) -> u64 {
        if let Ok(timeout_str) = std::env::var("TALLY_DEFAULT_TIMEOUT") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                if TIMEOUT_RANGE.contains(&timeout) {
                    return timeout;
                }
            }
        }
        self.timeout
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        !self.no_color && std::env::var("NO_COLOR").is_err()
    }

    /// Default tracing filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    pub fn get_output_language(&self) -> Result<OutputLanguage, TallyError> {
        // Priority 1: Environment variable override
        if let Ok(env_lang) = std::env::var("TALLY_OUTPUT_LANGUAGE") {
            return OutputLanguage::from_str(&env_lang);
        }

        // Priority 2: CLI option
        if let Some(lang) = &self.output_lang {
            return OutputLanguage::from_str(lang);
        }

        // Priority 3: System locale, English when unrecognized
        Ok(LocaleDetector::detect_system_locale())
    }

    /// Get debug information about language detection
    pub fn get_language_debug_info(&self) -> String {
        let mut info = Vec::new();

        match std::env::var("TALLY_OUTPUT_LANGUAGE") {
            Ok(value) => info.push(format!("TALLY_OUTPUT_LANGUAGE={}", value)),
            Err(_) => info.push("TALLY_OUTPUT_LANGUAGE=(not set)".to_string()),
        }

        info.push(format!(
            "CLI --output-lang={}",
            self.output_lang.as_deref().unwrap_or("(not set)")
        ));
        info.push(format!("System locale: {}", LocaleDetector::get_system_locale_info()));

        match self.get_output_language() {
            Ok(lang) => info.push(format!("Detected language: {}", lang.as_str())),
            Err(e) => info.push(format!("Language detection error: {}", e)),
        }

        info.join("\n")
    }
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse().map_err(|_| "Timeout must be a number")?;

    if TIMEOUT_RANGE.contains(&timeout) {
        Ok(timeout)
    } else {
        Err("Timeout must be between 5 and 300 seconds".to_string())
    }
}
