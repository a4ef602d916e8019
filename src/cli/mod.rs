pub mod args;
pub mod reporter;

pub use args::Cli;
pub use reporter::{ReportFormatter, TallyOutput};

use crate::analyzer::{AnalysisSession, ApplyOutcome};
use crate::classifier::Classifier;
use crate::config::{OutputFormat, TallyConfig};
use crate::error::TallyError;
use crate::models::{ReportSource, Roster, RosterSource, TallyReport};
use std::io::{self, Read};

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, TallyError> {
        let config = TallyConfig::from_cli(&self.cli)?;

        if self.cli.is_debug() {
            tracing::debug!("{}", self.cli.get_language_debug_info().replace('\n', "; "));
        }

        // Step 1: Read the roster
        let roster = self.read_roster()?;
        tracing::info!(
            source = %roster.source_label(),
            bytes = roster.size_bytes(),
            lines = roster.line_count(),
            "read roster"
        );

        // Step 2: Local classification, always available
        let classifier = Classifier::new(config.aliases.clone());
        tracing::info!(aliases = classifier.aliases().len(), "classifying with alias table");

        if self.cli.is_debug() {
            for (line, category) in classifier.classify_lines(&roster.content) {
                tracing::debug!(line, category = category.as_str(), "classified line");
            }
        }

        let local = TallyReport::local(classifier.classify(&roster.content), roster.source_label());
        let formatter = ReportFormatter::new(&config.output);

        if config.output.format == OutputFormat::Text {
            println!("{}", formatter.format_report(&local));
        }

        // Step 3: Optional smart analysis; its failure never replaces the local counts
        let mut output = TallyOutput {
            local,
            smart: None,
            smart_error: None,
        };

        if config.is_smart() {
            match self.run_smart_analysis(&config, &roster).await {
                Ok(Some(report)) => {
                    if config.output.format == OutputFormat::Text {
                        println!("\n{}", formatter.format_report(&report));
                    }
                    output.smart = Some(report);
                }
                Ok(None) => {
                    eprintln!("{}", formatter.format_stale_notice());
                }
                Err(e) => {
                    eprintln!("{}", formatter.format_error(&e));
                    output.smart_error = Some(e.to_string());
                }
            }
        }

        if config.output.format == OutputFormat::Json {
            println!("{}", formatter.format_json(&output)?);
        }

        Ok(0)
    }

    fn read_roster(&self) -> Result<Roster, TallyError> {
        if self.cli.sample {
            return Ok(Roster::sample());
        }

        match self.cli.input_path() {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Ok(Roster::new(content, RosterSource::File(path.to_path_buf())))
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(Roster::new(buffer, RosterSource::Stdin))
            }
        }
    }

    /// `Ok(None)` when the result was superseded before it arrived.
    async fn run_smart_analysis(
        &self,
        config: &TallyConfig,
        roster: &Roster,
    ) -> Result<Option<TallyReport>, TallyError> {
        if roster.is_blank() {
            return Err(TallyError::AnalysisUnavailable(
                "input is empty".to_string(),
            ));
        }

        let session = AnalysisSession::from_model(
            &config.smart.model,
            config.smart.api_key.clone(),
            config.smart.timeout_seconds,
        )?;

        match session.analyze(&roster.content).await {
            ApplyOutcome::Applied(smart) => {
                tracing::info!(
                    model = %smart.model_used,
                    duration_ms = smart.duration_ms,
                    total = smart.counts.total(),
                    "smart analysis complete"
                );
                Ok(Some(TallyReport::new(
                    smart.counts,
                    ReportSource::Smart {
                        model: smart.model_used,
                        duration_ms: smart.duration_ms,
                    },
                    roster.source_label(),
                )))
            }
            ApplyOutcome::Stale => Ok(None),
            ApplyOutcome::Failed(e) => Err(e),
        }
    }
}
