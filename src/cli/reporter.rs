use crate::config::OutputConfig;
use crate::error::TallyError;
use crate::localization::LocalizedStrings;
use crate::models::{format_share, CardKind, Category, ChartSlice, ReportSource, StatCard, TallyReport};
use serde::Serialize;

const CHART_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 12;

/// Everything printed by one `--format json` run.
#[derive(Debug, Clone, Serialize)]
pub struct TallyOutput {
    pub local: TallyReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart: Option<TallyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_error: Option<String>,
}

pub struct ReportFormatter {
    use_colors: bool,
    verbose: bool,
    localized_strings: LocalizedStrings,
}

impl ReportFormatter {
    pub fn new(output: &OutputConfig) -> Self {
        Self {
            use_colors: output.use_colors,
            verbose: output.verbose,
            localized_strings: LocalizedStrings::new(output.language),
        }
    }

    pub fn format_report(&self, report: &TallyReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(report));
        output.push_str("\n\n");

        let counts_title = self.localized_strings.get_section("counts");
        output.push_str(&self.format_section(counts_title, &self.format_cards(&report.cards)));
        output.push_str("\n\n");

        let chart_title = self.localized_strings.get_section("chart");
        output.push_str(&self.format_section(chart_title, &self.format_chart(&report.chart)));

        output
    }

    pub fn format_json(&self, output: &TallyOutput) -> Result<String, TallyError> {
        Ok(serde_json::to_string_pretty(output)?)
    }

    fn format_header(&self, report: &TallyReport) -> String {
        let header_text = self.localized_strings.get("report_header");
        let input_text = self.localized_strings.get("report_input");

        let source_text = match &report.source {
            ReportSource::Local => self.localized_strings.get("report_source_local").to_string(),
            ReportSource::Smart { model, duration_ms } => {
                let label = self.localized_strings.get("report_source_smart");
                if self.verbose {
                    format!("{}: {}, {}ms", label, model, duration_ms)
                } else {
                    format!("{}: {}", label, model)
                }
            }
        };

        let title = format!("=== {} ===", header_text);
        format!(
            "{}\n{}: {} ({})",
            self.paint(&title, "\x1b[1m\x1b[36m"),
            input_text,
            report.roster_label,
            source_text
        )
    }

    fn format_cards(&self, cards: &[StatCard]) -> String {
        cards
            .iter()
            .map(|card| {
                let label = self.localized_strings.get_card(card.kind);
                let line = format!(
                    "{:<width$} {:>6} {:>6}%",
                    label,
                    card.count,
                    card.percentage_label(),
                    width = LABEL_WIDTH
                );
                self.paint(&line, card_color(card.kind))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_chart(&self, slices: &[ChartSlice]) -> String {
        if slices.is_empty() {
            return self.localized_strings.get_message("no_data").to_string();
        }

        slices
            .iter()
            .map(|slice| {
                let label = self.localized_strings.get_card(card_kind(slice.category));
                let filled = bar_cells(slice.share);
                let bar = format!(
                    "{}{}",
                    self.paint(&"█".repeat(filled), card_color(card_kind(slice.category))),
                    "░".repeat(CHART_WIDTH - filled)
                );
                format!(
                    "{:<width$} {} {:>6} ({}%)",
                    label,
                    bar,
                    slice.count,
                    format_share(slice.share),
                    width = LABEL_WIDTH
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_section(&self, title: &str, content: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[37m{}\x1b[0m\n{}", title, content)
        } else {
            format!("{}\n{}\n{}", title, "─".repeat(title.chars().count()), content)
        }
    }

    pub fn format_error(&self, error: &TallyError) -> String {
        let error_title = self.localized_strings.get_message("analysis_error");
        let error_desc = self.localized_strings.get("desc_analysis_failure");

        format!(
            "{}\n{}\n{}",
            self.paint(error_title, "\x1b[1m\x1b[31m"),
            error,
            error_desc
        )
    }

    pub fn format_stale_notice(&self) -> String {
        self.paint(
            self.localized_strings.get_message("analysis_stale"),
            "\x1b[33m",
        )
    }

    fn paint(&self, text: &str, color_code: &str) -> String {
        if self.use_colors {
            format!("{}{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }
}

// Every non-zero slice gets at least one cell.
fn bar_cells(share: f64) -> usize {
    let cells = (share / 100.0 * CHART_WIDTH as f64).round() as usize;
    cells.clamp(1, CHART_WIDTH)
}

fn card_kind(category: Category) -> CardKind {
    match category {
        Category::Male => CardKind::Male,
        Category::Female => CardKind::Female,
        Category::Unknown => CardKind::Unknown,
    }
}

fn card_color(kind: CardKind) -> &'static str {
    match kind {
        CardKind::Male => "\x1b[34m",
        CardKind::Female => "\x1b[35m",
        CardKind::Unknown => "\x1b[90m",
        CardKind::Total => "\x1b[1m",
    }
}
