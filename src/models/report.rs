use crate::models::{Category, GenderCounts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TallyReport {
    pub counts: GenderCounts,
    pub cards: Vec<StatCard>,
    pub chart: Vec<ChartSlice>,
    pub source: ReportSource,
    pub roster_label: String,
}

/// Which classifier produced the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportSource {
    Local,
    Smart { model: String, duration_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Male,
    Female,
    Unknown,
    Total,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub kind: CardKind,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub category: Category,
    pub count: u64,
    pub share: f64,
}

/// Share of `total` in percent; zero when `total` is zero.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Percentage with one decimal place, e.g. `"72.7"`.
pub fn format_percentage(count: u64, total: u64) -> String {
    format_share(percentage(count, total))
}

/// One decimal place with ties rounded up, so `6.25` prints as `"6.3"`.
pub fn format_share(share: f64) -> String {
    // `{:.1}` alone rounds exact ties to even.
    format!("{:.1}", (share * 10.0).round() / 10.0)
}

impl TallyReport {
    pub fn new(counts: GenderCounts, source: ReportSource, roster_label: impl Into<String>) -> Self {
        Self {
            counts,
            cards: Self::build_cards(&counts),
            chart: Self::build_chart(&counts),
            source,
            roster_label: roster_label.into(),
        }
    }

    pub fn local(counts: GenderCounts, roster_label: impl Into<String>) -> Self {
        Self::new(counts, ReportSource::Local, roster_label)
    }

    fn build_cards(counts: &GenderCounts) -> Vec<StatCard> {
        let total = counts.total();
        [
            (CardKind::Male, counts.male()),
            (CardKind::Female, counts.female()),
            (CardKind::Unknown, counts.unknown()),
            (CardKind::Total, total),
        ]
        .into_iter()
        .map(|(kind, count)| StatCard {
            kind,
            count,
            percentage: percentage(count, total),
        })
        .collect()
    }

    // Zero-valued categories never become slices.
    fn build_chart(counts: &GenderCounts) -> Vec<ChartSlice> {
        Category::ALL
            .iter()
            .filter(|category| counts.get(**category) > 0)
            .map(|category| {
                let count = counts.get(*category);
                ChartSlice {
                    category: *category,
                    count,
                    share: percentage(count, counts.total()),
                }
            })
            .collect()
    }

    pub fn card(&self, kind: CardKind) -> Option<&StatCard> {
        self.cards.iter().find(|card| card.kind == kind)
    }

    pub fn is_smart(&self) -> bool {
        matches!(self.source, ReportSource::Smart { .. })
    }
}

impl StatCard {
    pub fn percentage_label(&self) -> String {
        format_share(self.percentage)
    }
}
