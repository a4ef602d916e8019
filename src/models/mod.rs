pub mod alias;
pub mod counts;
pub mod report;
pub mod roster;

pub use alias::{AliasTable, DEFAULT_FEMALE_ALIASES, DEFAULT_MALE_ALIASES};
pub use counts::{Category, GenderCounts};
pub use report::{format_percentage, format_share, CardKind, ChartSlice, ReportSource, StatCard, TallyReport};
pub use roster::{OutputLanguage, Roster, RosterSource, SAMPLE_ROSTER};
