use serde::{Deserialize, Serialize};

/// Per-line classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Male,
    Female,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Male, Category::Female, Category::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
            Category::Unknown => "unknown",
        }
    }
}

/// Aggregate counts for one classification run.
///
/// `total` is always `male + female + unknown`; the fields are private so the
/// only way to build a value is through constructors that derive it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GenderCounts {
    male: u64,
    female: u64,
    unknown: u64,
    total: u64,
}

impl GenderCounts {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_parts(male: u64, female: u64, unknown: u64) -> Self {
        Self {
            male,
            female,
            unknown,
            total: male + female + unknown,
        }
    }

    /// Like `from_parts`, but `None` when the total does not fit in a `u64`.
    pub fn checked_from_parts(male: u64, female: u64, unknown: u64) -> Option<Self> {
        let total = male.checked_add(female)?.checked_add(unknown)?;
        Some(Self {
            male,
            female,
            unknown,
            total,
        })
    }

    pub fn male(&self) -> u64 {
        self.male
    }

    pub fn female(&self) -> u64 {
        self.female
    }

    pub fn unknown(&self) -> u64 {
        self.unknown
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Male => self.male,
            Category::Female => self.female,
            Category::Unknown => self.unknown,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub(crate) fn record(&mut self, category: Category) {
        match category {
            Category::Male => self.male += 1,
            Category::Female => self.female += 1,
            Category::Unknown => self.unknown += 1,
        }
        self.total += 1;
    }
}

// Deserialization ignores any incoming `total` and recomputes it.
impl<'de> Deserialize<'de> for GenderCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            male: Option<u64>,
            #[serde(default)]
            female: Option<u64>,
            #[serde(default)]
            unknown: Option<u64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        GenderCounts::checked_from_parts(
            raw.male.unwrap_or(0),
            raw.female.unwrap_or(0),
            raw.unknown.unwrap_or(0),
        )
        .ok_or_else(|| serde::de::Error::custom("counts overflow"))
    }
}
