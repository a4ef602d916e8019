use crate::models::{CardKind, OutputLanguage};

pub mod locale;
pub mod strings;

pub use locale::LocaleDetector;

pub struct LocalizedStrings {
    pub output_language: OutputLanguage,
}

impl LocalizedStrings {
    pub fn new(output_language: OutputLanguage) -> Self {
        Self { output_language }
    }

    pub fn get(&self, key: &str) -> &'static str {
        match self.output_language {
            OutputLanguage::English => strings::ENGLISH_STRINGS.get(key).unwrap_or(&""),
            OutputLanguage::Vietnamese => strings::VIETNAMESE_STRINGS.get(key).unwrap_or(&""),
        }
    }

    pub fn get_card(&self, kind: CardKind) -> &'static str {
        match kind {
            CardKind::Male => self.get("card_male"),
            CardKind::Female => self.get("card_female"),
            CardKind::Unknown => self.get("card_unknown"),
            CardKind::Total => self.get("card_total"),
        }
    }

    pub fn get_section(&self, section: &str) -> &'static str {
        let key = format!("section_{}", section.to_lowercase());
        self.get(&key)
    }

    pub fn get_message(&self, message: &str) -> &'static str {
        let key = format!("message_{}", message.to_lowercase());
        self.get(&key)
    }
}
