use crate::domain::language::{Language, MessageKey};
use crate::domain::ports::Localize;
use crate::error::Result;
use std::collections::HashMap;

/// Message catalog shipped with the crate; one entry per canonical key.
const EMBEDDED_MESSAGES: &str = include_str!("../../locales/messages.json");

/// Localization backed by a static message catalog.
///
/// Lookup falls back to English when a language is missing a translation,
/// and to the canonical key name when the key itself is absent, so the
/// core always gets a usable string.
pub struct StaticLocalizer {
    messages: HashMap<String, HashMap<String, String>>,
}

impl StaticLocalizer {
    /// Loads the catalog embedded in the binary.
    pub fn from_embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_MESSAGES)
    }

    /// Loads a caller-supplied catalog with the same shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            messages: serde_json::from_str(json)?,
        })
    }
}

impl Localize for StaticLocalizer {
    fn localize(&self, key: MessageKey, language: Language) -> String {
        let entry = self.messages.get(key.name());
        entry
            .and_then(|m| m.get(language.code()))
            .or_else(|| entry.and_then(|m| m.get(Language::En.code())))
            .cloned()
            .unwrap_or_else(|| key.name().to_string())
    }
}
