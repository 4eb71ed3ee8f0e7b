// ABOUTME: Bilingual text pairs used by every catalog and label in a diet plan
// ABOUTME: Static borrowed form for catalog tables and owned form for serialized plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arabic/English text pair as stored in static catalog tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalizedStr {
    /// Arabic text
    pub ar: &'static str,
    /// English text
    pub en: &'static str,
}

impl LocalizedStr {
    /// Create a text pair from static strings
    #[must_use]
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }
}

/// Arabic/English text pair as emitted in a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Arabic text
    pub ar: String,
    /// English text
    pub en: String,
}

impl LocalizedText {
    /// Create a text pair
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Same text in both languages, used when no translation exists
    pub fn untranslated(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            ar: text.clone(),
            en: text,
        }
    }

    /// True when neither language carries any text
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.ar.trim().is_empty() && self.en.trim().is_empty()
    }
}

impl From<LocalizedStr> for LocalizedText {
    fn from(text: LocalizedStr) -> Self {
        Self {
            ar: text.ar.to_owned(),
            en: text.en.to_owned(),
        }
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.en, self.ar)
    }
}
