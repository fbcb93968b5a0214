use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::draft::DraftRecord;
use super::form::TaxonomyKind;

/// Which draft fields hold each level of a form's classification.
///
/// Two-level taxonomies have no sub-category field: descriptions hang
/// directly off the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationFields {
    pub taxonomy: TaxonomyKind,
    pub category: &'static str,
    pub sub_category: Option<&'static str>,
    pub description: &'static str,
}

impl ClassificationFields {
    /// Field names from the top of the hierarchy down.
    pub fn levels(&self) -> Vec<&'static str> {
        let mut levels = vec![self.category];
        levels.extend(self.sub_category);
        levels.push(self.description);
        levels
    }

    /// Every field below `field` in the hierarchy. Empty for the deepest
    /// level and for fields outside the classification.
    pub fn descendants_of(&self, field: &str) -> Vec<&'static str> {
        let levels = self.levels();
        match levels.iter().position(|l| *l == field) {
            Some(idx) => levels[idx + 1..].to_vec(),
            None => Vec::new(),
        }
    }

    pub fn selection(&self, draft: &DraftRecord) -> ClassificationSelection {
        ClassificationSelection {
            category: draft.text(self.category).trim().to_string(),
            sub_category: self
                .sub_category
                .map(|f| draft.text(f).trim().to_string())
                .unwrap_or_default(),
            description: draft.text(self.description).trim().to_string(),
        }
    }
}

/// The codes currently chosen at each classification level. Empty string
/// means nothing is selected at that level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationSelection {
    pub category: String,
    pub sub_category: String,
    pub description: String,
}

impl ClassificationSelection {
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.sub_category.is_empty() && self.description.is_empty()
    }

    fn opt(s: &str) -> Option<&str> {
        (!s.is_empty()).then_some(s)
    }

    pub fn sub_category(&self) -> Option<&str> {
        Self::opt(&self.sub_category)
    }

    pub fn description(&self) -> Option<&str> {
        Self::opt(&self.description)
    }
}
