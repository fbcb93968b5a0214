use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::TaxonomyError;

/// A selectable `{code, label}` pair as shown in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionItem {
    pub code: String,
    pub label: String,
}

impl OptionItem {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

impl From<(&str, &str)> for OptionItem {
    fn from((code, label): (&str, &str)) -> Self {
        OptionItem::new(code, label)
    }
}

/// A node in a classification tree. `children: None` marks a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxonomyNode {
    pub code: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TaxonomyNode>>,
}

impl TaxonomyNode {
    pub fn leaf(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            children: None,
        }
    }

    pub fn branch(
        code: impl Into<String>,
        label: impl Into<String>,
        children: Vec<TaxonomyNode>,
    ) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            children: Some(children),
        }
    }

    pub fn option(&self) -> OptionItem {
        OptionItem::new(&self.code, &self.label)
    }

    pub fn children(&self) -> &[TaxonomyNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn child(&self, code: &str) -> Option<&TaxonomyNode> {
        self.children().iter().find(|c| c.code == code)
    }

    /// Levels below and including this node.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(TaxonomyNode::depth).max().unwrap_or(0)
    }
}

pub(crate) fn contains_code(items: &[OptionItem], code: &str) -> bool {
    items.iter().any(|i| i.code == code)
}

/// Check sibling codes are non-empty and unique.
pub(crate) fn check_siblings<'a>(
    parent: &str,
    codes: impl IntoIterator<Item = &'a str>,
) -> Result<(), TaxonomyError> {
    let mut seen = HashSet::new();
    for code in codes {
        if code.trim().is_empty() {
            return Err(TaxonomyError::EmptyCode {
                parent: parent.to_string(),
            });
        }
        if !seen.insert(code) {
            return Err(TaxonomyError::DuplicateCode {
                parent: parent.to_string(),
                code: code.to_string(),
            });
        }
    }
    Ok(())
}
