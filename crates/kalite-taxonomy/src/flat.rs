//! Two-level table: descriptions keyed by category code only.

use std::collections::HashMap;

use crate::Taxonomy;
use crate::error::TaxonomyError;
use crate::node::{self, OptionItem};

#[derive(Debug, Clone)]
pub struct FlatTable {
    id: String,
    name: String,
    categories: Vec<OptionItem>,
    descriptions: HashMap<String, Vec<OptionItem>>,
}

impl FlatTable {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            categories: Vec::new(),
            descriptions: HashMap::new(),
        }
    }

    /// Append a category with its ordered description list.
    pub fn with_category(
        mut self,
        code: &str,
        label: &str,
        descriptions: impl IntoIterator<Item = OptionItem>,
    ) -> Self {
        self.categories.push(OptionItem::new(code, label));
        self.descriptions
            .insert(code.to_string(), descriptions.into_iter().collect());
        self
    }

    pub fn validate(&self) -> Result<(), TaxonomyError> {
        node::check_siblings(&self.id, self.categories.iter().map(|c| c.code.as_str()))?;
        for category in &self.categories {
            let descriptions = self
                .descriptions
                .get(&category.code)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            node::check_siblings(&category.code, descriptions.iter().map(|d| d.code.as_str()))?;
        }
        Ok(())
    }
}

impl Taxonomy for FlatTable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn depth(&self) -> usize {
        2
    }

    fn categories(&self) -> Vec<OptionItem> {
        self.categories.clone()
    }

    fn children_of(&self, parent_code: &str) -> Vec<OptionItem> {
        self.descriptions
            .get(parent_code)
            .cloned()
            .unwrap_or_default()
    }

    fn children_at(&self, _category: &str, _sub_category: &str) -> Vec<OptionItem> {
        Vec::new()
    }
}
