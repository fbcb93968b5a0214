//! kalite-taxonomy
//!
//! Classification taxonomies for DÖF records and incident reports. Pure
//! data: every lookup is synchronous against an in-memory table, whether
//! the table was compiled in, loaded from a JSON document, or filled from
//! a fetching source.

pub mod cache;
pub mod error;
pub mod flat;
pub mod loader;
pub mod node;
pub mod tables;
pub mod tree;

use std::collections::HashMap;
use std::sync::Arc;

use kalite_core::models::form::TaxonomyKind;
use node::OptionItem;

/// A category → sub-category → description hierarchy.
///
/// Unknown or empty codes never fail: they resolve to an empty list so a
/// caller can render "no options yet" while an upstream level is unset.
pub trait Taxonomy: Send + Sync {
    /// Stable identifier (e.g., "dof", "hasta_guvenligi").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Number of classification levels: 2 when descriptions hang directly
    /// off categories, 3 when a sub-category sits in between.
    fn depth(&self) -> usize;

    /// Top-level categories in configured order.
    fn categories(&self) -> Vec<OptionItem>;

    /// Ordered children of `parent_code`, or empty for unknown codes and
    /// leaves.
    fn children_of(&self, parent_code: &str) -> Vec<OptionItem>;

    /// Children of `sub_category` within `category`. Codes only need to be
    /// unique among siblings, so this is the exact lookup for level three.
    fn children_at(&self, category: &str, sub_category: &str) -> Vec<OptionItem>;

    /// Check that each non-empty level is reachable from the one above it.
    ///
    /// An all-empty path is valid. A set level below an empty one is not.
    fn is_valid_path(
        &self,
        category: &str,
        sub_category: Option<&str>,
        description: Option<&str>,
    ) -> bool {
        let sub = sub_category.filter(|s| !s.is_empty());
        let desc = description.filter(|s| !s.is_empty());

        if category.is_empty() {
            return sub.is_none() && desc.is_none();
        }
        if !node::contains_code(&self.categories(), category) {
            return false;
        }

        match (sub, desc) {
            (None, None) => true,
            (Some(_), _) if self.depth() < 3 => false,
            (Some(sub), desc) => {
                node::contains_code(&self.children_of(category), sub)
                    && desc.is_none_or(|d| {
                        node::contains_code(&self.children_at(category, sub), d)
                    })
            }
            (None, Some(desc)) => {
                self.depth() == 2 && node::contains_code(&self.children_of(category), desc)
            }
        }
    }
}

/// The active table for each taxonomy kind.
///
/// Starts from the compiled-in tables; [`TaxonomySet::replace`] swaps one
/// out (e.g., for a JSON override loaded at startup).
#[derive(Clone)]
pub struct TaxonomySet {
    tables: HashMap<TaxonomyKind, Arc<dyn Taxonomy>>,
}

impl TaxonomySet {
    pub fn builtin() -> Self {
        let tables = TaxonomyKind::ALL
            .into_iter()
            .map(|kind| (kind, tables::builtin(kind)))
            .collect();
        Self { tables }
    }

    pub fn get(&self, kind: TaxonomyKind) -> Arc<dyn Taxonomy> {
        match self.tables.get(&kind) {
            Some(table) => Arc::clone(table),
            None => tables::builtin(kind),
        }
    }

    pub fn replace(&mut self, kind: TaxonomyKind, table: Arc<dyn Taxonomy>) {
        tracing::info!(taxonomy = %kind, name = table.name(), "taxonomy table replaced");
        self.tables.insert(kind, table);
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaxonomyKind, &Arc<dyn Taxonomy>)> {
        TaxonomyKind::ALL
            .into_iter()
            .filter_map(|kind| self.tables.get(&kind).map(|t| (kind, t)))
    }
}

impl Default for TaxonomySet {
    fn default() -> Self {
        Self::builtin()
    }
}
