//! Taxonomies filled on demand from a fetching source.
//!
//! Fetching is the only async part. Each parent moves through `Loading`
//! to `Loaded` or `Failed`; lookups stay synchronous and return whatever
//! is loaded, which is empty until the fill completes.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Taxonomy;
use crate::error::TaxonomyError;
use crate::node::OptionItem;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Where a child list hangs. Sub-category codes are only unique within
/// their category, so level three is keyed by the full pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parent {
    Root,
    Category(String),
    SubCategory { category: String, sub: String },
}

impl Parent {
    pub fn category(code: impl Into<String>) -> Self {
        Parent::Category(code.into())
    }

    pub fn sub_category(category: impl Into<String>, sub: impl Into<String>) -> Self {
        Parent::SubCategory {
            category: category.into(),
            sub: sub.into(),
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parent::Root => f.write_str("<root>"),
            Parent::Category(code) => f.write_str(code),
            Parent::SubCategory { category, sub } => write!(f, "{category}/{sub}"),
        }
    }
}

/// A remote collaborator that lists children per parent.
pub trait TaxonomySource: Send + Sync {
    /// Fetch the ordered children of `parent`; [`Parent::Root`] lists the
    /// top-level categories.
    fn fetch_children<'a>(
        &'a self,
        parent: &'a Parent,
    ) -> BoxFuture<'a, Result<Vec<OptionItem>, TaxonomyError>>;
}

/// Serves an in-memory table through the fetching interface.
pub struct StaticSource {
    table: Arc<dyn Taxonomy>,
}

impl StaticSource {
    pub fn new(table: Arc<dyn Taxonomy>) -> Self {
        Self { table }
    }
}

impl TaxonomySource for StaticSource {
    fn fetch_children<'a>(
        &'a self,
        parent: &'a Parent,
    ) -> BoxFuture<'a, Result<Vec<OptionItem>, TaxonomyError>> {
        Box::pin(async move {
            Ok(match parent {
                Parent::Root => self.table.categories(),
                Parent::Category(code) => self.table.children_of(code),
                Parent::SubCategory { category, sub } => self.table.children_at(category, sub),
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum LoadState {
    Loading,
    Loaded(Vec<OptionItem>),
    Failed(String),
}

pub struct CachedTaxonomy {
    id: String,
    name: String,
    depth: usize,
    source: Arc<dyn TaxonomySource>,
    entries: RwLock<HashMap<Parent, LoadState>>,
}

impl CachedTaxonomy {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        depth: usize,
        source: Arc<dyn TaxonomySource>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            depth,
            source,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Current state for `parent`; `None` if never requested.
    pub fn state(&self, parent: &Parent) -> Option<LoadState> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(parent)
            .cloned()
    }

    fn set_state(&self, parent: &Parent, state: LoadState) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(parent.clone(), state);
    }

    /// Fetch `parent` unless it is already loaded or in flight.
    /// A failed entry is fetched again.
    pub async fn fill(&self, parent: &Parent) -> LoadState {
        match self.state(parent) {
            Some(state @ (LoadState::Loaded(_) | LoadState::Loading)) => return state,
            _ => {}
        }

        self.set_state(parent, LoadState::Loading);
        tracing::debug!(taxonomy = %self.id, %parent, "fetching children");

        let state = match self.source.fetch_children(parent).await {
            Ok(children) => LoadState::Loaded(children),
            Err(e) => {
                tracing::warn!(taxonomy = %self.id, %parent, error = %e, "taxonomy fetch failed");
                LoadState::Failed(e.to_string())
            }
        };
        self.set_state(parent, state.clone());
        state
    }

    fn loaded(&self, parent: &Parent) -> Vec<OptionItem> {
        match self.state(parent) {
            Some(LoadState::Loaded(children)) => children,
            _ => Vec::new(),
        }
    }
}

impl Taxonomy for CachedTaxonomy {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn categories(&self) -> Vec<OptionItem> {
        self.loaded(&Parent::Root)
    }

    fn children_of(&self, parent_code: &str) -> Vec<OptionItem> {
        self.loaded(&Parent::category(parent_code))
    }

    fn children_at(&self, category: &str, sub_category: &str) -> Vec<OptionItem> {
        self.loaded(&Parent::sub_category(category, sub_category))
    }
}
