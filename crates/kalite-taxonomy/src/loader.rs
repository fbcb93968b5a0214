//! JSON taxonomy documents.
//!
//! A document replaces a compiled-in table at startup without a rebuild:
//!
//! ```json
//! { "layout": "flat", "id": "dof", "name": "DÖF Kategorileri",
//!   "categories": [ { "code": "atik_yonetimi", "label": "Atık Yönetimi",
//!                     "descriptions": [ { "code": "...", "label": "..." } ] } ] }
//! ```
//!
//! Tree documents carry `TaxonomyNode`s with nested `children` instead.

use std::path::Path;
use std::sync::Arc;

use kalite_core::models::form::TaxonomyKind;
use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;
use crate::flat::FlatTable;
use crate::node::{OptionItem, TaxonomyNode};
use crate::tree::TreeTable;
use crate::{Taxonomy, TaxonomySet};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum TaxonomyDocument {
    Flat {
        id: String,
        name: String,
        categories: Vec<FlatCategory>,
    },
    Tree {
        id: String,
        name: String,
        categories: Vec<TaxonomyNode>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatCategory {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub descriptions: Vec<OptionItem>,
}

impl TaxonomyDocument {
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn id(&self) -> &str {
        match self {
            TaxonomyDocument::Flat { id, .. } | TaxonomyDocument::Tree { id, .. } => id,
        }
    }

    /// Build and validate the table this document describes.
    pub fn into_taxonomy(self) -> Result<Arc<dyn Taxonomy>, TaxonomyError> {
        match self {
            TaxonomyDocument::Flat {
                id,
                name,
                categories,
            } => {
                let table = categories
                    .into_iter()
                    .fold(FlatTable::new(id, name), |table, c| {
                        table.with_category(&c.code, &c.label, c.descriptions)
                    });
                table.validate()?;
                Ok(Arc::new(table))
            }
            TaxonomyDocument::Tree {
                id,
                name,
                categories,
            } => {
                let table = TreeTable::new(id, name, categories);
                table.validate()?;
                Ok(Arc::new(table))
            }
        }
    }
}

pub fn load_file(path: &Path) -> Result<Arc<dyn Taxonomy>, TaxonomyError> {
    let contents = std::fs::read_to_string(path)?;
    TaxonomyDocument::from_json(&contents)?.into_taxonomy()
}

/// Replace built-in tables with every `<taxonomy id>.json` in `dir`.
///
/// Files whose stem is not a known taxonomy id are skipped with a warning.
/// The document's own `id` must match its file stem. Returns the number of
/// tables replaced.
pub fn load_overrides(dir: &Path, set: &mut TaxonomySet) -> Result<usize, TaxonomyError> {
    let mut replaced = 0;
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let kind: TaxonomyKind = match stem.parse() {
            Ok(kind) => kind,
            Err(_) => {
                tracing::warn!(path = %path.display(), "skipping unknown taxonomy document");
                continue;
            }
        };

        let contents = std::fs::read_to_string(&path)?;
        let document = TaxonomyDocument::from_json(&contents)?;
        if document.id() != kind.id() {
            return Err(TaxonomyError::IdMismatch {
                expected: kind.id().to_string(),
                found: document.id().to_string(),
            });
        }

        set.replace(kind, document.into_taxonomy()?);
        replaced += 1;
    }

    tracing::info!(dir = %dir.display(), replaced, "taxonomy overrides loaded");
    Ok(replaced)
}
