//! Three-level table: each category carries its own sub-category table,
//! and each sub-category its own description list.

use crate::Taxonomy;
use crate::error::TaxonomyError;
use crate::node::{self, OptionItem, TaxonomyNode};

const MAX_DEPTH: usize = 3;

#[derive(Debug, Clone)]
pub struct TreeTable {
    id: String,
    name: String,
    roots: Vec<TaxonomyNode>,
}

impl TreeTable {
    pub fn new(id: impl Into<String>, name: impl Into<String>, roots: Vec<TaxonomyNode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roots,
        }
    }

    pub fn roots(&self) -> &[TaxonomyNode] {
        &self.roots
    }

    fn root(&self, code: &str) -> Option<&TaxonomyNode> {
        self.roots.iter().find(|n| n.code == code)
    }

    pub fn validate(&self) -> Result<(), TaxonomyError> {
        fn walk(parent: &str, nodes: &[TaxonomyNode]) -> Result<(), TaxonomyError> {
            node::check_siblings(parent, nodes.iter().map(|n| n.code.as_str()))?;
            for n in nodes {
                match &n.children {
                    Some(children) if children.is_empty() => {
                        return Err(TaxonomyError::EmptyChildren {
                            code: n.code.clone(),
                        });
                    }
                    Some(children) => walk(&n.code, children)?,
                    None => {}
                }
            }
            Ok(())
        }

        walk(&self.id, &self.roots)?;
        if self.roots.iter().any(|r| r.depth() > MAX_DEPTH) {
            return Err(TaxonomyError::TooDeep {
                id: self.id.clone(),
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

fn options(nodes: &[TaxonomyNode]) -> Vec<OptionItem> {
    nodes.iter().map(TaxonomyNode::option).collect()
}

impl Taxonomy for TreeTable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn depth(&self) -> usize {
        MAX_DEPTH
    }

    fn categories(&self) -> Vec<OptionItem> {
        options(&self.roots)
    }

    /// A category code yields its sub-categories. A sub-category code
    /// yields the descriptions of the first category that holds it.
    fn children_of(&self, parent_code: &str) -> Vec<OptionItem> {
        if let Some(root) = self.root(parent_code) {
            return options(root.children());
        }
        self.roots
            .iter()
            .find_map(|r| r.child(parent_code))
            .map(|sub| options(sub.children()))
            .unwrap_or_default()
    }

    fn children_at(&self, category: &str, sub_category: &str) -> Vec<OptionItem> {
        self.root(category)
            .and_then(|r| r.child(sub_category))
            .map(|sub| options(sub.children()))
            .unwrap_or_default()
    }
}
