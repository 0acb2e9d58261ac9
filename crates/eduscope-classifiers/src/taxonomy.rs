//! Category taxonomy: the fixed label space the classifiers were trained on
//!
//! Sorted key order defines the category index assignment used by the
//! category model's output label; sorted subcategory order per category
//! defines the index assignment of the per-category probability vector.
//! Both orderings are an implicit contract with classifier training and must
//! be preserved exactly, which is why the maps are B-tree based.

use eduscope_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Static category → subcategory mapping, loaded once and read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTaxonomy {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl CategoryTaxonomy {
    /// Build a taxonomy from category/subcategory pairs.
    pub fn from_entries<C, S, I, J>(entries: I) -> Result<Self>
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = (C, J)>,
        J: IntoIterator<Item = S>,
    {
        let categories: BTreeMap<String, BTreeSet<String>> = entries
            .into_iter()
            .map(|(category, subs)| {
                (
                    category.into(),
                    subs.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self::validated(categories)
    }

    /// Load the taxonomy from a YAML mapping of category → subcategory list.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read taxonomy {}: {e}", path.display()))
        })?;
        let categories: BTreeMap<String, BTreeSet<String>> = serde_yaml::from_str(&contents)
            .map_err(|e| {
                Error::config(format!("invalid taxonomy {}: {e}", path.display()))
            })?;
        Self::validated(categories)
    }

    fn validated(categories: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::config("taxonomy has no categories"));
        }
        for (category, subs) in &categories {
            if subs.is_empty() {
                return Err(Error::config(format!(
                    "category '{category}' has no subcategories"
                )));
            }
        }
        Ok(Self { categories })
    }

    /// Category names in sorted order; index position is the category
    /// model's label assignment.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Resolve a category model output label to its category name.
    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.categories.keys().nth(index).map(String::as_str)
    }

    /// Sorted subcategories of `category`; index position aligns with the
    /// per-category probability vector.
    pub fn subcategories(&self, category: &str) -> Option<Vec<&str>> {
        self.categories
            .get(category)
            .map(|subs| subs.iter().map(String::as_str).collect())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the taxonomy has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Slug form of a category name: lowercased, spaces replaced by underscores.
///
/// Load-bearing naming convention shared with the artifact provisioning
/// tooling; the subcategory model for a category is addressed by this slug.
pub fn artifact_slug(category: &str) -> String {
    category.to_lowercase().replace(' ', "_")
}

/// Artifact name of the subcategory model for `category`.
pub fn subcategory_model_name(category: &str) -> String {
    format!("{}_model", artifact_slug(category))
}
